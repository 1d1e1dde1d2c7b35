//! Typed field extraction from free-form compliance queries.
//!
//! A fixed registry of named patterns is applied to the normalized text.
//! Each pattern matches at most once; absence of a match is the only other
//! outcome, so extraction itself never fails.

pub mod extractor;
pub mod field;
pub mod patterns;

pub use extractor::{Capture, Dimensions, FieldExtractor, FieldPattern, FieldSet};
pub use field::Field;
pub use patterns::{PatternDef, default_patterns};
