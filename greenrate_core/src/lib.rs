#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

//! Field extraction and intent dispatch for building-compliance queries.
//!
//! A query such as `"residential, regular building occupants = 120, long-term
//! bicycle storage"` is normalized, scanned by a fixed registry of field
//! patterns and a fixed list of intent phrases, and routed to exactly one
//! formula. The answer is always a single human-readable string.

pub mod engine;
pub mod error;
pub mod extraction;
pub mod formulas;
pub mod intent;
pub mod normalize;
pub mod units;

pub use engine::{Engine, Evaluation, respond};
pub use error::{BuildError, CalcError};
pub use extraction::{Capture, Dimensions, Field, FieldExtractor, FieldSet, PatternDef};
pub use formulas::{Computed, FormulaSpec};
pub use intent::{Intent, IntentClassifier, IntentFlags, Phrase};
pub use units::UnitFamily;
