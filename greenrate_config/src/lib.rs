//! User configuration stored at `~/greenrate/config.json`.

mod schema;

pub use schema::{Config, LoggingConfig, OutputConfig, OutputFormat};
