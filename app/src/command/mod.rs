//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is a separate zero-sized strategy type with its own input
//! type, dispatched statically from `main`.

use greenrate_core::{Engine, Evaluation};
use tracing::info;

mod batch;
mod eval;
mod fields;
mod info;
mod init;
mod intents;
mod repl;
mod version;

pub use batch::{BatchInput, BatchStrategy};
pub use eval::{EvalInput, EvalStrategy};
pub use fields::FieldsStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use intents::IntentsStrategy;
pub use repl::ReplStrategy;
pub use version::VersionStrategy;

/// How evaluation results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub json: bool,
    pub show_intent: bool,
}

/// Compile the default registry once for a command.
fn build_engine() -> anyhow::Result<Engine> {
    let engine = Engine::with_defaults()?;
    info!(
        "Compiled {} field patterns",
        engine.extractor().patterns().len()
    );
    Ok(engine)
}

/// Render one evaluation according to the output options.
fn render(evaluation: &Evaluation, output: OutputOptions) -> String {
    if output.json {
        return evaluation.to_json().to_string();
    }

    match evaluation.intent {
        Some(intent) if output.show_intent => format!("[{intent}] {evaluation}"),
        _ => evaluation.to_string(),
    }
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type, so
/// parameters are passed without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
