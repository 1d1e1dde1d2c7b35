use super::{OutputOptions, build_engine, render};

/// Input parameters for the Eval command strategy.
#[derive(Debug, Clone)]
pub struct EvalInput {
    /// Query text, already joined from the command-line words
    pub text: String,
    pub output: OutputOptions,
}

/// Strategy for evaluating a single query.
#[derive(Debug, Clone, Copy)]
pub struct EvalStrategy;

impl super::CommandStrategy for EvalStrategy {
    type Input = EvalInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let engine = build_engine()?;
        let evaluation = engine.evaluate(&input.text);
        println!("{}", render(&evaluation, input.output));
        Ok(())
    }
}
