//! Parallel evaluation of a query file.

use rayon::prelude::*;
use std::path::PathBuf;
use tracing::info;

use super::{OutputOptions, build_engine, render};

/// Input parameters for the Batch command strategy.
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// File with one query per line
    pub path: PathBuf,
    pub output: OutputOptions,
}

/// Strategy for evaluating every non-empty line of a file.
///
/// Lines are evaluated in parallel against one shared engine; output keeps
/// the input order.
#[derive(Debug, Clone, Copy)]
pub struct BatchStrategy;

impl super::CommandStrategy for BatchStrategy {
    type Input = BatchInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(&input.path).map_err(|e| {
            anyhow::anyhow!("Cannot read query file {}: {e}", input.path.display())
        })?;
        let engine = build_engine()?;

        let queries = non_empty_lines(&content);
        info!("Evaluating {} queries from {}", queries.len(), input.path.display());

        let results: Vec<String> = queries
            .par_iter()
            .map(|query| render(&engine.evaluate(query), input.output))
            .collect();

        for line in results {
            println!("{line}");
        }
        Ok(())
    }
}

fn non_empty_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
