use std::io::Write;

use super::{OutputOptions, build_engine, render};

/// Strategy for the interactive loop.
///
/// Reads one query per line until `exit` or end of input.
#[derive(Debug, Clone, Copy)]
pub struct ReplStrategy;

impl super::CommandStrategy for ReplStrategy {
    type Input = OutputOptions;

    async fn execute(&self, output: Self::Input) -> anyhow::Result<()> {
        let engine = build_engine()?;
        println!("greenrate started. Type 'exit' to quit.\n");

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut input = String::new();
            if std::io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input == "exit" {
                break;
            }

            if input.is_empty() {
                continue;
            }

            println!("\n{}\n", render(&engine.evaluate(input), output));
        }

        Ok(())
    }
}
