use greenrate_config::Config;
use greenrate_core::Intent;

use super::build_engine;

/// Strategy for displaying configuration information.
///
/// Shows where the config file lives, the effective settings, and the size of
/// the compiled registry.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let config = Config::load_or_default()?;

        println!("=== greenrate Configuration ===\n");

        println!("Config File:");
        println!("  Path: {}", config_path.display());
        if config_path.exists() {
            println!("  Status: Loaded");
        } else {
            println!("  Status: Not found (using defaults, run 'greenrate init')");
        }
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);
        if let Ok(filter) = std::env::var("RUST_LOG") {
            println!("  RUST_LOG: {filter} (overrides level)");
        }
        println!();

        println!("Output:");
        println!("  Format: {:?}", config.output.format);
        println!("  Show Intent: {}", config.output.show_intent);
        println!();

        let engine = build_engine()?;
        println!("Registry:");
        println!("  Field Patterns: {}", engine.extractor().patterns().len());
        println!("  Intents: {}", Intent::COUNT);

        Ok(())
    }
}
