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
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use greenrate_config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use command::{
    BatchInput, BatchStrategy, CommandStrategy, EvalInput, EvalStrategy, FieldsStrategy,
    InfoStrategy, InitStrategy, IntentsStrategy, OutputOptions, ReplStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "greenrate")]
#[command(about = "Building-compliance calculator for free-text queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single query
    Eval {
        /// Query text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate queries interactively, one per line
    Repl {
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate every non-empty line of a file
    Batch {
        /// File with one query per line
        file: PathBuf,

        /// Print results as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Show the fields and intents found in a query
    Fields {
        /// Query text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List intents in dispatch order
    Intents,
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default()?;
    init_tracing(&config)?;
    debug!("Output format: {:?}", config.output.format);

    let output = |json: bool| OutputOptions {
        json: json || config.output.format == OutputFormat::Json,
        show_intent: config.output.show_intent,
    };

    match cli.command {
        Commands::Eval { text, json } => {
            EvalStrategy
                .execute(EvalInput {
                    text: text.join(" "),
                    output: output(json),
                })
                .await
        }
        Commands::Repl { json } => ReplStrategy.execute(output(json)).await,
        Commands::Batch { file, json } => {
            BatchStrategy
                .execute(BatchInput {
                    path: file,
                    output: output(json),
                })
                .await
        }
        Commands::Fields { text } => FieldsStrategy.execute(text.join(" ")).await,
        Commands::Intents => IntentsStrategy.execute(()).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
