mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use output::OutputFormat;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a log filter directive (e.g. `debug`).
const LOG_ENV: &str = "MCHECK_LOG";

#[derive(Parser)]
#[command(name = "mcheck")]
#[command(version, about = "Model schema checker and instance validator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an instance document against a schema
    Validate {
        /// Path to the schema file (YAML, TOML or JSON)
        schema: String,

        /// Path to the instance document (JSON, YAML or TOML)
        instance: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check a schema file without validating any instance
    Check {
        /// Path to the schema file (YAML, TOML or JSON)
        schema: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .init();

    match cli.command {
        Commands::Validate {
            schema,
            instance,
            format,
        } => commands::validate::execute(&schema, &instance, format),

        Commands::Check { schema, format } => commands::check::execute(&schema, format),
    }
}
