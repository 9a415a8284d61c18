//! schemabridge CLI - Java binding generator
//!
//! Commands:
//! - `schemabridge generate` - Generate Java classes from a schema document
//! - `schemabridge check` - Validate a schemabridge.toml manifest and its schema

use clap::{Parser, Subcommand};
use schemabridge_cli::generate::{self, GenerateOptions};
use schemabridge_cli::manifest;

#[derive(Parser)]
#[command(name = "schemabridge")]
#[command(author, version, about = "Java binding generator for schema declarations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java classes from a schema document
    Generate {
        /// Path to the schema JSON document
        #[arg(short, long)]
        schema: Option<String>,

        /// Output directory for generated code
        #[arg(short, long)]
        output: Option<String>,

        /// Java package of the generated classes
        #[arg(short, long)]
        package: Option<String>,

        /// Path to schemabridge.toml manifest
        #[arg(short, long)]
        manifest: Option<String>,

        /// Generate in memory and list the classes without writing them
        #[arg(long)]
        dry_run: bool,

        /// Log level (trace, debug, info, warn, error, off)
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Validate a schemabridge.toml manifest
    Check {
        /// Path to schemabridge.toml (default: ./schemabridge.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema,
            output,
            package,
            manifest,
            dry_run,
            log_level,
        } => {
            generate::run(GenerateOptions {
                schema,
                output,
                package,
                manifest,
                log_level,
                dry_run,
            })?;
        }
        Commands::Check { manifest } => {
            manifest::check(manifest)?;
        }
    }

    Ok(())
}
