//! vspace CLI - compute version-space boundaries from delimited tables.

mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "vspace")]
#[command(author, version, about = "vspace - Version-space boundaries over labeled tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: vspace.toml in this or a parent directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default vspace.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// List a table's columns
    Columns {
        /// Delimited table file
        file: PathBuf,

        /// Field delimiter
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// Compute the specific and general boundary of a table
    Run {
        /// Delimited table file
        file: PathBuf,

        /// Column holding the positive/negative label
        #[arg(short, long)]
        target: String,

        /// Literal marking a positive example (exact, case-sensitive)
        #[arg(short, long)]
        positive: Option<String>,

        /// Field delimiter
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so rendered output stays clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Columns { file, delimiter } => {
            if let Some(d) = delimiter {
                config.table.delimiter = d;
            }
            commands::columns::run(&file, &config.loader_options()?)
        }
        Commands::Run {
            file,
            target,
            positive,
            delimiter,
            format,
            output,
        } => {
            if let Some(p) = positive {
                config.labels.positive = p;
            }
            if let Some(d) = delimiter {
                config.table.delimiter = d;
            }
            if let Some(f) = format {
                config.output.format = f;
            }
            commands::run::run(commands::run::RunArgs {
                file: &file,
                target: &target,
                options: config.loader_options()?,
                policy: config.label_policy(),
                format: config.output.format,
                output: output.as_deref(),
            })
        }
    }
}
