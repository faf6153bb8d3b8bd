use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error, info};

use crate::cli::logging::init_cli_logging;
use crate::parsers::load_json_annotations;
use crate::utils::format_path_with_tilde;

#[derive(Parser)]
#[command(name = "annotqc")]
#[command(version = "0.1.0")]
#[command(about = "Load and validate JSON annotation files", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load an annotation file and report how many records it holds
    Check {
        /// Path to a JSON file containing an array of objects
        path: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Check { path }) => {
            check(path)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn check(path: &Path) -> Result<()> {
    debug!(path = %path.display(), "loading annotation file");

    let result = match load_json_annotations(path) {
        Ok(result) => result,
        Err(e) => {
            error!(path = %e.path().display(), kind = ?e.kind(), "annotation load failed");
            return Err(e).context("Failed to load annotations");
        }
    };

    info!(path = %result.path().display(), records = result.len(), "annotation file loaded");
    println!(
        "Loaded {} from {}",
        record_count(result.len()),
        format_path_with_tilde(result.path())
    );

    Ok(())
}

fn record_count(n: usize) -> String {
    if n == 1 { "1 record".to_string() } else { format!("{} records", n) }
}
