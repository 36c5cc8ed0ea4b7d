//! CLI Adapter.

use clap::{Parser, Subcommand};

use crate::CollectorPaths;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "bcdc")]
#[command(version)]
#[command(
    about = "Locate the browser-compat-data and collector results directories",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved collector directories
    #[clap(visible_alias = "p")]
    Paths {
        /// Emit machine-readable JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Paths { json } => run_paths(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_paths(json: bool) -> Result<(), AppError> {
    let resolved = CollectorPaths::from_executable()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        println!("bcd_dir: {}", resolved.bcd_dir.display());
        println!("results_dir: {}", resolved.results_dir.display());
    }
    Ok(())
}
