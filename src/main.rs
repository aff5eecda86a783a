//! Despot CLI - play, script, and validate the propaganda-state game.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Despot - a deterministic single-player narrative game
#[derive(Parser, Debug)]
#[command(name = "despot")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// Scenario CSV file
        #[arg(short, long, default_value = "data/scenarios.csv")]
        scenarios: PathBuf,
    },

    /// Run a scripted playthrough from a list of choices
    Run {
        /// Scenario CSV file
        #[arg(short, long, default_value = "data/scenarios.csv")]
        scenarios: PathBuf,

        /// Option numbers (1-4), comma-separated, consumed one per year
        #[arg(short, long, required = true, value_delimiter = ',')]
        choices: Vec<u8>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Validate a scenario CSV file
    Validate {
        /// Scenario CSV file to validate
        #[arg(required = true)]
        scenarios: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play { scenarios } => cli::play::execute(&scenarios),

        Commands::Run {
            scenarios,
            choices,
            format,
        } => cli::run::execute(&scenarios, &choices, format),

        Commands::Validate { scenarios } => cli::validate::execute(&scenarios),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
