//! CLI entry point for the pipe maze analyser.
//!
//! Usage:
//!   pipe-maze analyze <maze.txt> [options]
//!   pipe-maze analyze --stdin [options]
//!
//! Options:
//!   --max-steps <n>   Maximum loop walk steps (default: grid size)
//!   --render          Include the classified map in the output
//!   --verbose         Log analysis details to stderr

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;

use pipe_maze::{analyze_str, AnalysisConfig};

#[derive(Parser)]
#[command(name = "pipe-maze")]
#[command(about = "Find the loop in a pipe maze and count the tiles it encloses")]
#[command(version)]
struct Cli {
    /// Log analysis details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a maze and print the report as JSON
    Analyze {
        /// Path to maze file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read maze from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Maximum loop walk steps
        #[arg(long)]
        max_steps: Option<usize>,

        /// Include the classified map in the report
        #[arg(long)]
        render: bool,
    },
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn read_input(file: Option<PathBuf>, stdin: bool) -> io::Result<String> {
    if stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(path) = file {
        debug!("reading maze from {}", path.display());
        fs::read_to_string(&path)
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "must provide either a file path or --stdin",
        ))
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            file,
            stdin,
            max_steps,
            render,
        } => {
            let input = match read_input(file, stdin) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Error reading maze: {}", e);
                    std::process::exit(1);
                }
            };

            let config = AnalysisConfig { max_steps, render };

            let report = match analyze_str(&input, &config) {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("Error analysing maze: {}", e);
                    std::process::exit(1);
                }
            };

            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error formatting report: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
