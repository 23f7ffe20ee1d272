mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("cyclopep CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let quiet = cli.quiet;
    let command_result = match cli.command {
        Commands::BruteForce(args) => {
            info!("Dispatching to 'brute-force' command.");
            commands::search::brute_force(args, quiet)
        }
        Commands::BranchAndBound(args) => {
            info!("Dispatching to 'branch-and-bound' command.");
            commands::search::branch_and_bound(args, quiet)
        }
        Commands::Leaderboard(args) => {
            info!("Dispatching to 'leaderboard' command.");
            commands::search::leaderboard(args, quiet)
        }
        Commands::Convolution(args) => {
            info!("Dispatching to 'convolution' command.");
            commands::search::convolution(args, quiet)
        }
        Commands::Compare(args) => {
            info!("Dispatching to 'compare' command.");
            commands::search::compare(args, quiet)
        }
        Commands::Spectrum(args) => {
            info!("Dispatching to 'spectrum' command.");
            commands::spectrum::run(args)
        }
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }

    command_result
}
