use super::{read_masses, write_output};
use crate::cli::{CompareArgs, ConfigArgs, ConvolutionArgs, ExhaustiveArgs, LeaderboardArgs, OutputArgs, TargetArgs};
use crate::config::{CliOverrides, PartialConfig, Settings};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use cyclopep::engine::progress::ProgressReporter;
use cyclopep::workflows::request::{self, SequencingOutcome, SequencingRequest, Strategy};
use tracing::{info, warn};

pub fn brute_force(args: ExhaustiveArgs, quiet: bool) -> Result<()> {
    let settings = resolve(&args.config, &CliOverrides::from(&args))?;
    let strategy = Strategy::BruteForce(settings.exhaustive()?);
    execute(&args.target, &args.output, strategy, quiet)
}

pub fn branch_and_bound(args: ExhaustiveArgs, quiet: bool) -> Result<()> {
    let settings = resolve(&args.config, &CliOverrides::from(&args))?;
    let strategy = Strategy::BranchAndBound(settings.exhaustive()?);
    execute(&args.target, &args.output, strategy, quiet)
}

pub fn leaderboard(args: LeaderboardArgs, quiet: bool) -> Result<()> {
    let settings = resolve(&args.config, &CliOverrides::from(&args))?;
    let strategy = Strategy::Leaderboard(settings.leaderboard()?);
    execute(&args.target, &args.output, strategy, quiet)
}

pub fn convolution(args: ConvolutionArgs, quiet: bool) -> Result<()> {
    let settings = resolve(&args.config, &CliOverrides::from(&args))?;
    let strategy = Strategy::Convolution(settings.convolution()?);
    execute(&args.target, &args.output, strategy, quiet)
}

pub fn compare(args: CompareArgs, quiet: bool) -> Result<()> {
    let settings = resolve(&args.config, &CliOverrides::from(&args))?;
    let strategy = Strategy::Compare(settings.compare()?);
    execute(&args.target, &args.output, strategy, quiet)
}

fn resolve(config: &ConfigArgs, overrides: &CliOverrides) -> Result<Settings> {
    let partial = PartialConfig::load(config.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    partial.merge_with_cli(overrides, &config.set_values)
}

fn execute(target: &TargetArgs, output: &OutputArgs, strategy: Strategy, quiet: bool) -> Result<()> {
    let request = SequencingRequest {
        spectrum: read_masses(target)?,
        strategy,
    };

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the '{}' workflow...", request.strategy.name());
    let outcome = request::run(&request, &reporter)?;
    summarize(&outcome);

    write_output(output, &outcome)
}

fn summarize(outcome: &SequencingOutcome) {
    match outcome {
        SequencingOutcome::BruteForce(result) | SequencingOutcome::BranchAndBound(result) => {
            if result.solutions.is_empty() {
                warn!("No sequence reproduces the target spectrum exactly.");
            }
            info!(
                "Found {} exact match(es) in {} round(s), {} candidates explored.",
                result.solutions.len(),
                result.rounds,
                result.explored
            );
        }
        SequencingOutcome::Leaderboard(result) => {
            info!(
                "{} leader(s) with score {} after {} round(s).",
                result.leaders.len(),
                result.leader_score,
                result.rounds.len()
            );
        }
        SequencingOutcome::Convolution(result) => {
            info!(
                "Convolution alphabet '{}': {} leader(s) with score {}.",
                result.selection.alphabet,
                result.leaderboard.leaders.len(),
                result.leaderboard.leader_score
            );
        }
        SequencingOutcome::Compare(result) => {
            for (name, timed) in [
                ("brute-force", &result.brute_force),
                ("branch-and-bound", &result.branch_and_bound),
                ("leaderboard", &result.leaderboard),
                ("convolution", &result.convolution),
            ] {
                info!(
                    "{}: {} solution(s) in {:.3}s",
                    name,
                    timed.solution.len(),
                    timed.execution_time.as_secs_f64()
                );
            }
        }
    }
}
