use super::compare::{self, CompareResult};
use super::convolution::{self, ConvolutionResult};
use super::exhaustive::{self, ExhaustiveResult};
use super::leaderboard::{self, LeaderboardResult};
use crate::core::models::spectrum::TargetSpectrum;
use crate::engine::config::{CompareConfig, ConvolutionConfig, ExhaustiveConfig, LeaderboardConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    BruteForce(ExhaustiveConfig),
    BranchAndBound(ExhaustiveConfig),
    Leaderboard(LeaderboardConfig),
    Convolution(ConvolutionConfig),
    Compare(CompareConfig),
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BruteForce(_) => "brute-force",
            Self::BranchAndBound(_) => "branch-and-bound",
            Self::Leaderboard(_) => "leaderboard",
            Self::Convolution(_) => "convolution",
            Self::Compare(_) => "compare",
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        match self {
            Self::BruteForce(config) | Self::BranchAndBound(config) => config.validate()?,
            Self::Leaderboard(config) => config.validate()?,
            Self::Convolution(config) => config.validate()?,
            Self::Compare(config) => config.validate()?,
        }
        Ok(())
    }
}

/// A sequencing request as it arrives from a front end: unvalidated masses plus the
/// strategy to run on them.
#[derive(Debug, Clone, PartialEq)]
pub struct SequencingRequest {
    pub spectrum: Vec<u32>,
    pub strategy: Strategy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum SequencingOutcome {
    BruteForce(ExhaustiveResult),
    BranchAndBound(ExhaustiveResult),
    Leaderboard(LeaderboardResult),
    Convolution(ConvolutionResult),
    Compare(CompareResult),
}

/// Validates the request and runs the selected strategy.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSpectrum`] for an empty or unsorted spectrum and
/// [`EngineError::Config`] for an invalid configuration, before any search round runs.
#[instrument(skip_all, name = "sequencing_request", fields(strategy = request.strategy.name()))]
pub fn run(
    request: &SequencingRequest,
    reporter: &ProgressReporter,
) -> Result<SequencingOutcome, EngineError> {
    let target = TargetSpectrum::new(request.spectrum.clone())?;
    request.strategy.validate()?;
    debug!(
        masses = target.len(),
        target_mass = target.total_mass(),
        "Request validated."
    );

    let outcome = match &request.strategy {
        Strategy::BruteForce(config) => {
            SequencingOutcome::BruteForce(exhaustive::brute_force(&target, config, reporter))
        }
        Strategy::BranchAndBound(config) => SequencingOutcome::BranchAndBound(
            exhaustive::branch_and_bound(&target, config, reporter),
        ),
        Strategy::Leaderboard(config) => {
            SequencingOutcome::Leaderboard(leaderboard::run(&target, config, reporter))
        }
        Strategy::Convolution(config) => {
            SequencingOutcome::Convolution(convolution::run(&target, config, reporter))
        }
        Strategy::Compare(config) => {
            SequencingOutcome::Compare(compare::run(&target, config, reporter))
        }
    };
    Ok(outcome)
}
