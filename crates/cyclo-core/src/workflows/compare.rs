use super::{convolution, exhaustive, leaderboard};
use crate::core::models::peptide::Peptide;
use crate::core::models::spectrum::TargetSpectrum;
use crate::engine::config::CompareConfig;
use crate::engine::progress::ProgressReporter;
use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// A strategy's solutions and the wall-clock time it took to produce them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timed<T> {
    pub solution: T,
    #[serde(serialize_with = "as_seconds")]
    pub execution_time: Duration,
}

fn as_seconds<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let solution = f();
    Timed {
        solution,
        execution_time: start.elapsed(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareResult {
    pub brute_force: Timed<Vec<Peptide>>,
    pub branch_and_bound: Timed<Vec<Peptide>>,
    pub leaderboard: Timed<Vec<Peptide>>,
    pub convolution: Timed<Vec<Peptide>>,
}

/// Runs every strategy on the same target, one after the other, and times each.
///
/// The exhaustive strategies report their exact matches; the leaderboard strategies
/// report their leaders.
#[instrument(skip_all, name = "compare_workflow", fields(target_mass = target.total_mass()))]
pub fn run(target: &TargetSpectrum, config: &CompareConfig, reporter: &ProgressReporter) -> CompareResult {
    let brute_force =
        timed(|| exhaustive::brute_force(target, &config.exhaustive, reporter).solutions);
    let branch_and_bound =
        timed(|| exhaustive::branch_and_bound(target, &config.exhaustive, reporter).solutions);
    let leaderboard =
        timed(|| leaderboard::run(target, &config.leaderboard, reporter).leader_peptides());
    let convolution = timed(|| {
        convolution::run(target, &config.convolution, reporter)
            .leaderboard
            .leader_peptides()
    });

    info!(
        brute_force_secs = brute_force.execution_time.as_secs_f64(),
        branch_and_bound_secs = branch_and_bound.execution_time.as_secs_f64(),
        leaderboard_secs = leaderboard.execution_time.as_secs_f64(),
        convolution_secs = convolution.execution_time.as_secs_f64(),
        "Strategy comparison complete."
    );

    CompareResult {
        brute_force,
        branch_and_bound,
        leaderboard,
        convolution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mass_table::Alphabet;
    use crate::engine::config::CompareConfigBuilder;
    use std::collections::HashSet;

    #[test]
    fn every_strategy_solves_an_exact_spectrum() {
        let target = TargetSpectrum::new(vec![0, 57, 71, 87, 128, 144, 158, 215]).unwrap();
        let config = CompareConfigBuilder::new()
            .alphabet(Alphabet::from_symbols("GAS").unwrap())
            .trim_width(5)
            .top_k(3)
            .build()
            .unwrap();
        let result = run(&target, &config, &ProgressReporter::new());

        let as_set = |peptides: &[Peptide]| -> HashSet<String> {
            peptides.iter().map(Peptide::to_string).collect()
        };
        let exact = as_set(&result.brute_force.solution);
        assert_eq!(exact.len(), 6);
        assert_eq!(as_set(&result.branch_and_bound.solution), exact);
        assert_eq!(as_set(&result.leaderboard.solution), exact);
        assert_eq!(as_set(&result.convolution.solution), exact);
    }

    #[test]
    fn execution_time_serializes_as_seconds() {
        let timed = Timed {
            solution: vec!["GAS".parse::<Peptide>().unwrap()],
            execution_time: Duration::from_millis(1500),
        };
        let value = serde_json::to_value(&timed).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "solution": ["GAS"], "execution_time": 1.5 })
        );
    }
}
