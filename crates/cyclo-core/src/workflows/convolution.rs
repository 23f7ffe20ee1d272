use super::leaderboard::{self, LeaderboardResult};
use crate::core::models::spectrum::TargetSpectrum;
use crate::engine::config::{ConvolutionConfig, LeaderboardConfig};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::convolution::{ConvolutionSelection, select_candidates};
use serde::Serialize;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvolutionResult {
    pub selection: ConvolutionSelection,
    pub leaderboard: LeaderboardResult,
}

/// Runs the leaderboard search over the alphabet implied by the target's spectral
/// convolution instead of a fixed one.
#[instrument(skip_all, name = "convolution_workflow", fields(top_k = config.top_k))]
pub fn run(
    target: &TargetSpectrum,
    config: &ConvolutionConfig,
    reporter: &ProgressReporter,
) -> ConvolutionResult {
    reporter.report(Progress::PhaseStart {
        name: "Spectral Convolution",
    });
    let selection = select_candidates(target, config.top_k, config.mass_range);
    if selection.alphabet.is_empty() {
        warn!(
            selected = ?selection.selected_masses,
            "No selected mass matches a known monomer; the search will find nothing."
        );
    }
    reporter.report(Progress::Message(format!(
        "Selected alphabet: {}",
        selection.alphabet
    )));
    reporter.report(Progress::PhaseFinish);

    let leaderboard_config = LeaderboardConfig {
        alphabet: selection.alphabet.clone(),
        trim_width: config.trim_width,
    };
    let leaderboard = leaderboard::run(target, &leaderboard_config, reporter);

    info!(
        alphabet = %selection.alphabet,
        leader_score = leaderboard.leader_score,
        "Convolution search complete."
    );

    ConvolutionResult {
        selection,
        leaderboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::MassRange;

    fn target(masses: &[u32]) -> TargetSpectrum {
        TargetSpectrum::new(masses.to_vec()).unwrap()
    }

    #[test]
    fn convolution_alphabet_recovers_the_example() {
        let t = target(&[0, 113, 128, 186, 241, 299, 314, 427]);
        let config = ConvolutionConfig {
            top_k: 3,
            mass_range: MassRange::default(),
            trim_width: 10,
        };
        let result = run(&t, &config, &ProgressReporter::new());

        assert_eq!(result.selection.selected_masses, vec![113, 128, 186]);
        assert_eq!(result.selection.alphabet.symbols(), "ILKQW");
        assert_eq!(result.leaderboard.leader_score, 8);
        assert!(
            result
                .leaderboard
                .leader_peptides()
                .iter()
                .any(|p| p.to_string() == "IKW")
        );
    }

    #[test]
    fn unmatched_masses_run_an_empty_search() {
        // The only in-range difference is 60, which no monomer weighs.
        let t = target(&[0, 60]);
        let config = ConvolutionConfig {
            top_k: 1,
            mass_range: MassRange::default(),
            trim_width: 5,
        };
        let result = run(&t, &config, &ProgressReporter::new());
        assert_eq!(result.selection.selected_masses, vec![60]);
        assert!(result.selection.alphabet.is_empty());
        assert!(result.leaderboard.leaders.is_empty());
    }
}
