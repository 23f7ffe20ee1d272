use crate::core::models::peptide::Peptide;
use crate::core::models::spectrum::TargetSpectrum;
use crate::core::scoring::cyclic_score;
use crate::engine::config::LeaderboardConfig;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{CandidateRecord, LeaderSet, LeaderUpdate};
use crate::engine::tasks::extend::{Extension, evaluate, extend};
use crate::engine::tasks::trim::trim;
use serde::Serialize;
use tracing::{debug, info, instrument, trace};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardResult {
    /// The ranked, qualification-flagged leaderboard of every round. The last one is
    /// empty: it is the round in which no under-mass candidate remained.
    pub rounds: Vec<Vec<CandidateRecord>>,
    pub leaders: Vec<CandidateRecord>,
    pub leader_score: usize,
    /// Best cyclic score after each round; never decreases.
    pub leader_score_history: Vec<usize>,
    pub trim_width: usize,
}

impl LeaderboardResult {
    pub fn leader_peptides(&self) -> Vec<Peptide> {
        self.leaders.iter().map(|r| r.peptide.clone()).collect()
    }
}

/// Beam search for the peptides whose cyclic spectrum best explains a noisy target.
///
/// Full-mass extensions compete for the leader set by cyclic score; under-mass
/// extensions are trimmed by linear score to form the next frontier. Returns every
/// leader tied at the best score, in discovery order.
#[instrument(skip_all, name = "leaderboard_workflow", fields(target_mass = target.total_mass(), trim_width = config.trim_width))]
pub fn run(
    target: &TargetSpectrum,
    config: &LeaderboardConfig,
    reporter: &ProgressReporter,
) -> LeaderboardResult {
    reporter.report(Progress::PhaseStart {
        name: "Leaderboard",
    });
    info!(alphabet = %config.alphabet, "Starting leaderboard search.");

    let target_mass = target.total_mass();
    let mut leaders = LeaderSet::new();
    let mut frontier = vec![Peptide::empty()];
    let mut rounds = Vec::new();
    let mut leader_score_history = Vec::new();

    while !frontier.is_empty() {
        let round = rounds.len() + 1;
        reporter.report(Progress::RoundStart {
            round,
            frontier: frontier.len(),
        });

        let extensions = extend(&frontier, &config.alphabet);
        let full_mass_scores = evaluate(&extensions, |e: &Extension| {
            (e.mass == target_mass).then(|| cyclic_score(&e.peptide, target))
        });

        let mut under_mass = Vec::new();
        for (extension, full_mass_score) in extensions.into_iter().zip(full_mass_scores) {
            if let Some(score) = full_mass_score {
                match leaders.offer(&extension.peptide, score) {
                    LeaderUpdate::Replaced => {
                        trace!(peptide = %extension.peptide, score, "New leader.");
                    }
                    LeaderUpdate::Tied => {
                        trace!(peptide = %extension.peptide, score, "Leader tied.");
                    }
                    LeaderUpdate::Rejected => {}
                }
            } else if extension.mass < target_mass {
                under_mass.push(extension.peptide);
            }
        }

        let trimmed = trim(under_mass, target, config.trim_width);
        debug!(
            round,
            candidates = trimmed.leaderboard.len(),
            survivors = trimmed.survivors.len(),
            leader_score = leaders.best_score(),
            leaders = leaders.leaders().len(),
            "Round complete."
        );
        reporter.report(Progress::RoundFinish {
            round,
            survivors: trimmed.survivors.len(),
        });

        rounds.push(trimmed.leaderboard);
        leader_score_history.push(leaders.best_score());
        frontier = trimmed.survivors;
    }

    let leader_score = leaders.best_score();
    let leaders = leaders.into_leaders();
    info!(
        rounds = rounds.len(),
        leader_score,
        leaders = leaders.len(),
        "Leaderboard search complete."
    );
    reporter.report(Progress::PhaseFinish);

    LeaderboardResult {
        rounds,
        leaders,
        leader_score,
        leader_score_history,
        trim_width: config.trim_width,
    }
}
