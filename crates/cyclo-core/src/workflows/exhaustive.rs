use crate::core::models::peptide::Peptide;
use crate::core::models::spectrum::TargetSpectrum;
use crate::core::scoring::{cyclic_score, is_consistent};
use crate::core::spectrum::cyclic_spectrum;
use crate::engine::config::ExhaustiveConfig;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::CandidateRecord;
use crate::engine::tasks::extend::{Extension, evaluate, extend};
use crate::engine::tree::{NodeId, NodeOutcome, SearchTree, TreeBuilder};
use serde::Serialize;
use tracing::{debug, info, instrument, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pruning {
    /// Only the mass bound limits the search.
    MassBound,
    /// Under-mass candidates must also be consistent with the target.
    Consistency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExhaustiveResult {
    /// Peptides whose cyclic spectrum equals the target, in discovery order.
    /// Rotations of one cyclic peptide are reported separately.
    pub solutions: Vec<Peptide>,
    pub rounds: usize,
    pub explored: usize,
    /// Annotated cyclic spectra of every full-mass candidate; filled only when the tree is recorded.
    pub candidates: Vec<CandidateRecord>,
    pub tree: Option<SearchTree>,
}

pub fn brute_force(
    target: &TargetSpectrum,
    config: &ExhaustiveConfig,
    reporter: &ProgressReporter,
) -> ExhaustiveResult {
    run(target, config, Pruning::MassBound, reporter)
}

pub fn branch_and_bound(
    target: &TargetSpectrum,
    config: &ExhaustiveConfig,
    reporter: &ProgressReporter,
) -> ExhaustiveResult {
    run(target, config, Pruning::Consistency, reporter)
}

#[instrument(skip_all, name = "exhaustive_workflow", fields(pruning = ?pruning, target_mass = target.total_mass()))]
pub fn run(
    target: &TargetSpectrum,
    config: &ExhaustiveConfig,
    pruning: Pruning,
    reporter: &ProgressReporter,
) -> ExhaustiveResult {
    let phase = match pruning {
        Pruning::MassBound => "Brute Force",
        Pruning::Consistency => "Branch and Bound",
    };
    reporter.report(Progress::PhaseStart { name: phase });
    info!(
        alphabet = %config.alphabet,
        record_tree = config.record_tree,
        "Starting exhaustive search."
    );

    let mut tree = config.record_tree.then(TreeBuilder::new);
    let mut frontier = vec![Peptide::empty()];
    let mut frontier_nodes: Vec<Option<NodeId>> = vec![tree.as_ref().map(TreeBuilder::root)];
    let mut solutions = Vec::new();
    let mut candidates = Vec::new();
    let mut rounds = 0;
    let mut explored = 0;

    while !frontier.is_empty() {
        rounds += 1;
        reporter.report(Progress::RoundStart {
            round: rounds,
            frontier: frontier.len(),
        });

        let extensions = extend(&frontier, &config.alphabet);
        let outcomes = evaluate(&extensions, |e: &Extension| judge(e, target, pruning));
        explored += extensions.len();

        let mut next_frontier = Vec::new();
        let mut next_nodes = Vec::new();
        for (extension, outcome) in extensions.into_iter().zip(outcomes) {
            let node = match (tree.as_mut(), frontier_nodes[extension.parent]) {
                (Some(builder), Some(parent)) => {
                    Some(builder.add(parent, extension.peptide.clone(), rounds, outcome))
                }
                _ => None,
            };

            if config.record_tree
                && matches!(
                    outcome,
                    NodeOutcome::Solution | NodeOutcome::SpectrumMismatch
                )
            {
                let score = cyclic_score(&extension.peptide, target);
                candidates.push(CandidateRecord::cyclic(extension.peptide.clone(), score));
            }

            match outcome {
                NodeOutcome::Solution => {
                    trace!(peptide = %extension.peptide, "Exact match found.");
                    solutions.push(extension.peptide);
                }
                NodeOutcome::Extended => {
                    next_frontier.push(extension.peptide);
                    next_nodes.push(node);
                }
                _ => {}
            }
        }

        debug!(
            round = rounds,
            extended = frontier.len(),
            survivors = next_frontier.len(),
            solutions = solutions.len(),
            "Round complete."
        );
        reporter.report(Progress::RoundFinish {
            round: rounds,
            survivors: next_frontier.len(),
        });

        frontier = next_frontier;
        frontier_nodes = next_nodes;
    }

    info!(
        rounds,
        explored,
        solutions = solutions.len(),
        "Exhaustive search complete."
    );
    reporter.report(Progress::PhaseFinish);

    ExhaustiveResult {
        solutions,
        rounds,
        explored,
        candidates,
        tree: tree.map(TreeBuilder::finish),
    }
}

fn judge(extension: &Extension, target: &TargetSpectrum, pruning: Pruning) -> NodeOutcome {
    let target_mass = target.total_mass();
    if extension.mass == target_mass {
        if cyclic_spectrum(&extension.peptide).masses() == &target[..] {
            NodeOutcome::Solution
        } else {
            NodeOutcome::SpectrumMismatch
        }
    } else if extension.mass > target_mass {
        NodeOutcome::MassExceeded
    } else if pruning == Pruning::Consistency && !is_consistent(&extension.peptide, target) {
        NodeOutcome::Inconsistent
    } else {
        NodeOutcome::Extended
    }
}
