use super::extend::evaluate;
use crate::core::models::peptide::Peptide;
use crate::core::models::spectrum::TargetSpectrum;
use crate::core::scoring::linear_score;
use crate::engine::state::CandidateRecord;
use std::cmp::Reverse;
use tracing::{instrument, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trimmed {
    /// Peptides carried into the next round, best first.
    pub survivors: Vec<Peptide>,
    /// Every input candidate, ranked by linear score; survivors are flagged `qualified`.
    pub leaderboard: Vec<CandidateRecord>,
}

/// Keeps the `trim_width` best candidates by linear score, plus every candidate tied
/// with the last one kept.
///
/// Candidates are ranked by descending score; equal scores keep their input order.
/// When there are at most `trim_width` candidates all of them survive. Otherwise the
/// cutoff is the score at rank `trim_width` and the scan stops at the first lower
/// score, so ties at the cutoff survive and the result may exceed `trim_width`.
#[instrument(level = "debug", skip_all, fields(candidates = peptides.len(), trim_width = trim_width))]
pub fn trim(peptides: Vec<Peptide>, target: &TargetSpectrum, trim_width: usize) -> Trimmed {
    let scores = evaluate(&peptides, |peptide: &Peptide| linear_score(peptide, target));
    let mut ranked: Vec<(Peptide, usize)> = peptides.into_iter().zip(scores).collect();
    ranked.sort_by_key(|(_, score)| Reverse(*score));

    let keep = survivor_count(&ranked, trim_width);
    trace!(
        keep,
        cutoff = ranked.get(keep.saturating_sub(1)).map(|(_, s)| *s),
        "Leaderboard trimmed."
    );

    let survivors = ranked[..keep].iter().map(|(p, _)| p.clone()).collect();
    let leaderboard = ranked
        .into_iter()
        .enumerate()
        .map(|(rank, (peptide, score))| CandidateRecord::linear(peptide, score, rank < keep))
        .collect();

    Trimmed {
        survivors,
        leaderboard,
    }
}

fn survivor_count(ranked: &[(Peptide, usize)], trim_width: usize) -> usize {
    if ranked.len() <= trim_width {
        return ranked.len();
    }
    if trim_width == 0 {
        return 0;
    }
    let cutoff = ranked[trim_width - 1].1;
    ranked[trim_width..]
        .iter()
        .position(|(_, score)| *score < cutoff)
        .map_or(ranked.len(), |offset| trim_width + offset)
}
