use crate::core::models::peptide::Peptide;
use crate::core::models::spectrum::Fragment;
use crate::core::spectrum::{cyclic_fragments, linear_fragments};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpectrumKind {
    Linear,
    Cyclic,
}

/// A scored candidate together with its annotated theoretical spectrum.
///
/// Leaderboard rounds hold linear records (flagged `qualified` when they survive
/// trimming); leaders and full-mass exhaustive candidates hold cyclic records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRecord {
    pub peptide: Peptide,
    pub mass: u32,
    pub score: usize,
    pub kind: SpectrumKind,
    pub spectrum: Vec<Fragment>,
    pub qualified: bool,
}

impl CandidateRecord {
    pub fn linear(peptide: Peptide, score: usize, qualified: bool) -> Self {
        Self {
            mass: peptide.mass(),
            spectrum: linear_fragments(&peptide),
            peptide,
            score,
            kind: SpectrumKind::Linear,
            qualified,
        }
    }

    pub fn cyclic(peptide: Peptide, score: usize) -> Self {
        Self {
            mass: peptide.mass(),
            spectrum: cyclic_fragments(&peptide),
            peptide,
            score,
            kind: SpectrumKind::Cyclic,
            qualified: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderUpdate {
    Replaced,
    Tied,
    Rejected,
}

/// The co-equal best full-mass candidates seen so far.
///
/// The best score starts at zero and never decreases.
#[derive(Debug, Clone, Default)]
pub struct LeaderSet {
    best_score: usize,
    leaders: Vec<CandidateRecord>,
}

impl LeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, peptide: &Peptide, score: usize) -> LeaderUpdate {
        if score > self.best_score {
            self.best_score = score;
            self.leaders = vec![CandidateRecord::cyclic(peptide.clone(), score)];
            LeaderUpdate::Replaced
        } else if score == self.best_score {
            self.leaders
                .push(CandidateRecord::cyclic(peptide.clone(), score));
            LeaderUpdate::Tied
        } else {
            LeaderUpdate::Rejected
        }
    }

    pub fn best_score(&self) -> usize {
        self.best_score
    }

    pub fn leaders(&self) -> &[CandidateRecord] {
        &self.leaders
    }

    pub fn into_leaders(self) -> Vec<CandidateRecord> {
        self.leaders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peptide(s: &str) -> Peptide {
        s.parse().unwrap()
    }

    #[test]
    fn linear_record_carries_mass_and_annotated_spectrum() {
        let record = CandidateRecord::linear(peptide("GA"), 2, true);
        assert_eq!(record.mass, 128);
        assert_eq!(record.kind, SpectrumKind::Linear);
        assert_eq!(record.spectrum.len(), 4);
        assert!(record.qualified);
    }

    #[test]
    fn cyclic_record_is_never_qualified() {
        let record = CandidateRecord::cyclic(peptide("GAS"), 5);
        assert_eq!(record.kind, SpectrumKind::Cyclic);
        assert_eq!(record.spectrum.len(), 8);
        assert!(!record.qualified);
    }

    #[test]
    fn higher_score_replaces_all_leaders() {
        let mut leaders = LeaderSet::new();
        assert_eq!(leaders.offer(&peptide("GA"), 3), LeaderUpdate::Replaced);
        assert_eq!(leaders.offer(&peptide("AG"), 3), LeaderUpdate::Tied);
        assert_eq!(leaders.leaders().len(), 2);
        assert_eq!(leaders.offer(&peptide("GG"), 4), LeaderUpdate::Replaced);
        assert_eq!(leaders.leaders().len(), 1);
        assert_eq!(leaders.best_score(), 4);
    }

    #[test]
    fn lower_score_is_rejected() {
        let mut leaders = LeaderSet::new();
        leaders.offer(&peptide("GA"), 3);
        assert_eq!(leaders.offer(&peptide("W"), 2), LeaderUpdate::Rejected);
        assert_eq!(leaders.best_score(), 3);
        assert_eq!(leaders.into_leaders()[0].peptide.to_string(), "GA");
    }

    #[test]
    fn zero_score_ties_the_initial_best() {
        let mut leaders = LeaderSet::new();
        assert_eq!(leaders.offer(&peptide("W"), 0), LeaderUpdate::Tied);
        assert_eq!(leaders.leaders().len(), 1);
    }
}
