use crate::core::mass_table::{Alphabet, monomers_with_mass};
use crate::core::models::spectrum::TargetSpectrum;
use crate::engine::config::MassRange;
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MassFrequency {
    pub mass: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvolutionSelection {
    /// Distinct in-range differences, most frequent first (ties by ascending mass).
    pub ranked: Vec<MassFrequency>,
    pub selected_masses: Vec<u32>,
    pub alphabet: Alphabet,
}

/// All positive pairwise differences of `spectrum` that fall inside `range`.
///
/// Pairs are taken in index order (`j < i`), so with a sorted spectrum every
/// difference is non-negative.
pub fn spectral_convolution(spectrum: &[u32], range: MassRange) -> Vec<u32> {
    spectrum
        .iter()
        .tuple_combinations()
        .map(|(&lower, &upper)| upper.saturating_sub(lower))
        .filter(|&diff| diff > 0 && range.contains(diff))
        .collect()
}

/// Ranks differences by frequency, descending; equal counts are ordered by mass.
pub fn rank_by_frequency(differences: &[u32]) -> Vec<MassFrequency> {
    differences
        .iter()
        .copied()
        .counts()
        .into_iter()
        .map(|(mass, count)| MassFrequency { mass, count })
        .sorted_by(|a, b| b.count.cmp(&a.count).then(a.mass.cmp(&b.mass)))
        .collect()
}

/// Picks the `top_k` most frequent masses, widened to every mass tied with the
/// `top_k`-th frequency. Asking for more masses than exist selects all of them.
pub fn select_top_masses(ranked: &[MassFrequency], top_k: usize) -> Vec<u32> {
    if top_k == 0 {
        return Vec::new();
    }
    if top_k >= ranked.len() {
        return ranked.iter().map(|f| f.mass).collect();
    }
    let threshold = ranked[top_k - 1].count;
    ranked
        .iter()
        .take_while(|f| f.count >= threshold)
        .map(|f| f.mass)
        .collect()
}

/// Derives a restricted extension alphabet from the most frequent mass differences of
/// `target`.
///
/// Each selected mass maps to every monomer of that mass; masses without a monomer
/// contribute nothing, so the alphabet may be empty.
#[instrument(level = "debug", skip_all, fields(top_k = top_k))]
pub fn select_candidates(
    target: &TargetSpectrum,
    top_k: usize,
    range: MassRange,
) -> ConvolutionSelection {
    let differences = spectral_convolution(target, range);
    let ranked = rank_by_frequency(&differences);
    let selected_masses = select_top_masses(&ranked, top_k);
    let alphabet = Alphabet::from_monomers(
        selected_masses
            .iter()
            .flat_map(|&mass| monomers_with_mass(mass)),
    );

    debug!(
        differences = differences.len(),
        distinct = ranked.len(),
        selected = selected_masses.len(),
        alphabet = %alphabet,
        "Spectral convolution complete."
    );

    ConvolutionSelection {
        ranked,
        selected_masses,
        alphabet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(masses: &[u32]) -> TargetSpectrum {
        TargetSpectrum::new(masses.to_vec()).unwrap()
    }

    #[test]
    fn convolution_keeps_only_in_range_differences() {
        let diffs = spectral_convolution(&[0, 57, 113, 400], MassRange::default());
        // 113 - 57 = 56 and every difference to 400 fall outside [57, 200].
        assert_eq!(diffs, vec![57, 113]);
    }

    #[test]
    fn convolution_ignores_zero_differences_from_repeated_masses() {
        let range = MassRange::new(0, 1000).unwrap();
        let diffs = spectral_convolution(&[0, 57, 57], range);
        assert_eq!(diffs, vec![57, 57]);
    }

    #[test]
    fn ranking_orders_by_count_then_mass() {
        let ranked = rank_by_frequency(&[128, 57, 128, 113, 113, 128]);
        assert_eq!(
            ranked,
            vec![
                MassFrequency { mass: 128, count: 3 },
                MassFrequency { mass: 113, count: 2 },
                MassFrequency { mass: 57, count: 1 },
            ]
        );
    }

    #[test]
    fn selection_widens_to_ties_at_the_cutoff() {
        let ranked = rank_by_frequency(&[57, 57, 71, 71, 87, 87, 97]);
        assert_eq!(select_top_masses(&ranked, 1), vec![57, 71, 87]);
        assert_eq!(select_top_masses(&ranked, 3), vec![57, 71, 87]);
        assert_eq!(select_top_masses(&ranked, 4), vec![57, 71, 87, 97]);
        assert_eq!(select_top_masses(&ranked, 10), vec![57, 71, 87, 97]);
    }

    #[test]
    fn most_frequent_difference_maps_to_its_monomers() {
        // A ladder of 113s plus one stray mass.
        let t = target(&[0, 57, 113, 226, 339, 452]);
        let selection = select_candidates(&t, 1, MassRange::default());
        assert_eq!(selection.ranked[0], MassFrequency { mass: 113, count: 4 });
        assert_eq!(selection.selected_masses, vec![113]);
        assert_eq!(selection.alphabet.symbols(), "IL");
    }

    #[test]
    fn masses_without_monomers_yield_empty_alphabet() {
        let t = target(&[0, 58, 116]);
        let selection = select_candidates(&t, 5, MassRange::default());
        assert_eq!(selection.selected_masses, vec![58, 116]);
        assert!(selection.alphabet.is_empty());
    }

    #[test]
    fn spectrum_without_in_range_differences_selects_nothing() {
        let t = target(&[0, 10, 20]);
        let selection = select_candidates(&t, 3, MassRange::default());
        assert!(selection.ranked.is_empty());
        assert!(selection.selected_masses.is_empty());
        assert!(selection.alphabet.is_empty());
    }
}
