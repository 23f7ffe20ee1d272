use super::models::peptide::Peptide;
use super::models::spectrum::TargetSpectrum;
use super::spectrum::{cyclic_spectrum, linear_spectrum};
use std::cmp::Ordering;

/// Counts the masses shared by two ascending multisets.
///
/// Two-pointer merge: on a match both pointers advance and the count grows; on a
/// mismatch only the pointer at the smaller mass moves. A repeated mass therefore
/// contributes up to the smaller of its two multiplicities.
pub fn score(candidate: &[u32], target: &[u32]) -> usize {
    let (mut i, mut j, mut matches) = (0, 0, 0);
    while i < candidate.len() && j < target.len() {
        match candidate[i].cmp(&target[j]) {
            Ordering::Equal => {
                i += 1;
                j += 1;
                matches += 1;
            }
            Ordering::Greater => j += 1,
            Ordering::Less => i += 1,
        }
    }
    matches
}

pub fn linear_score(peptide: &Peptide, target: &TargetSpectrum) -> usize {
    score(&linear_spectrum(peptide), target)
}

pub fn cyclic_score(peptide: &Peptide, target: &TargetSpectrum) -> usize {
    score(&cyclic_spectrum(peptide), target)
}

/// Returns `true` when the linear spectrum of `peptide` is a sub-multiset of `target`.
///
/// Uses the same merge as [`score`] but gives up at the first candidate mass that has
/// no counterpart left in the target.
pub fn is_consistent(peptide: &Peptide, target: &TargetSpectrum) -> bool {
    let candidate = linear_spectrum(peptide);
    let (mut i, mut j) = (0, 0);
    while i < candidate.len() && j < target.len() {
        match candidate[i].cmp(&target[j]) {
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            Ordering::Greater => j += 1,
            Ordering::Less => return false,
        }
    }
    i == candidate.len()
}
