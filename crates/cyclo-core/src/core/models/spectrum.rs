use crate::core::mass_table::MAX_MONOMER_MASS;
use serde::Serialize;
use std::ops::Deref;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpectrumError {
    #[error("Target spectrum is empty")]
    Empty,
    #[error("Target spectrum is not sorted: mass {next} at index {index} follows {previous}")]
    Unsorted {
        index: usize,
        previous: u32,
        next: u32,
    },
    #[error("Invalid mass '{token}': expected a non-negative integer")]
    InvalidMass { token: String },
    #[error("Target total mass {total} exceeds the supported maximum of {limit}")]
    TotalMassTooLarge { total: u32, limit: u32 },
}

/// Largest accepted target total; extending any lighter peptide by one monomer stays within `u32`.
pub const MAX_TOTAL_MASS: u32 = u32::MAX - MAX_MONOMER_MASS;

/// A multiset of integer masses kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Spectrum(Vec<u32>);

impl Spectrum {
    pub fn from_unsorted(mut masses: Vec<u32>) -> Self {
        masses.sort_unstable();
        Self(masses)
    }

    pub fn masses(&self) -> &[u32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }
}

impl Deref for Spectrum {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// An experimental spectrum a search tries to explain.
///
/// Invariants: non-empty and ascending. The last mass is the total mass of the
/// peptide being sequenced. The value never changes during a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TargetSpectrum(Spectrum);

impl TargetSpectrum {
    pub fn new(masses: Vec<u32>) -> Result<Self, SpectrumError> {
        if masses.is_empty() {
            return Err(SpectrumError::Empty);
        }
        if let Some(index) = masses.windows(2).position(|w| w[1] < w[0]) {
            return Err(SpectrumError::Unsorted {
                index: index + 1,
                previous: masses[index],
                next: masses[index + 1],
            });
        }
        let total = masses[masses.len() - 1];
        if total > MAX_TOTAL_MASS {
            return Err(SpectrumError::TotalMassTooLarge {
                total,
                limit: MAX_TOTAL_MASS,
            });
        }
        if masses[0] != 0 {
            warn!(
                first_mass = masses[0],
                "Target spectrum does not start at 0; the empty fragment will not match."
            );
        }
        Ok(Self(Spectrum(masses)))
    }

    pub fn total_mass(&self) -> u32 {
        // Non-empty by construction.
        self.0.last().copied().unwrap_or_default()
    }
}

impl Deref for TargetSpectrum {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Parses masses separated by commas and/or whitespace, without validating their order.
pub fn parse_masses(text: &str) -> Result<Vec<u32>, SpectrumError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u32>().map_err(|_| SpectrumError::InvalidMass {
                token: token.to_string(),
            })
        })
        .collect()
}

impl FromStr for TargetSpectrum {
    type Err = SpectrumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_masses(s)?)
    }
}

/// One annotated entry of a theoretical spectrum.
///
/// `start` and `length` address the contributing sub-sequence of the parent peptide;
/// for cyclic fragments the range may wrap past the last residue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub mass: u32,
    pub start: usize,
    pub length: usize,
    pub subpeptide: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_unsorted_sorts_and_keeps_duplicates() {
        let spectrum = Spectrum::from_unsorted(vec![113, 0, 57, 57]);
        assert_eq!(spectrum.masses(), &[0, 57, 57, 113]);
    }

    #[test]
    fn target_rejects_empty_input() {
        assert_eq!(TargetSpectrum::new(vec![]), Err(SpectrumError::Empty));
    }

    #[test]
    fn target_rejects_unsorted_input() {
        let result = TargetSpectrum::new(vec![0, 113, 57, 170]);
        assert_eq!(
            result,
            Err(SpectrumError::Unsorted {
                index: 2,
                previous: 113,
                next: 57
            })
        );
    }

    #[test]
    fn target_accepts_repeated_masses() {
        let target = TargetSpectrum::new(vec![0, 57, 57, 114]).unwrap();
        assert_eq!(target.total_mass(), 114);
        assert_eq!(target.len(), 4);
    }

    #[test]
    fn target_rejects_total_mass_without_extension_headroom() {
        assert_eq!(
            TargetSpectrum::new(vec![0, u32::MAX]),
            Err(SpectrumError::TotalMassTooLarge {
                total: u32::MAX,
                limit: MAX_TOTAL_MASS
            })
        );
        let heaviest = TargetSpectrum::new(vec![0, MAX_TOTAL_MASS]).unwrap();
        assert_eq!(heaviest.total_mass(), MAX_TOTAL_MASS);
        assert!(heaviest.total_mass().checked_add(MAX_MONOMER_MASS).is_some());
    }

    #[test]
    fn target_parses_comma_and_whitespace_separated_masses() {
        let target: TargetSpectrum = "0, 113,128 186\n241".parse().unwrap();
        assert_eq!(&*target, &[0, 113, 128, 186, 241]);
        assert_eq!(target.total_mass(), 241);
    }

    #[test]
    fn target_parse_rejects_non_integer_and_negative_tokens() {
        assert_eq!(
            "0, 1.5, 3".parse::<TargetSpectrum>(),
            Err(SpectrumError::InvalidMass {
                token: "1.5".to_string()
            })
        );
        assert_eq!(
            "0, -57".parse::<TargetSpectrum>(),
            Err(SpectrumError::InvalidMass {
                token: "-57".to_string()
            })
        );
    }

    #[test]
    fn target_parse_of_blank_text_is_empty_error() {
        assert_eq!(" , ".parse::<TargetSpectrum>(), Err(SpectrumError::Empty));
    }

    #[test]
    fn parse_masses_keeps_input_order() {
        assert_eq!(parse_masses("0 128, 113\n").unwrap(), vec![0, 128, 113]);
        assert_eq!(parse_masses("").unwrap(), Vec::<u32>::new());
    }
}
