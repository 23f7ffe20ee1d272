use super::monomer::Monomer;
use crate::core::mass_table::{self, MassError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of monomers.
///
/// Peptides are never mutated in place: [`Peptide::extended`] returns a new value,
/// so every prefix stays available for branching exploration. The empty peptide is
/// the root of every search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Peptide {
    residues: Vec<Monomer>,
}

impl Peptide {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_monomers(residues: Vec<Monomer>) -> Self {
        Self { residues }
    }

    pub fn extended(&self, monomer: Monomer) -> Self {
        let mut residues = Vec::with_capacity(self.residues.len() + 1);
        residues.extend_from_slice(&self.residues);
        residues.push(monomer);
        Self { residues }
    }

    pub fn residues(&self) -> &[Monomer] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn mass(&self) -> u32 {
        self.residues.iter().map(Monomer::mass).sum()
    }

    /// Prefix sums of residue masses; `prefix[0] == 0` and `prefix[n]` is the total mass.
    pub fn prefix_masses(&self) -> Vec<u32> {
        let mut prefix = Vec::with_capacity(self.residues.len() + 1);
        prefix.push(0);
        let mut running = 0;
        for residue in &self.residues {
            running += residue.mass();
            prefix.push(running);
        }
        prefix
    }

    /// Renders `length` residues starting at `start`, wrapping past the end.
    pub fn circular_slice(&self, start: usize, length: usize) -> String {
        let n = self.residues.len();
        if n == 0 {
            return String::new();
        }
        (0..length)
            .map(|offset| self.residues[(start + offset) % n].symbol())
            .collect()
    }

    /// Returns the peptide read starting at `offset`.
    pub fn rotated(&self, offset: usize) -> Self {
        if self.residues.is_empty() {
            return self.clone();
        }
        let mut residues = self.residues.clone();
        residues.rotate_left(offset % self.residues.len());
        Self { residues }
    }
}

impl FromStr for Peptide {
    type Err = MassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let residues = s
            .trim()
            .chars()
            .map(mass_table::monomer)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { residues })
    }
}

impl fmt::Display for Peptide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            write!(f, "{}", residue)?;
        }
        Ok(())
    }
}

impl Serialize for Peptide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
