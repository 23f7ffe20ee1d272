use super::models::monomer::Monomer;
use phf::{Map, phf_map};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MassError {
    #[error("Unknown monomer symbol '{0}'")]
    UnknownMonomer(char),
}

#[rustfmt::skip]
static MONOMER_MASSES: Map<char, u32> = phf_map! {
    // --- Aliphatic ---
    'G' => 57, 'A' => 71, 'P' => 97, 'V' => 99, 'I' => 113, 'L' => 113,
    // --- Hydroxyl / Sulfur ---
    'S' => 87, 'T' => 101, 'C' => 103, 'M' => 131,
    // --- Acidic and Amide ---
    'N' => 114, 'D' => 115, 'Q' => 128, 'E' => 129,
    // --- Basic ---
    'K' => 128, 'H' => 137, 'R' => 156,
    // --- Aromatic ---
    'F' => 147, 'Y' => 163, 'W' => 186,
};

/// Canonical order of the standard alphabet, ascending by mass.
pub const STANDARD_SYMBOLS: [char; 20] = [
    'G', 'A', 'S', 'P', 'V', 'T', 'C', 'I', 'L', 'N', 'D', 'K', 'Q', 'E', 'M', 'H', 'F', 'R',
    'Y', 'W',
];

/// Mass of the heaviest standard monomer (W).
pub const MAX_MONOMER_MASS: u32 = 186;

pub fn mass_of(symbol: char) -> Option<u32> {
    MONOMER_MASSES.get(&symbol).copied()
}

pub fn monomer(symbol: char) -> Result<Monomer, MassError> {
    mass_of(symbol)
        .map(|mass| Monomer::new(symbol, mass))
        .ok_or(MassError::UnknownMonomer(symbol))
}

/// Reverse lookup: every standard monomer whose mass equals `mass`, in canonical order.
pub fn monomers_with_mass(mass: u32) -> Vec<Monomer> {
    STANDARD_SYMBOLS
        .iter()
        .filter_map(|&symbol| mass_of(symbol).filter(|&m| m == mass).map(|m| Monomer::new(symbol, m)))
        .collect()
}

/// An ordered, duplicate-free set of monomers used to extend candidates.
///
/// The alphabet is always handed to a search explicitly. There is no terminator
/// entry: extending by "nothing" is never performed, so it need not be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alphabet {
    monomers: Vec<Monomer>,
}

impl Alphabet {
    pub fn standard() -> Self {
        Self::from_monomers(
            STANDARD_SYMBOLS
                .iter()
                .filter_map(|&symbol| monomer(symbol).ok()),
        )
    }

    pub fn from_symbols(symbols: &str) -> Result<Self, MassError> {
        let monomers = symbols
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(monomer)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_monomers(monomers))
    }

    pub fn from_monomers<I>(monomers: I) -> Self
    where
        I: IntoIterator<Item = Monomer>,
    {
        let mut unique: Vec<Monomer> = Vec::new();
        for m in monomers {
            if !unique.contains(&m) {
                unique.push(m);
            }
        }
        Self { monomers: unique }
    }

    pub fn monomers(&self) -> &[Monomer] {
        &self.monomers
    }

    pub fn len(&self) -> usize {
        self.monomers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monomers.is_empty()
    }

    pub fn symbols(&self) -> String {
        self.monomers.iter().map(Monomer::symbol).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols())
    }
}
