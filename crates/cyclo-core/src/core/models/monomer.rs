use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Monomer {
    symbol: char,
    mass: u32,
}

impl Monomer {
    // Only the mass table hands out monomers, so every value carries a known mass.
    pub(crate) fn new(symbol: char, mass: u32) -> Self {
        Self { symbol, mass }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn mass(&self) -> u32 {
        self.mass
    }
}

impl fmt::Display for Monomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
