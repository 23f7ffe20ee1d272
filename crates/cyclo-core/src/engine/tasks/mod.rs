//! Reusable per-round tasks of the sequencing strategies.
//!
//! - [`extend`] grows every frontier peptide by one monomer and evaluates the results
//! - [`trim`] keeps the top-scoring candidates of a leaderboard round, ties included
//! - [`convolution`] derives a restricted alphabet from a spectrum's mass differences

pub mod convolution;
pub mod extend;
pub mod trim;
