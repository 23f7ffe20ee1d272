//! Data models shared by every layer of the sequencing engine.
//!
//! - [`monomer`] - A residue symbol paired with its integer mass
//! - [`peptide`] - Candidate sequences built by one-monomer extension
//! - [`spectrum`] - Sorted mass multisets, validated target spectra and annotated fragments

pub mod monomer;
pub mod peptide;
pub mod spectrum;
