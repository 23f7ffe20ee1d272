//! # Core Module
//!
//! This module provides the fundamental building blocks of cyclopeptide sequencing:
//! the data models, the static monomer mass table and the pure functions that turn a
//! candidate sequence into a theoretical spectrum and compare it with an experimental one.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Monomers, peptides, spectra and annotated fragments
//! - **Mass Table** ([`mass_table`]) - Static symbol-to-mass lookup and its reverse mapping
//! - **Spectrum Generation** ([`spectrum`]) - Linear and cyclic theoretical spectra
//! - **Scoring** ([`scoring`]) - Merge-based match counting and the consistency test
//!
//! Everything in this layer is immutable and side-effect free, so it can be shared
//! freely between concurrent searches.

pub mod mass_table;
pub mod models;
pub mod scoring;
pub mod spectrum;
