//! # cyclopep Core Library
//!
//! A library for cyclopeptide sequencing: given an experimental mass spectrum, it
//! reconstructs the peptide sequence(s) whose theoretical fragmentation spectrum
//! best explains it.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the pure mathematics,
//! the stateful search machinery and the user-facing entry points stay apart.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Monomer`, `Peptide`,
//!   `Spectrum`), the static mass table, theoretical spectrum generation and the
//!   merge-based scoring and consistency primitives.
//!
//! - **[`engine`]: The Logic Core.** Search configuration, candidate records, the
//!   search-tree arena, progress reporting and the reusable search tasks
//!   (extension, leaderboard trimming, spectral convolution).
//!
//! - **[`workflows`]: The Public API.** Complete sequencing procedures: brute force,
//!   branch-and-bound, leaderboard, convolution-restricted leaderboard and a timed
//!   comparison of all of them, plus a request entry point that validates raw input
//!   before dispatching to one of them.

pub mod core;
pub mod engine;
pub mod workflows;
