//! # Engine Module
//!
//! This module implements the search machinery shared by every sequencing strategy:
//! configuration, candidate bookkeeping, progress reporting, the search-tree arena and
//! the reusable per-round tasks.
//!
//! ## Overview
//!
//! All strategies grow candidates the same way: the frontier starts as the empty
//! peptide, every round extends each frontier peptide by every monomer of the
//! configured alphabet, and each extension is then judged against the target
//! spectrum (mass bound, consistency, exact match or leaderboard score). The engine
//! provides the pieces those rounds are built from; the [`crate::workflows`] layer
//! strings them together.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Search parameters, builders and validation
//! - **State Tracking** ([`state`]) - Candidate records and the leader set
//! - **Search History** ([`tree`]) - Immutable arena of every explored extension
//! - **Progress Monitoring** ([`progress`]) - Phase and round events for front ends
//! - **Error Handling** ([`error`]) - Engine-level error type
//! - **Tasks** ([`tasks`]) - Extension, leaderboard trimming and spectral convolution

pub mod config;
pub mod error;
pub mod progress;
pub mod state;
pub mod tasks;
pub mod tree;
