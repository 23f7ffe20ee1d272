//! # Workflows Module
//!
//! High-level sequencing procedures. Each workflow owns its frontier, leaderboard
//! and history for the duration of one call and shares nothing mutable with other
//! calls; only the static mass table is shared.
//!
//! ## Architecture
//!
//! - **Exhaustive Search** ([`exhaustive`]) - Brute force and branch-and-bound; exact
//!   cyclic-spectrum matches, with an optional search tree
//! - **Leaderboard Search** ([`leaderboard`]) - Tie-inclusive beam search for noisy spectra
//! - **Convolution** ([`convolution`]) - Leaderboard search over an alphabet derived from
//!   the spectrum's most frequent mass differences
//! - **Comparison** ([`compare`]) - Timed execution of every strategy on one spectrum
//! - **Requests** ([`request`]) - Validating entry point taking raw spectrum masses

pub mod compare;
pub mod convolution;
pub mod exhaustive;
pub mod leaderboard;
pub mod request;
