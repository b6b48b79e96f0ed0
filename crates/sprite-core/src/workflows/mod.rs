//! # Workflows Module
//!
//! High-level entry points that apply a scoring policy on top of the [`engine`](crate::engine).
//!
//! - **Cluster Assignment** ([`assign`]) - Scores one cluster of ambiguous regions across the
//!   whole population and keeps the best-matching structures with their selected beads.

pub mod assign;
