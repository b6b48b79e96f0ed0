//! # SPRITE Copy Assignment Core
//!
//! Selects, for every structure of a reconstructed 3D population, one copy per
//! ambiguous genomic region such that the selected beads are as compact as
//! possible, measured by the squared radius of gyration.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout, each layer depending only on the
//! ones below it:
//!
//! - **[`core`]: The Foundation.** Stateless geometry (`gyration_radius_sq`),
//!   the borrowed coordinate buffer, region layouts, and the mixed-radix
//!   combination enumerator.
//!
//! - **[`engine`]: The Search.** The per-structure brute-force searcher, the
//!   population aggregator (optionally parallel with the `parallel` feature),
//!   structure ranking, configuration, progress reporting and error types.
//!
//! - **[`workflows`]: The Public API.** Cluster-level entry points that tie the
//!   engine to a scoring policy (combination limits, number of best structures
//!   to keep).
//!
//! The crate performs no I/O and holds no global state; every call is a pure
//! function of its inputs.

pub mod core;
pub mod engine;
pub mod workflows;
