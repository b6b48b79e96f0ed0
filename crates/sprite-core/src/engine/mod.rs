//! # Engine Module
//!
//! The search layer of the crate: it turns a coordinate buffer and a region layout into
//! per-structure copy selections.
//!
//! ## Architecture
//!
//! - **Per-Structure Search** ([`search`]) - Exhaustive enumeration of copy combinations for one structure
//! - **Population Aggregation** ([`population`]) - Runs the search for every structure and reduces the global minimum
//! - **Ranking** ([`ranking`]) - Orders structures by score for downstream assignment
//! - **Configuration** ([`config`]) - Scoring policy parameters and their builder
//! - **Progress Monitoring** ([`progress`]) - Optional callbacks for long population scans
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping shape and enumeration failures
//!
//! ## Parallelism
//!
//! With the `parallel` feature enabled, structures are searched on the rayon pool, one
//! searcher (and therefore one set of scratch buffers) per worker. Results are collected in
//! structure order and the global minimum is reduced sequentially afterwards, so outputs are
//! identical to the sequential build.

pub mod config;
pub mod error;
pub mod population;
pub mod progress;
pub mod ranking;
pub mod search;
