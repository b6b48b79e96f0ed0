//! # Core Module
//!
//! Stateless building blocks of the copy-assignment search.
//!
//! ## Architecture
//!
//! - **Geometry** ([`geometry`]) - Point construction, centroids and the squared radius of gyration
//! - **Data Models** ([`models`]) - The strided coordinate buffer and the region/copy layout
//! - **Enumeration** ([`combinations`]) - Mixed-radix encoding of one-copy-per-region selections
//!
//! Nothing in this module allocates per combination or reads global state; the engine
//! composes these pieces into the actual search.

pub mod combinations;
pub mod geometry;
pub mod models;
