//! # Core Models Module
//!
//! Data structures describing the input of a copy-assignment search.
//!
//! ## Key Components
//!
//! - [`coordinates`] - Borrowed, strided view over the population coordinate buffer
//! - [`regions`] - Which beads are the candidate copies of each region
//! - [`error`] - Shape validation errors shared by both
//!
//! ## Usage
//!
//! ```ignore
//! use sprite_assign::core::models::{coordinates::CoordinateBuffer, regions::RegionLayout};
//!
//! // Two structures, four beads: region 0 owns beads 0-1, region 1 owns beads 2-3.
//! let coords = CoordinateBuffer::new(&data, 2, 4)?;
//! let layout = RegionLayout::contiguous(&[2, 2], coords.n_bead())?;
//! let p = coords.point(layout.bead(1, 0).unwrap(), 1);
//! ```

pub mod coordinates;
pub mod error;
pub mod regions;
