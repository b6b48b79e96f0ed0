use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Population must contain at least one structure")]
    NoStructures,

    #[error("Structures must carry at least one bead")]
    NoBeads,

    #[error("At least one region is required")]
    NoRegions,

    #[error("Region {region} has no candidate copies")]
    EmptyRegion { region: usize },

    #[error("Region copy counts sum to {found}, but the buffer carries {expected} beads")]
    BeadCountMismatch { expected: usize, found: usize },

    #[error("Copy counts of {n_regions} regions sum past the addressable bead count")]
    CopyCountOverflow { n_regions: usize },

    #[error("Coordinate buffer has {found} values, expected {expected}")]
    BufferLength { expected: usize, found: usize },

    #[error("Coordinate buffer size for {n_bead} beads x {n_struct} structures overflows")]
    BufferTooLarge { n_bead: usize, n_struct: usize },

    #[error("Coordinate value at index {index} is not finite")]
    NonFiniteCoordinate { index: usize },

    #[error("Region {region} references bead {bead}, but only {n_bead} beads exist")]
    BeadOutOfRange {
        region: usize,
        bead: usize,
        n_bead: usize,
    },
}
