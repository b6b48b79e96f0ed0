use super::config::ConfigError;
use crate::core::combinations::CombinationError;
use crate::core::models::error::ShapeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input shape: {source}")]
    Shape {
        #[from]
        source: ShapeError,
    },

    #[error("Combination enumeration failed: {source}")]
    Combination {
        #[from]
        source: CombinationError,
    },

    #[error("Gyration radius is undefined for structure {structure}: empty point set")]
    DegenerateMetric { structure: usize },

    #[error("Output buffer '{buffer}' has length {found}, expected {expected}")]
    OutputLength {
        buffer: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
