use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignConfig {
    /// Number of lowest-scoring structures reported per cluster.
    pub keep_best: usize,
    /// Clusters with a larger combination space are skipped rather than searched.
    pub max_combinations: Option<u64>,
}

#[derive(Default)]
pub struct AssignConfigBuilder {
    keep_best: Option<usize>,
    max_combinations: Option<u64>,
}

impl AssignConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keep_best(mut self, n: usize) -> Self {
        self.keep_best = Some(n);
        self
    }
    pub fn max_combinations(mut self, limit: Option<u64>) -> Self {
        self.max_combinations = limit;
        self
    }

    pub fn build(self) -> Result<AssignConfig, ConfigError> {
        let keep_best = self
            .keep_best
            .ok_or(ConfigError::MissingParameter("keep_best"))?;
        if keep_best == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "keep_best",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_combinations == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "max_combinations",
                reason: "must be at least 1 when set".to_string(),
            });
        }
        Ok(AssignConfig {
            keep_best,
            max_combinations: self.max_combinations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::EngineError;

    #[test]
    fn build_succeeds_with_required_parameters() {
        let config = AssignConfigBuilder::new()
            .keep_best(5)
            .max_combinations(Some(1024))
            .build()
            .unwrap();
        assert_eq!(config.keep_best, 5);
        assert_eq!(config.max_combinations, Some(1024));
    }

    #[test]
    fn max_combinations_defaults_to_unlimited() {
        let config = AssignConfigBuilder::new().keep_best(1).build().unwrap();
        assert_eq!(config.max_combinations, None);
    }

    #[test]
    fn build_fails_without_keep_best() {
        assert_eq!(
            AssignConfigBuilder::new().build().unwrap_err(),
            ConfigError::MissingParameter("keep_best")
        );
    }

    #[test]
    fn build_rejects_zero_values() {
        assert!(matches!(
            AssignConfigBuilder::new().keep_best(0).build(),
            Err(ConfigError::InvalidParameter {
                name: "keep_best",
                ..
            })
        ));
        assert!(matches!(
            AssignConfigBuilder::new()
                .keep_best(3)
                .max_combinations(Some(0))
                .build(),
            Err(ConfigError::InvalidParameter {
                name: "max_combinations",
                ..
            })
        ));
    }

    #[test]
    fn builder_errors_convert_into_engine_errors() {
        let err: EngineError = AssignConfigBuilder::new()
            .build()
            .map_err(EngineError::from)
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Config {
                source: ConfigError::MissingParameter("keep_best")
            }
        ));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Missing required parameter: keep_best"
        );
    }
}
