//! Experiment configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::StartStrategy;
use crate::error::{Result, TspError};

/// Configuration for repeated LAHC runs.
///
/// Run `i` is seeded with `seed + i` when the search config carries a seed,
/// so results are reproducible regardless of `parallel`.
///
/// # Examples
///
/// ```
/// use u_tsp::constructive::StartStrategy;
/// use u_tsp::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::default()
///     .with_runs(20)
///     .with_start(StartStrategy::Random)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Independent runs per parameter setting.
    pub runs: usize,

    /// How each run builds its starting tour.
    pub start: StartStrategy,

    /// Whether to execute runs on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            runs: 10,
            start: StartStrategy::Random,
            parallel: true,
        }
    }
}

impl ExperimentConfig {
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_start(mut self, start: StartStrategy) -> Self {
        self.start = start;
        self
    }

    /// Enables or disables parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(TspError::InvalidConfiguration(
                "runs must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExperimentConfig::default();
        assert_eq!(config.runs, 10);
        assert_eq!(config.start, StartStrategy::Random);
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_zero_runs() {
        let config = ExperimentConfig::default().with_runs(0);
        assert!(matches!(
            config.validate(),
            Err(TspError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_start_from_json() {
        let config: ExperimentConfig =
            serde_json::from_str(r#"{"start": {"nearest_neighbour": {"start": 2}}}"#)
                .expect("parse");
        assert_eq!(config.start, StartStrategy::NearestNeighbour { start: 2 });
        assert_eq!(config.runs, 10);
    }
}
