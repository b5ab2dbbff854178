//! LAHC configuration and stopping policy.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};
use crate::local_search::Reinsertion;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// More than `max_idle_iterations` consecutive non-improving candidates.
    IdleLimitReached,
    /// More than `max_iterations` steps executed.
    IterationLimitReached,
}

/// Configuration for the Late Acceptance Hill Climbing search.
///
/// With `limit_idle` set the search stops once the idle counter exceeds
/// `max_idle_iterations`; otherwise it stops once the iteration counter
/// exceeds `max_iterations`.
///
/// # Examples
///
/// ```
/// use u_tsp::lahc::LahcConfig;
/// use u_tsp::local_search::Reinsertion;
///
/// let config = LahcConfig::default()
///     .with_horizon(20)
///     .with_limit_idle(false)
///     .with_max_iterations(5000)
///     .with_reinsertion(Reinsertion::Value)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LahcConfig {
    /// History buffer length `L`.
    pub horizon: usize,

    /// Stop on idle iterations instead of total iterations.
    pub limit_idle: bool,

    /// Idle threshold used when `limit_idle` is set.
    pub max_idle_iterations: usize,

    /// Iteration threshold used when `limit_idle` is not set.
    pub max_iterations: usize,

    /// Reinsertion rule of the relocate move.
    pub reinsertion: Reinsertion,

    /// Current cost is sampled into the result every this many iterations.
    pub history_interval: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for LahcConfig {
    fn default() -> Self {
        Self {
            horizon: 50,
            limit_idle: true,
            max_idle_iterations: 1000,
            max_iterations: 10_000,
            reinsertion: Reinsertion::default(),
            history_interval: 100,
            seed: None,
        }
    }
}

impl LahcConfig {
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_limit_idle(mut self, limit_idle: bool) -> Self {
        self.limit_idle = limit_idle;
        self
    }

    pub fn with_max_idle_iterations(mut self, n: usize) -> Self {
        self.max_idle_iterations = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_reinsertion(mut self, reinsertion: Reinsertion) -> Self {
        self.reinsertion = reinsertion;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.horizon < 1 {
            return Err(TspError::InvalidConfiguration(
                "horizon must be at least 1".into(),
            ));
        }
        if self.history_interval < 1 {
            return Err(TspError::InvalidConfiguration(
                "history_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Returns the reason to stop after `iterations` steps with `idle`
    /// consecutive non-improving candidates, if any.
    pub fn stop_reason(&self, iterations: usize, idle: usize) -> Option<StopReason> {
        if self.limit_idle {
            (idle > self.max_idle_iterations).then_some(StopReason::IdleLimitReached)
        } else {
            (iterations > self.max_iterations).then_some(StopReason::IterationLimitReached)
        }
    }
}
