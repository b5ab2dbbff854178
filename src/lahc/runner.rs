//! LAHC search engine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::config::{LahcConfig, StopReason};
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::local_search::RandomRelocate;
use crate::models::Tour;

/// Result of a completed late acceptance search.
///
/// Serialize-only, like the [`Tour`] it carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LahcResult {
    /// Final current tour.
    pub tour: Tour,

    /// Cost of the final tour.
    pub cost: f64,

    /// Cost of the tour the search started from.
    pub initial_cost: f64,

    /// Total number of steps executed.
    pub iterations: usize,

    /// Number of accepted candidates (including lateral and improving ones).
    pub accepted_moves: usize,

    /// Number of candidates strictly better than the current tour.
    pub improving_moves: usize,

    /// Why the search stopped. `None` if the result was taken mid-run.
    pub stop_reason: Option<StopReason>,

    /// Current cost sampled every `history_interval` iterations, starting
    /// with the initial cost and ending with the final cost.
    pub cost_history: Vec<f64>,
}

/// Lifecycle of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    Running,
    Stopped(StopReason),
}

/// What happened during a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Cost of the generated candidate.
    pub candidate_cost: f64,
    /// History slot consulted (`iteration mod horizon`).
    pub slot: usize,
    /// Whether the candidate replaced the current tour.
    pub accepted: bool,
    /// Whether the candidate was strictly better than the current tour.
    pub improving: bool,
}

/// Late Acceptance Hill Climbing over relocate moves.
///
/// Each step draws a relocate neighbour of the current tour and accepts it
/// if its cost is below the history entry for slot `iteration mod L`, or no
/// worse than the current cost. The slot is then lowered to the current
/// cost if that is smaller, so history entries never increase.
///
/// The engine owns its tour, history and random source; the distance matrix
/// is borrowed read-only and may back many engines at once.
///
/// # Examples
///
/// ```
/// use u_tsp::constructive::nearest_neighbor;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::lahc::{LahcConfig, LateAcceptance};
/// use u_tsp::models::Location;
///
/// let locations: Vec<Location> = (0..8)
///     .map(|i| {
///         let a = i as f64 * std::f64::consts::TAU / 8.0;
///         Location::new(i, a.cos(), a.sin())
///     })
///     .collect();
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
/// let start = nearest_neighbor(&dm, 0).unwrap();
///
/// let config = LahcConfig::default().with_horizon(5).with_seed(7);
/// let mut engine = LateAcceptance::new(&dm, start.clone(), &config).unwrap();
/// let result = engine.run();
/// assert!(result.cost <= start.cost() + 1e-9);
/// ```
pub struct LateAcceptance<'a, R: Rng = StdRng> {
    distances: &'a DistanceMatrix,
    config: LahcConfig,
    mover: RandomRelocate,
    rng: R,
    current: Tour,
    initial_cost: f64,
    history: Vec<f64>,
    iterations: usize,
    idle: usize,
    accepted_moves: usize,
    improving_moves: usize,
    cost_history: Vec<f64>,
    status: SearchStatus,
}

impl<'a> LateAcceptance<'a, StdRng> {
    /// Creates an engine seeded from `config.seed`, or from a fresh random
    /// seed if none is set.
    pub fn new(distances: &'a DistanceMatrix, initial: Tour, config: &LahcConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(distances, initial, config, StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> LateAcceptance<'a, R> {
    /// Creates an engine drawing moves from the given random source.
    ///
    /// # Errors
    ///
    /// - [`TspError::InvalidConfiguration`] if the config fails validation
    ///   (notably `horizon < 1`)
    /// - [`TspError::InvalidTour`] if `initial` does not cover exactly the
    ///   locations of `distances`
    pub fn with_rng(
        distances: &'a DistanceMatrix,
        initial: Tour,
        config: &LahcConfig,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;
        let current = Tour::new(initial.into_sequence(), distances)?;
        let initial_cost = current.cost();

        Ok(Self {
            distances,
            config: config.clone(),
            mover: RandomRelocate::new(config.reinsertion),
            rng,
            initial_cost,
            history: vec![initial_cost; config.horizon],
            iterations: 0,
            idle: 0,
            accepted_moves: 0,
            improving_moves: 0,
            cost_history: vec![initial_cost],
            status: SearchStatus::Running,
            current,
        })
    }

    /// Executes one LAHC iteration.
    ///
    /// Steps can be taken after the stopping policy has fired (the engine
    /// stays `Stopped`); callers driving engines in lock-step rely on this.
    pub fn step(&mut self) -> StepOutcome {
        let candidate = self.mover.perturb(&self.current, self.distances, &mut self.rng);
        let candidate_cost = candidate.cost();
        let current_cost = self.current.cost();

        // Idle tracks failure to find an improving move, not failure to accept.
        let improving = candidate_cost < current_cost;
        if improving {
            self.idle = 0;
            self.improving_moves += 1;
        } else {
            self.idle += 1;
        }

        let slot = self.iterations % self.history.len();
        let accepted = candidate_cost < self.history[slot] || candidate_cost <= current_cost;
        if accepted {
            if improving {
                trace!(
                    iteration = self.iterations,
                    from = current_cost,
                    to = candidate_cost,
                    "improving move accepted"
                );
            }
            self.current = candidate;
            self.accepted_moves += 1;
        }

        if self.current.cost() < self.history[slot] {
            self.history[slot] = self.current.cost();
        }
        self.iterations += 1;

        if self.iterations % self.config.history_interval == 0 {
            self.cost_history.push(self.current.cost());
        }
        if self.status == SearchStatus::Running {
            if let Some(reason) = self.config.stop_reason(self.iterations, self.idle) {
                self.status = SearchStatus::Stopped(reason);
            }
        }

        StepOutcome {
            candidate_cost,
            slot,
            accepted,
            improving,
        }
    }

    /// Steps until the stopping policy fires and returns the outcome.
    ///
    /// Calling `run` again on a stopped engine returns the same result
    /// without stepping.
    pub fn run(&mut self) -> LahcResult {
        if let SearchStatus::Stopped(_) = self.status {
            return self.build_result();
        }
        debug!(
            horizon = self.history.len(),
            n = self.current.num_locations(),
            initial_cost = self.initial_cost,
            limit_idle = self.config.limit_idle,
            "late acceptance search started"
        );
        while self.status == SearchStatus::Running {
            self.step();
        }
        let result = self.build_result();
        debug!(
            cost = result.cost,
            iterations = result.iterations,
            accepted = result.accepted_moves,
            reason = ?result.stop_reason,
            "late acceptance search stopped"
        );
        result
    }

    /// Snapshot of the search outcome so far.
    ///
    /// Fails with [`TspError::NotOptimized`] before the first step.
    pub fn result(&self) -> Result<LahcResult> {
        self.ensure_optimized()?;
        Ok(self.build_result())
    }

    /// Current tour. Fails with [`TspError::NotOptimized`] before the first step.
    pub fn tour(&self) -> Result<&Tour> {
        self.ensure_optimized()?;
        Ok(&self.current)
    }

    /// Current cost. Fails with [`TspError::NotOptimized`] before the first step.
    pub fn cost(&self) -> Result<f64> {
        self.ensure_optimized()?;
        Ok(self.current.cost())
    }

    /// Cost of the starting tour.
    pub fn initial_cost(&self) -> f64 {
        self.initial_cost
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Steps executed so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Consecutive steps whose candidate did not strictly improve.
    pub fn idle_iterations(&self) -> usize {
        self.idle
    }

    /// The history buffer, one entry per slot.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn config(&self) -> &LahcConfig {
        &self.config
    }

    fn ensure_optimized(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(TspError::NotOptimized);
        }
        Ok(())
    }

    fn build_result(&self) -> LahcResult {
        let mut cost_history = self.cost_history.clone();
        if self.iterations % self.config.history_interval != 0 {
            cost_history.push(self.current.cost());
        }
        LahcResult {
            tour: self.current.clone(),
            cost: self.current.cost(),
            initial_cost: self.initial_cost,
            iterations: self.iterations,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            stop_reason: match self.status {
                SearchStatus::Stopped(reason) => Some(reason),
                SearchStatus::Running => None,
            },
            cost_history,
        }
    }
}
