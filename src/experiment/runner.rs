//! Multi-start runs, horizon sweeps and averaged convergence curves.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::config::ExperimentConfig;
use crate::constructive::{initial_tour, StartStrategy};
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::lahc::{LahcConfig, LahcResult, LateAcceptance};

/// Final costs of all runs for one horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    /// History length used for these runs.
    pub horizon: usize,
    /// Final cost of each run, in run order.
    pub costs: Vec<f64>,
}

impl SweepRow {
    /// Lowest final cost among the runs.
    pub fn min(&self) -> f64 {
        self.costs.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Mean final cost over the runs.
    pub fn mean(&self) -> f64 {
        if self.costs.is_empty() {
            return f64::NAN;
        }
        self.costs.iter().sum::<f64>() / self.costs.len() as f64
    }
}

/// Mean current cost per iteration across lock-stepped runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceCurve {
    /// History length used for these runs.
    pub horizon: usize,
    /// `mean_costs[t]` is the mean current cost after step `t + 1`.
    pub mean_costs: Vec<f64>,
}

/// Seed for run `run`: offset from the base seed, or fresh if there is none.
pub fn run_seed(base: Option<u64>, run: usize) -> u64 {
    match base {
        Some(seed) => seed.wrapping_add(run as u64),
        None => rand::random(),
    }
}

/// Builds a new engine for one trial: its own random source, seeded with
/// `seed`, first builds the starting tour and then drives the moves.
pub fn fresh_engine<'a>(
    distances: &'a DistanceMatrix,
    lahc: &LahcConfig,
    start: StartStrategy,
    seed: u64,
) -> Result<LateAcceptance<'a>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let tour = initial_tour(start, distances, &mut rng)?;
    LateAcceptance::with_rng(distances, tour, lahc, rng)
}

/// Runs `experiment.runs` independent searches to completion.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::experiment::{multi_start, ExperimentConfig};
/// use u_tsp::lahc::LahcConfig;
/// use u_tsp::models::Location;
///
/// let locations: Vec<Location> = (0..6)
///     .map(|i| Location::new(i, i as f64, (i % 2) as f64))
///     .collect();
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
/// let lahc = LahcConfig::default().with_horizon(3).with_seed(1);
/// let experiment = ExperimentConfig::default().with_runs(4);
///
/// let results = multi_start(&dm, &lahc, &experiment).unwrap();
/// assert_eq!(results.len(), 4);
/// ```
#[instrument(skip_all, fields(runs = experiment.runs, horizon = lahc.horizon))]
pub fn multi_start(
    distances: &DistanceMatrix,
    lahc: &LahcConfig,
    experiment: &ExperimentConfig,
) -> Result<Vec<LahcResult>> {
    experiment.validate()?;
    lahc.validate()?;

    let solve = |run: usize| -> Result<LahcResult> {
        let seed = run_seed(lahc.seed, run);
        let result = fresh_engine(distances, lahc, experiment.start, seed)?.run();
        debug!(run, seed, cost = result.cost, iterations = result.iterations, "run finished");
        Ok(result)
    };

    let results = if experiment.parallel {
        (0..experiment.runs)
            .into_par_iter()
            .map(solve)
            .collect::<Result<Vec<_>>>()?
    } else {
        (0..experiment.runs).map(solve).collect::<Result<Vec<_>>>()?
    };

    info!(
        best = results.iter().map(|r| r.cost).fold(f64::INFINITY, f64::min),
        "multi-start finished"
    );
    Ok(results)
}

/// Runs [`multi_start`] once per horizon, recording the final costs.
#[instrument(skip_all, fields(horizons = horizons.len(), runs = experiment.runs))]
pub fn horizon_sweep(
    distances: &DistanceMatrix,
    horizons: &[usize],
    lahc: &LahcConfig,
    experiment: &ExperimentConfig,
) -> Result<Vec<SweepRow>> {
    let mut rows = Vec::with_capacity(horizons.len());
    for &horizon in horizons {
        let config = lahc.clone().with_horizon(horizon);
        let costs = multi_start(distances, &config, experiment)?
            .into_iter()
            .map(|r| r.cost)
            .collect();
        let row = SweepRow { horizon, costs };
        info!(horizon, min = row.min(), mean = row.mean(), "horizon evaluated");
        rows.push(row);
    }
    Ok(rows)
}

/// Advances `experiment.runs` engines in lock-step for `iterations` steps and
/// records the mean current cost after each step.
///
/// Every engine completes step `t` before the mean for `t` is taken. The
/// stopping policy is ignored: all engines take exactly `iterations` steps.
#[instrument(skip_all, fields(runs = experiment.runs, horizon = lahc.horizon, iterations = iterations))]
pub fn convergence_curve(
    distances: &DistanceMatrix,
    lahc: &LahcConfig,
    experiment: &ExperimentConfig,
    iterations: usize,
) -> Result<ConvergenceCurve> {
    experiment.validate()?;
    if iterations == 0 {
        return Err(TspError::InvalidConfiguration(
            "iterations must be at least 1".into(),
        ));
    }

    let mut engines = (0..experiment.runs)
        .map(|run| fresh_engine(distances, lahc, experiment.start, run_seed(lahc.seed, run)))
        .collect::<Result<Vec<_>>>()?;

    let mut mean_costs = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        if experiment.parallel {
            engines.par_iter_mut().for_each(|engine| {
                engine.step();
            });
        } else {
            for engine in engines.iter_mut() {
                engine.step();
            }
        }
        let total = engines.iter().map(|e| e.cost()).sum::<Result<f64>>()?;
        mean_costs.push(total / engines.len() as f64);
    }

    debug!(
        first = mean_costs.first().copied(),
        last = mean_costs.last().copied(),
        "convergence curve recorded"
    );
    Ok(ConvergenceCurve {
        horizon: lahc.horizon,
        mean_costs,
    })
}

/// Runs [`convergence_curve`] once per horizon.
pub fn convergence_sweep(
    distances: &DistanceMatrix,
    horizons: &[usize],
    lahc: &LahcConfig,
    experiment: &ExperimentConfig,
    iterations: usize,
) -> Result<Vec<ConvergenceCurve>> {
    horizons
        .iter()
        .map(|&h| convergence_curve(distances, &lahc.clone().with_horizon(h), experiment, iterations))
        .collect()
}

/// Relative gap to a reference cost, in percent of `cost`:
/// `100 · (cost − reference) / cost`.
///
/// A zero `cost` (e.g. a single-location tour) has a gap of 0.
///
/// ```
/// use u_tsp::experiment::optimality_gap;
///
/// assert!((optimality_gap(500.0, 496.0) - 0.8).abs() < 1e-10);
/// ```
pub fn optimality_gap(cost: f64, reference: f64) -> f64 {
    if cost == 0.0 {
        return 0.0;
    }
    100.0 * (cost - reference) / cost
}
