//! Repeated-run experiments on top of the LAHC engine.
//!
//! - [`multi_start`] — Independent runs from (typically random) starts
//! - [`horizon_sweep`] — Final costs per history length
//! - [`convergence_curve`] — Mean cost per iteration over lock-stepped runs
//! - [`optimality_gap`] — Percentage gap to a known or bound cost
//!
//! Each run gets a fresh engine with its own seeded random source, so runs
//! can execute in parallel without sharing mutable state.

mod config;
mod runner;

pub use config::ExperimentConfig;
pub use runner::{
    convergence_curve, convergence_sweep, fresh_engine, horizon_sweep, multi_start,
    optimality_gap, run_seed, ConvergenceCurve, SweepRow,
};
