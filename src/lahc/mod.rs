//! Late Acceptance Hill Climbing (LAHC).
//!
//! A single-solution trajectory metaheuristic. A candidate is accepted if it
//! beats the cost recorded `L` iterations earlier in a circular history
//! buffer, or if it is no worse than the current cost. Larger horizons `L`
//! tolerate longer uphill stretches; `L = 1` is plain hill climbing with
//! lateral moves.
//!
//! # References
//!
//! - Burke & Bykov (2008), "A Late Acceptance Strategy in Hill-Climbing for
//!   Exam Timetabling Problems"
//! - Burke & Bykov (2017), "The Late Acceptance Hill-Climbing Heuristic",
//!   European Journal of Operational Research 258(1)

mod config;
mod runner;

pub use config::{LahcConfig, StopReason};
pub use runner::{LahcResult, LateAcceptance, SearchStatus, StepOutcome};
