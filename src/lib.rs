//! # u-tsp
//!
//! Travelling salesman heuristics: a greedy nearest-neighbour constructor and
//! a Late Acceptance Hill Climbing search over depot-anchored tours.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Tour)
//! - [`distance`] — Distance matrix
//! - [`constructive`] — Constructive heuristics (Nearest Neighbour, start strategies)
//! - [`local_search`] — Neighbourhood moves (random relocate)
//! - [`lahc`] — Late Acceptance Hill Climbing engine
//! - [`experiment`] — Multi-start runs, horizon sweeps, convergence curves
//! - [`error`] — Error type shared by all modules
//!
//! ## Example
//!
//! ```
//! use u_tsp::constructive::nearest_neighbor;
//! use u_tsp::distance::DistanceMatrix;
//! use u_tsp::lahc::{LahcConfig, LateAcceptance};
//!
//! let dm = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 3.0, 4.0, 2.0, 7.0],
//!     vec![3.0, 0.0, 4.0, 6.0, 3.0],
//!     vec![4.0, 4.0, 0.0, 5.0, 8.0],
//!     vec![2.0, 6.0, 5.0, 0.0, 6.0],
//!     vec![7.0, 3.0, 8.0, 6.0, 0.0],
//! ])?;
//!
//! let start = nearest_neighbor(&dm, 0)?;
//! let config = LahcConfig::default().with_horizon(10).with_seed(42);
//! let result = LateAcceptance::new(&dm, start.clone(), &config)?.run();
//! assert!(result.cost <= start.cost());
//! # Ok::<(), u_tsp::error::TspError>(())
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod experiment;
pub mod lahc;
pub mod local_search;
pub mod models;

pub use error::{Result, TspError};
