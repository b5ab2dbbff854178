//! Domain model types for travelling salesman problems.
//!
//! Provides locations with coordinates and the depot-anchored tour that every
//! heuristic produces and consumes.

mod location;
mod tour;

pub use location::{locations_from_points, Location};
pub use tour::{sequence_cost, Tour};
