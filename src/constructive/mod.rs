//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbour tour, O(n²)
//! - [`initial_tour`] — Start selection (identity, nearest-neighbour, random)

mod nearest_neighbor;
mod start;

pub use nearest_neighbor::nearest_neighbor;
pub use start::{initial_tour, StartStrategy};
