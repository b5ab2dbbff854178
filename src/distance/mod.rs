//! Distance matrices.
//!
//! Provides the dense, read-only travel cost lookup shared by every
//! heuristic in the crate.

mod matrix;

pub use matrix::DistanceMatrix;
