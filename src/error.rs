//! Error types.

use std::fmt::{self, Display};

/// Errors raised while building tours or configuring a search.
///
/// All failures are a deterministic function of the input; none are retried.
#[derive(Debug, Clone, PartialEq)]
pub enum TspError {
    /// The problem size is not supported (fewer than one location, or
    /// matrix data that is not `n × n`).
    InvalidSize {
        /// Offending size.
        size: usize,
    },
    /// A search or experiment parameter is out of range.
    InvalidConfiguration(String),
    /// A tour or cost was requested before the search executed any step.
    NotOptimized,
    /// A location index lies outside `0..size`.
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of locations.
        size: usize,
    },
    /// A caller-supplied tour breaks the depot/permutation invariants.
    InvalidTour(String),
}

impl Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TspError::InvalidSize { size } => write!(f, "invalid problem size: {size}"),
            TspError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            TspError::NotOptimized => write!(f, "search has not run yet; call run() or step() first"),
            TspError::IndexOutOfRange { index, size } => {
                write!(f, "location index {index} out of range for {size} locations")
            }
            TspError::InvalidTour(msg) => write!(f, "invalid tour: {msg}"),
        }
    }
}

impl std::error::Error for TspError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;
