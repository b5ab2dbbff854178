//! Starting-tour selection for searches and experiments.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::Tour;

/// How to build the tour a search starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartStrategy {
    /// `[0, 1, ..., n-1, 0]`.
    Identity,
    /// Greedy nearest-neighbour tour from the given location.
    NearestNeighbour {
        /// Location the tour starts and ends at.
        start: usize,
    },
    /// Depot 0 with a uniformly shuffled interior.
    #[default]
    Random,
}

/// Builds a starting tour according to `strategy`.
///
/// `rng` is only drawn from by [`StartStrategy::Random`].
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::{initial_tour, StartStrategy};
///
/// let dm = DistanceMatrix::new(4);
/// let mut rng = StdRng::seed_from_u64(1);
/// let tour = initial_tour(StartStrategy::Identity, &dm, &mut rng).unwrap();
/// assert_eq!(tour.sequence(), &[0, 1, 2, 3, 0]);
/// ```
pub fn initial_tour<R: Rng>(
    strategy: StartStrategy,
    distances: &DistanceMatrix,
    rng: &mut R,
) -> Result<Tour> {
    match strategy {
        StartStrategy::Identity => Tour::identity(distances),
        StartStrategy::NearestNeighbour { start } => nearest_neighbor(distances, start),
        StartStrategy::Random => Tour::random(distances, rng),
    }
}
