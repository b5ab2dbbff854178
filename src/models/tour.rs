//! Depot-anchored tour type.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};

/// Sum of `distances[a][b]` over consecutive elements of `sequence`.
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::sequence_cost;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 3.0, 4.0, 0.0]).unwrap();
/// assert_eq!(sequence_cost(&[0, 1, 0], &dm), 7.0);
/// ```
pub fn sequence_cost(sequence: &[usize], distances: &DistanceMatrix) -> f64 {
    sequence
        .windows(2)
        .map(|w| distances.get(w[0], w[1]))
        .sum()
}

/// A closed visiting order over all `n` locations.
///
/// Stored as `n + 1` indices: the first and last element are the depot and
/// the elements in between are a permutation of every other location. The
/// cost is recomputed from the full edge list whenever a tour is built,
/// never patched incrementally.
///
/// Tours serialize but do not deserialize: the cached cost only means
/// something against a matrix, so a stored `sequence` is reloaded with
/// [`Tour::new`].
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::Tour;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ]).unwrap();
///
/// let tour = Tour::new(vec![0, 2, 1, 0], &dm).unwrap();
/// assert_eq!(tour.depot(), 0);
/// assert_eq!(tour.interior(), &[2, 1]);
/// assert_eq!(tour.cost(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    sequence: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Validates `sequence` against `distances` and computes its cost.
    ///
    /// Fails with [`TspError::InvalidTour`] unless the sequence has
    /// `n + 1` entries, starts and ends at the same depot, and visits every
    /// other location exactly once.
    pub fn new(sequence: Vec<usize>, distances: &DistanceMatrix) -> Result<Self> {
        validate_sequence(&sequence, distances.size())?;
        Ok(Self::from_sequence(sequence, distances))
    }

    /// The identity tour `[0, 1, ..., n-1, 0]`.
    pub fn identity(distances: &DistanceMatrix) -> Result<Self> {
        let n = distances.size();
        if n == 0 {
            return Err(TspError::InvalidSize { size: n });
        }
        let sequence = (0..n).chain(std::iter::once(0)).collect();
        Ok(Self::from_sequence(sequence, distances))
    }

    /// A tour anchored at location 0 with a uniformly shuffled interior.
    pub fn random<R: Rng>(distances: &DistanceMatrix, rng: &mut R) -> Result<Self> {
        let mut tour = Self::identity(distances)?;
        let len = tour.sequence.len();
        tour.sequence[1..len - 1].shuffle(rng);
        tour.cost = sequence_cost(&tour.sequence, distances);
        Ok(tour)
    }

    /// Builds a tour from a sequence the caller already guarantees is valid.
    pub(crate) fn from_sequence(sequence: Vec<usize>, distances: &DistanceMatrix) -> Self {
        let cost = sequence_cost(&sequence, distances);
        Self { sequence, cost }
    }

    /// The full `n + 1` element visiting order, depot at both ends.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// The fixed start/end location.
    pub fn depot(&self) -> usize {
        self.sequence[0]
    }

    /// Locations strictly between the two depot visits.
    pub fn interior(&self) -> &[usize] {
        let len = self.sequence.len();
        &self.sequence[1..len - 1]
    }

    /// Number of locations `n` covered by this tour.
    pub fn num_locations(&self) -> usize {
        self.sequence.len() - 1
    }

    /// Cached total travel cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The `n` travelled edges `(from, to)` in visiting order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sequence.windows(2).map(|w| (w[0], w[1]))
    }

    /// Consumes the tour, returning its visiting order.
    pub fn into_sequence(self) -> Vec<usize> {
        self.sequence
    }
}

fn validate_sequence(sequence: &[usize], n: usize) -> Result<()> {
    if n == 0 {
        return Err(TspError::InvalidSize { size: n });
    }
    if sequence.len() != n + 1 {
        return Err(TspError::InvalidTour(format!(
            "expected {} entries, got {}",
            n + 1,
            sequence.len()
        )));
    }
    let depot = sequence[0];
    if sequence[n] != depot {
        return Err(TspError::InvalidTour(format!(
            "tour starts at {depot} but ends at {}",
            sequence[n]
        )));
    }
    let mut seen = vec![false; n];
    for &loc in &sequence[..n] {
        if loc >= n {
            return Err(TspError::IndexOutOfRange {
                index: loc,
                size: n,
            });
        }
        if seen[loc] {
            return Err(TspError::InvalidTour(format!(
                "location {loc} visited twice"
            )));
        }
        seen[loc] = true;
    }
    Ok(())
}
