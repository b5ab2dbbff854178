//! Dense distance matrix.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};
use crate::models::Location;

/// A dense n×n distance matrix stored in row-major order.
///
/// Immutable for the lifetime of a search; engines borrow it, so one matrix
/// can back any number of independent runs. Entries may be asymmetric.
/// Serializes as a list of rows and is validated again on deserialization.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::depot(0.0, 0.0),
///     Location::new(1, 3.0, 4.0),
///     Location::new(2, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations)?;
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// # Ok::<(), u_tsp::error::TspError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from location coordinates.
    ///
    /// The distances go through the same checks as [`from_data`], so an
    /// empty slice or a non-finite coordinate is an error.
    ///
    /// [`from_data`]: DistanceMatrix::from_data
    pub fn from_locations(locations: &[Location]) -> Result<Self> {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Self::from_data(n, dm.data)
    }

    /// Creates a distance matrix from a flat row-major n×n grid.
    ///
    /// Fails with [`TspError::InvalidSize`] if `size` is zero or the data
    /// length doesn't match `size * size`, and with
    /// [`TspError::InvalidConfiguration`] on negative or non-finite entries.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if size == 0 || data.len() != size * size {
            return Err(TspError::InvalidSize { size });
        }
        if let Some(pos) = data.iter().position(|d| !d.is_finite() || *d < 0.0) {
            return Err(TspError::InvalidConfiguration(format!(
                "distance[{}][{}] = {} is not a finite non-negative value",
                pos / size,
                pos % size,
                data[pos]
            )));
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from one row per origin location.
    ///
    /// Every row must have exactly as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return Err(TspError::InvalidSize { size });
        }
        Self::from_data(size, rows.into_iter().flatten().collect())
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the row of distances leaving `from`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Ties go to the candidate listed first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = TspError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(dm: DistanceMatrix) -> Self {
        if dm.size == 0 {
            return Vec::new();
        }
        dm.data.chunks(dm.size).map(<[f64]>::to_vec).collect()
    }
}
