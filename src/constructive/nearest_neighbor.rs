//! Nearest-neighbour constructive heuristic.
//!
//! Builds a tour greedily: starting from the chosen location, always travel
//! to the nearest unvisited location, then return to the start.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Solution quality is
//! typically 15-25% above optimal; it is mostly useful as a fast baseline
//! or as a starting point for local search.

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::models::Tour;

/// Constructs a tour using the nearest-neighbour heuristic.
///
/// From the current last location `i`, scans every unvisited `j` in
/// ascending order and moves to the one minimizing `distances[i][j]`; ties
/// go to the lowest index. The tour is closed by returning to `start`,
/// which becomes the depot.
///
/// # Errors
///
/// - [`TspError::InvalidSize`] if the matrix has no locations
/// - [`TspError::IndexOutOfRange`] if `start >= n`
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_neighbor;
///
/// let locations = vec![
///     Location::depot(0.0, 0.0),
///     Location::new(1, 1.0, 0.0),
///     Location::new(2, 2.0, 0.0),
///     Location::new(3, 3.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
///
/// let tour = nearest_neighbor(&dm, 0).unwrap();
/// assert_eq!(tour.sequence(), &[0, 1, 2, 3, 0]);
/// assert!((tour.cost() - 6.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix, start: usize) -> Result<Tour> {
    let n = distances.size();
    if n == 0 {
        return Err(TspError::InvalidSize { size: n });
    }
    if start >= n {
        return Err(TspError::IndexOutOfRange {
            index: start,
            size: n,
        });
    }

    // Kept in ascending order so the first-wins lookup breaks ties low.
    let mut unvisited: Vec<usize> = (0..n).filter(|&j| j != start).collect();
    let mut sequence = Vec::with_capacity(n + 1);
    sequence.push(start);
    let mut current = start;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&j| j != next);
        sequence.push(next);
        current = next;
    }
    sequence.push(start);

    let tour = Tour::from_sequence(sequence, distances);
    debug!(start, n, cost = tour.cost(), "nearest-neighbour tour built");
    Ok(tour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn line_locations() -> DistanceMatrix {
        DistanceMatrix::from_locations(&[
            Location::depot(0.0, 0.0),
            Location::new(1, 1.0, 0.0),
            Location::new(2, 2.0, 0.0),
            Location::new(3, 3.0, 0.0),
        ])
        .expect("valid")
    }

    #[test]
    fn test_nn_visits_line_in_order() {
        let dm = line_locations();
        let tour = nearest_neighbor(&dm, 0).expect("valid");
        assert_eq!(tour.sequence(), &[0, 1, 2, 3, 0]);
        // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3 = 6
        assert!((tour.cost() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = DistanceMatrix::from_locations(&[
            Location::depot(0.0, 0.0),
            Location::new(1, 10.0, 0.0), // far
            Location::new(2, 1.0, 0.0),  // near
        ])
        .expect("valid");
        let tour = nearest_neighbor(&dm, 0).expect("valid");
        assert_eq!(tour.sequence(), &[0, 2, 1, 0]);
    }

    #[test]
    fn test_nn_tie_breaks_on_lowest_index() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 5.0, 2.0, 2.0],
            vec![5.0, 0.0, 3.0, 3.0],
            vec![2.0, 3.0, 0.0, 4.0],
            vec![2.0, 3.0, 4.0, 0.0],
        ])
        .expect("valid");
        let tour = nearest_neighbor(&dm, 0).expect("valid");
        // 2 and 3 tie from 0; 2 wins. From 2: 1 (3.0) beats 3 (4.0).
        assert_eq!(tour.sequence(), &[0, 2, 1, 3, 0]);
    }

    #[test]
    fn test_nn_other_start() {
        let dm = line_locations();
        let tour = nearest_neighbor(&dm, 3).expect("valid");
        assert_eq!(tour.sequence(), &[3, 2, 1, 0, 3]);
        assert_eq!(tour.depot(), 3);
    }

    #[test]
    fn test_nn_asymmetric_uses_outgoing_row() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 9.0, 1.0],
            vec![1.0, 0.0, 9.0],
            vec![9.0, 1.0, 0.0],
        ])
        .expect("valid");
        let tour = nearest_neighbor(&dm, 0).expect("valid");
        assert_eq!(tour.sequence(), &[0, 2, 1, 0]);
        assert_eq!(tour.cost(), 3.0);
    }

    #[test]
    fn test_nn_single_location() {
        let dm = DistanceMatrix::new(1);
        let tour = nearest_neighbor(&dm, 0).expect("valid");
        assert_eq!(tour.sequence(), &[0, 0]);
    }

    #[test]
    fn test_nn_empty_matrix() {
        let dm = DistanceMatrix::new(0);
        assert_eq!(
            nearest_neighbor(&dm, 0),
            Err(TspError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn test_nn_start_out_of_range() {
        let dm = line_locations();
        assert_eq!(
            nearest_neighbor(&dm, 4),
            Err(TspError::IndexOutOfRange { index: 4, size: 4 })
        );
    }
}
