//! Random relocate move.
//!
//! # Algorithm
//!
//! Removes one uniformly chosen location from the tour interior and
//! reinserts it elsewhere in the interior. The depot stays fixed at both
//! ends. This is the only neighbourhood the late acceptance search uses;
//! each move costs O(n) to build and O(n) to evaluate.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Where a removed location is put back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reinsertion {
    /// Uniform slot in the shortened interior, `0..=len`.
    #[default]
    Position,
    /// A uniformly drawn interior *location id* reused as the slot index,
    /// clamped to the end of the interior. Slot 0 is never chosen when the
    /// depot is 0, so the first interior location can only move backwards.
    Value,
}

/// Generates random relocate neighbours of a tour.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::{RandomRelocate, Reinsertion};
/// use u_tsp::models::Tour;
///
/// let dm = DistanceMatrix::new(6);
/// let tour = Tour::identity(&dm).unwrap();
/// let mover = RandomRelocate::new(Reinsertion::Position);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let candidate = mover.perturb(&tour, &dm, &mut rng);
/// assert_eq!(candidate.sequence().len(), tour.sequence().len());
/// assert_eq!(candidate.depot(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RandomRelocate {
    reinsertion: Reinsertion,
}

impl RandomRelocate {
    /// Creates a generator with the given reinsertion rule.
    pub fn new(reinsertion: Reinsertion) -> Self {
        Self { reinsertion }
    }

    /// The reinsertion rule in use.
    pub fn reinsertion(&self) -> Reinsertion {
        self.reinsertion
    }

    /// Returns a relocated copy of `tour`; the input is left untouched.
    ///
    /// Tours with at most one interior location (n ≤ 2) are returned
    /// unchanged without drawing from `rng`.
    pub fn perturb<R: Rng>(&self, tour: &Tour, distances: &DistanceMatrix, rng: &mut R) -> Tour {
        let mut interior = tour.interior().to_vec();
        let m = interior.len();
        if m <= 1 {
            return tour.clone();
        }

        let remove_at = rng.random_range(0..m);
        let draw = rng.random_range(0..m);
        let insert_at = match self.reinsertion {
            Reinsertion::Position => draw,
            Reinsertion::Value => interior[draw],
        };

        let location = interior.remove(remove_at);
        interior.insert(insert_at.min(interior.len()), location);

        let depot = tour.depot();
        let mut sequence = Vec::with_capacity(m + 2);
        sequence.push(depot);
        sequence.extend(interior);
        sequence.push(depot);
        Tour::from_sequence(sequence, distances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted_interior(tour: &Tour) -> Vec<usize> {
        let mut v = tour.interior().to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_perturb_preserves_locations() {
        let dm = DistanceMatrix::new(9);
        let tour = Tour::identity(&dm).expect("valid");
        let mut rng = StdRng::seed_from_u64(5);
        for reinsertion in [Reinsertion::Position, Reinsertion::Value] {
            let mover = RandomRelocate::new(reinsertion);
            for _ in 0..200 {
                let c = mover.perturb(&tour, &dm, &mut rng);
                assert_eq!(c.sequence().len(), 10);
                assert_eq!(c.depot(), 0);
                assert_eq!(c.sequence()[9], 0);
                assert_eq!(sorted_interior(&c), (1..9).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_perturb_does_not_mutate_input() {
        let dm = DistanceMatrix::new(5);
        let tour = Tour::identity(&dm).expect("valid");
        let before = tour.clone();
        let mut rng = StdRng::seed_from_u64(1);
        let _ = RandomRelocate::default().perturb(&tour, &dm, &mut rng);
        assert_eq!(tour, before);
    }

    #[test]
    fn test_perturb_degenerate_sizes() {
        let mut rng = StdRng::seed_from_u64(0);
        let mover = RandomRelocate::default();
        for n in 1..=2 {
            let dm = DistanceMatrix::new(n);
            let tour = Tour::identity(&dm).expect("valid");
            assert_eq!(mover.perturb(&tour, &dm, &mut rng), tour);
        }
    }

    #[test]
    fn test_perturb_recomputes_cost() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 5.0, 3.0],
            vec![1.0, 0.0, 2.0, 7.0],
            vec![5.0, 2.0, 0.0, 4.0],
            vec![3.0, 7.0, 4.0, 0.0],
        ])
        .expect("valid");
        let tour = Tour::identity(&dm).expect("valid");
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let c = RandomRelocate::default().perturb(&tour, &dm, &mut rng);
            let expected: f64 = c.edges().map(|(i, j)| dm.get(i, j)).sum();
            assert_eq!(c.cost(), expected);
        }
    }

    #[test]
    fn test_position_reaches_front_slot() {
        let dm = DistanceMatrix::new(6);
        let tour = Tour::identity(&dm).expect("valid");
        let mover = RandomRelocate::new(Reinsertion::Position);
        let mut rng = StdRng::seed_from_u64(2024);
        let reached = (0..500).any(|_| {
            let c = mover.perturb(&tour, &dm, &mut rng);
            c.interior()[0] != 1
        });
        assert!(reached, "some location other than 1 should move to the front");
    }

    #[test]
    fn test_value_never_inserts_at_front() {
        // Interior ids are 1..n-1, so slot 0 is unreachable and location 1
        // can only leave the front, never be replaced there by reinsertion.
        let dm = DistanceMatrix::new(6);
        let tour = Tour::identity(&dm).expect("valid");
        let mover = RandomRelocate::new(Reinsertion::Value);
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..500 {
            let c = mover.perturb(&tour, &dm, &mut rng);
            let front = c.interior()[0];
            assert!(front == 1 || front == 2, "unexpected front {front}");
        }
    }

    #[test]
    fn test_same_seed_same_candidate() {
        let dm = DistanceMatrix::new(12);
        let tour = Tour::identity(&dm).expect("valid");
        let mover = RandomRelocate::default();
        let a = mover.perturb(&tour, &dm, &mut StdRng::seed_from_u64(8));
        let b = mover.perturb(&tour, &dm, &mut StdRng::seed_from_u64(8));
        assert_eq!(a, b);
    }
}
