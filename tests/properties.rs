//! Property tests for tours, moves and the LAHC engine.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use u_tsp::constructive::nearest_neighbor;
use u_tsp::distance::DistanceMatrix;
use u_tsp::lahc::{LahcConfig, LateAcceptance};
use u_tsp::local_search::{RandomRelocate, Reinsertion};
use u_tsp::models::{sequence_cost, Tour};

fn matrix_strategy(max_n: usize) -> impl Strategy<Value = DistanceMatrix> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec(0.0f64..100.0, n * n)
            .prop_map(move |data| DistanceMatrix::from_data(n, data).expect("n×n data"))
    })
}

fn reinsertion_strategy() -> impl Strategy<Value = Reinsertion> {
    prop_oneof![Just(Reinsertion::Position), Just(Reinsertion::Value)]
}

fn is_valid_tour(seq: &[usize], n: usize) -> bool {
    if seq.len() != n + 1 || seq[0] != seq[n] {
        return false;
    }
    let mut sorted = seq[..n].to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<_>>()
}

proptest! {
    #[test]
    fn nearest_neighbour_builds_valid_tours(dm in matrix_strategy(25), start_seed in 0usize..1000) {
        let n = dm.size();
        let start = start_seed % n;
        let tour = nearest_neighbor(&dm, start).expect("valid input");
        prop_assert!(is_valid_tour(tour.sequence(), n));
        prop_assert_eq!(tour.depot(), start);
    }

    #[test]
    fn cost_is_deterministic_edge_sum(dm in matrix_strategy(20), seed in any::<u64>()) {
        let tour = Tour::random(&dm, &mut StdRng::seed_from_u64(seed)).expect("valid");
        let by_edges: f64 = tour.edges().map(|(i, j)| dm.get(i, j)).sum();
        prop_assert_eq!(tour.edges().count(), dm.size());
        prop_assert_eq!(tour.cost(), by_edges);
        prop_assert_eq!(sequence_cost(tour.sequence(), &dm), sequence_cost(tour.sequence(), &dm));
    }

    #[test]
    fn perturb_keeps_length_and_locations(
        dm in matrix_strategy(20),
        seed in any::<u64>(),
        reinsertion in reinsertion_strategy(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let tour = Tour::random(&dm, &mut rng).expect("valid");
        let candidate = RandomRelocate::new(reinsertion).perturb(&tour, &dm, &mut rng);

        prop_assert_eq!(candidate.sequence().len(), tour.sequence().len());
        prop_assert_eq!(candidate.depot(), tour.depot());
        let mut a = tour.interior().to_vec();
        let mut b = candidate.interior().to_vec();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
        if dm.size() <= 2 {
            prop_assert_eq!(&candidate, &tour);
        }
    }

    #[test]
    fn engine_history_and_cost_invariants(
        dm in matrix_strategy(15),
        seed in any::<u64>(),
        horizon in 1usize..30,
    ) {
        let config = LahcConfig::default().with_horizon(horizon).with_seed(seed);
        let start = Tour::identity(&dm).expect("valid");
        let initial = start.cost();
        let mut engine = LateAcceptance::new(&dm, start, &config).expect("valid");

        for _ in 0..300 {
            let history_before = engine.history().to_vec();
            let slot = engine.iterations() % horizon;
            let cost_before = if engine.iterations() == 0 {
                initial
            } else {
                engine.cost().expect("stepped")
            };

            let outcome = engine.step();
            let cost_after = engine.cost().expect("stepped");

            for (now, was) in engine.history().iter().zip(&history_before) {
                prop_assert!(now <= was);
            }
            prop_assert!(cost_after <= cost_before || cost_after < history_before[slot]);
            prop_assert!(cost_after <= initial);
            if horizon == 1 {
                prop_assert!(cost_after <= cost_before);
            }
            if outcome.improving {
                prop_assert_eq!(engine.idle_iterations(), 0);
            }
        }
    }
}
