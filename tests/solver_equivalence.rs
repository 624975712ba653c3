mod common;

use common::grid_strategy;
use cranes_dp::{crane_unloading_dyn_prog, crane_unloading_exhaustive, Algorithm};
use proptest::prelude::*;

proptest! {
    #[test]
    fn dyn_prog_matches_exhaustive_score(grid in grid_strategy(6)) {
        let fast = crane_unloading_dyn_prog(&grid);
        let slow = crane_unloading_exhaustive(&grid);
        prop_assert_eq!(fast.total_cranes(), slow.total_cranes());
    }

    #[test]
    fn repeated_solves_are_identical(grid in grid_strategy(6)) {
        for algorithm in Algorithm::ALL {
            let first = algorithm.solve(&grid);
            let second = algorithm.solve(&grid);
            prop_assert_eq!(first.steps(), second.steps());
            prop_assert_eq!(first.total_cranes(), second.total_cranes());
        }
    }

    #[test]
    fn score_never_exceeds_crane_count(grid in grid_strategy(6)) {
        let path = crane_unloading_dyn_prog(&grid);
        prop_assert!(path.total_cranes() <= grid.crane_count());
    }
}
