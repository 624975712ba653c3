mod common;

use common::{grid_strategy, running_totals};
use cranes_dp::{Algorithm, Grid, Path};
use proptest::prelude::*;

fn check(grid: &Grid, path: &Path<'_>) -> Result<(), TestCaseError> {
    let totals = running_totals(grid, path.steps());
    prop_assert!(totals.is_some(), "invalid prefix in {:?}", path.steps());
    let totals = totals.unwrap();
    prop_assert!(totals.windows(2).all(|w| w[1] == w[0] || w[1] == w[0] + 1));
    prop_assert_eq!(*totals.last().unwrap(), path.total_cranes());

    let south = path
        .steps()
        .iter()
        .filter(|s| **s == cranes_dp::StepDirection::South)
        .count();
    prop_assert_eq!(path.position(), (south, path.len() - south));
    Ok(())
}

proptest! {
    #[test]
    fn exhaustive_paths_are_valid(grid in grid_strategy(5)) {
        check(&grid, &Algorithm::Exhaustive.solve(&grid))?;
    }

    #[test]
    fn dyn_prog_paths_are_valid(grid in grid_strategy(12)) {
        check(&grid, &Algorithm::DynProg.solve(&grid))?;
    }

    #[test]
    fn replaying_steps_reproduces_the_path(grid in grid_strategy(12)) {
        let path = Algorithm::DynProg.solve(&grid);
        let replayed = Path::from_steps(&grid, path.steps()).unwrap();
        prop_assert_eq!(&replayed, &path);
        prop_assert_eq!(replayed.total_cranes(), path.total_cranes());
    }
}
