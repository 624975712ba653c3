#![allow(dead_code)]

use cranes_dp::{Cell, Grid, StepDirection};
use proptest::prelude::*;

/// Random grids up to `max x max` with a non-building origin.
pub fn grid_strategy(max: usize) -> impl Strategy<Value = Grid> {
    (1..=max, 1..=max).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(0u8..3, rows * columns).prop_map(move |codes| {
            let mut grid = Grid::new(rows, columns);
            for (idx, code) in codes.into_iter().enumerate() {
                let cell = match code {
                    0 => Cell::Empty,
                    1 => Cell::Building,
                    _ => Cell::Crane,
                };
                grid.set(idx / columns, idx % columns, cell);
            }
            if grid.get(0, 0).is_building() {
                grid.set(0, 0, Cell::Empty);
            }
            grid
        })
    })
}

/// Walk `steps` from the origin without going through `Path`.
///
/// Returns the running crane total after the origin and after every step, or
/// `None` if some prefix leaves the grid or enters a building.
pub fn running_totals(grid: &Grid, steps: &[StepDirection]) -> Option<Vec<usize>> {
    let (mut r, mut c) = (0usize, 0usize);
    let mut total = usize::from(grid.get(0, 0).is_crane());
    let mut totals = vec![total];
    for step in steps {
        match step {
            StepDirection::South => r += 1,
            StepDirection::East => c += 1,
        }
        if r >= grid.rows() || c >= grid.columns() || grid.get(r, c).is_building() {
            return None;
        }
        total += usize::from(grid.get(r, c).is_crane());
        totals.push(total);
    }
    Some(totals)
}
