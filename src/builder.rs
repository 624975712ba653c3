//! Seeded random grid generation.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::grid::{Cell, Grid};

/// Builder for random grids with a guaranteed-open origin.
///
/// ```
/// use cranes_dp::builder::GridBuilder;
///
/// let grid = GridBuilder::new(4, 5).with_seed(7).with_crane_density(0.5).build();
/// assert_eq!((grid.rows(), grid.columns()), (4, 5));
/// assert!(!grid.get(0, 0).is_building());
/// ```
#[derive(Debug, Clone)]
pub struct GridBuilder {
    rows: usize,
    columns: usize,
    seed: u64,
    building_density: f64,
    crane_density: f64,
}

impl GridBuilder {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            seed: 0,
            building_density: 0.2,
            crane_density: 0.2,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Probability that a non-origin cell is a building.
    pub fn with_building_density(mut self, density: f64) -> Self {
        self.building_density = density;
        self
    }

    /// Probability that a non-building, non-origin cell is a crane.
    pub fn with_crane_density(mut self, density: f64) -> Self {
        self.crane_density = density;
        self
    }

    /// # Panics
    /// Panics if either density lies outside `[0, 1]`.
    pub fn build(self) -> Grid {
        assert!(
            (0.0..=1.0).contains(&self.building_density),
            "building density must be within [0, 1]"
        );
        assert!(
            (0.0..=1.0).contains(&self.crane_density),
            "crane density must be within [0, 1]"
        );

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut grid = Grid::new(self.rows, self.columns);
        for row in 0..self.rows {
            for column in 0..self.columns {
                if row == 0 && column == 0 {
                    continue;
                }
                let cell = if rng.gen_bool(self.building_density) {
                    Cell::Building
                } else if rng.gen_bool(self.crane_density) {
                    Cell::Crane
                } else {
                    Cell::Empty
                };
                grid.set(row, column, cell);
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_grid() {
        let a = GridBuilder::new(6, 7).with_seed(99).build();
        let b = GridBuilder::new(6, 7).with_seed(99).build();
        assert_eq!(a, b);
    }

    #[test]
    fn extreme_densities() {
        let walls = GridBuilder::new(3, 3).with_building_density(1.0).build();
        assert_eq!(walls.get(0, 0), Cell::Empty);
        assert_eq!(walls.building_count(), 8);

        let cranes = GridBuilder::new(3, 3)
            .with_building_density(0.0)
            .with_crane_density(1.0)
            .build();
        assert_eq!(cranes.crane_count(), 8);
    }

    #[test]
    #[should_panic]
    fn density_out_of_range_panics() {
        let _ = GridBuilder::new(2, 2).with_crane_density(1.5).build();
    }
}
