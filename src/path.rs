//! Monotone paths through a [`Grid`].
//!
//! A [`Path`] starts at the origin and grows one validated step at a time.
//! Every prefix of its step sequence lands on an in-bounds, non-building
//! cell, and its position is always `(#south, #east)`.

use std::fmt;

use crate::error::{CranesError, Result};
use crate::grid::{Cell, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    South,
    East,
}

impl StepDirection {
    /// Decode one bit of an enumeration counter: `0 -> South`, `1 -> East`.
    ///
    /// Only the lowest bit is inspected.
    #[inline]
    pub const fn from_bit(bit: u64) -> Self {
        if bit & 1 == 1 {
            StepDirection::East
        } else {
            StepDirection::South
        }
    }

    /// `(d_row, d_column)` of one step.
    #[inline]
    pub const fn offset(self) -> (usize, usize) {
        match self {
            StepDirection::South => (1, 0),
            StepDirection::East => (0, 1),
        }
    }
}

impl fmt::Display for StepDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepDirection::South => "south",
            StepDirection::East => "east",
        })
    }
}

/// A step sequence anchored to a grid.
#[derive(Debug, Clone)]
pub struct Path<'g> {
    grid: &'g Grid,
    row: usize,
    column: usize,
    steps: Vec<StepDirection>,
    total_cranes: usize,
}

impl<'g> Path<'g> {
    /// Empty path at the origin.
    ///
    /// The origin's classification counts towards [`total_cranes`](Self::total_cranes).
    ///
    /// # Panics
    /// Panics if the grid is empty.
    pub fn new(grid: &'g Grid) -> Self {
        let total_cranes = usize::from(grid.get(0, 0).is_crane());
        Self {
            grid,
            row: 0,
            column: 0,
            steps: Vec::new(),
            total_cranes,
        }
    }

    /// Rebuild a path by replaying `steps` from the origin.
    pub fn from_steps(grid: &'g Grid, steps: &[StepDirection]) -> Result<Self> {
        let mut path = Path::new(grid);
        path.steps.reserve(steps.len());
        for &direction in steps {
            path.try_add_step(direction)?;
        }
        Ok(path)
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Current `(row, column)`.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    pub fn steps(&self) -> &[StepDirection] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of crane cells visited, origin included.
    pub fn total_cranes(&self) -> usize {
        self.total_cranes
    }

    fn target(&self, direction: StepDirection) -> (usize, usize) {
        let (dr, dc) = direction.offset();
        (self.row + dr, self.column + dc)
    }

    /// Whether `direction` stays in bounds and avoids buildings.
    pub fn is_step_valid(&self, direction: StepDirection) -> bool {
        let (row, column) = self.target(direction);
        self.grid.in_bounds(row, column) && !self.grid.get(row, column).is_building()
    }

    /// Append `direction`.
    ///
    /// # Panics
    /// Panics if the step is invalid; check [`is_step_valid`](Self::is_step_valid) first.
    pub fn add_step(&mut self, direction: StepDirection) {
        if let Err(err) = self.try_add_step(direction) {
            panic!("{err}");
        }
    }

    /// Append `direction`, or report why it cannot be taken.
    pub fn try_add_step(&mut self, direction: StepDirection) -> Result<()> {
        if !self.is_step_valid(direction) {
            return Err(CranesError::InvalidStep {
                direction,
                row: self.row,
                column: self.column,
            });
        }
        let (row, column) = self.target(direction);
        self.row = row;
        self.column = column;
        self.steps.push(direction);
        if self.grid.get(row, column).is_crane() {
            self.total_cranes += 1;
        }
        Ok(())
    }

    /// Visited coordinates, origin first; `len() + 1` items.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut pos = (0usize, 0usize);
        std::iter::once(pos).chain(self.steps.iter().map(move |step| {
            let (dr, dc) = step.offset();
            pos = (pos.0 + dr, pos.1 + dc);
            pos
        }))
    }

    /// Text map of the grid with the path drawn over it.
    ///
    /// Visited empty cells become `*` and visited cranes `C`; everything else
    /// keeps its grid symbol.
    pub fn render(&self) -> String {
        let columns = self.grid.columns();
        let mut visited = vec![false; self.grid.rows() * columns];
        for (row, column) in self.cells() {
            visited[row * columns + column] = true;
        }
        let mut out = String::with_capacity((columns + 1) * self.grid.rows());
        for (row, cells) in self.grid.iter_rows().enumerate() {
            for (column, &cell) in cells.iter().enumerate() {
                let ch = match (visited[row * columns + column], cell) {
                    (true, Cell::Crane) => 'C',
                    (true, _) => '*',
                    (false, cell) => cell.symbol(),
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

/// Paths are equal when they follow the same steps over the same grid.
impl PartialEq for Path<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.grid, other.grid) && self.steps == other.steps
    }
}

impl Eq for Path<'_> {}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use StepDirection::{East, South};

    fn sample() -> Grid {
        ".c.\ncXc\n.c.".parse().unwrap()
    }

    #[test]
    fn bit_decoding_is_fixed() {
        assert_eq!(StepDirection::from_bit(0), South);
        assert_eq!(StepDirection::from_bit(1), East);
        assert_eq!(StepDirection::from_bit(0b10), South);
    }

    #[test]
    fn steps_track_position_and_cranes() {
        let grid = sample();
        let mut path = Path::new(&grid);
        assert_eq!(path.total_cranes(), 0);
        path.add_step(East);
        assert_eq!(path.position(), (0, 1));
        assert_eq!(path.total_cranes(), 1);
        path.add_step(East);
        path.add_step(South);
        path.add_step(South);
        assert_eq!(path.position(), (2, 2));
        assert_eq!(path.total_cranes(), 2);
        assert_eq!(path.steps(), &[East, East, South, South]);
    }

    #[test]
    fn buildings_and_edges_are_invalid() {
        let grid = sample();
        let mut path = Path::new(&grid);
        path.add_step(East);
        assert!(!path.is_step_valid(South));
        path.add_step(East);
        assert!(!path.is_step_valid(East));
        assert_eq!(
            path.try_add_step(East),
            Err(CranesError::InvalidStep {
                direction: East,
                row: 0,
                column: 2
            })
        );
        assert_eq!(path.len(), 2);
    }

    #[test]
    #[should_panic(expected = "enters a building")]
    fn add_step_panics_on_invalid_step() {
        let grid = sample();
        let mut path = Path::new(&grid);
        path.add_step(South);
        path.add_step(East);
    }

    #[test]
    fn origin_crane_counts() {
        let grid: Grid = "c".parse().unwrap();
        let path = Path::new(&grid);
        assert_eq!(path.total_cranes(), 1);
        assert!(path.is_empty());
    }

    #[test]
    fn from_steps_replays_or_fails() {
        let grid = sample();
        let path = Path::from_steps(&grid, &[South, South, East, East]).unwrap();
        assert_eq!(path.total_cranes(), 2);
        assert_eq!(
            path.cells().collect::<Vec<_>>(),
            vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]
        );
        assert!(Path::from_steps(&grid, &[South, East]).is_err());
    }

    #[test]
    fn render_overlays_visited_cells() {
        let grid = sample();
        let path = Path::from_steps(&grid, &[East, East, South, South]).unwrap();
        assert_eq!(path.render(), "*C*\ncXC\n.c*\n");
    }

    #[test]
    fn equality_requires_same_grid() {
        let a = sample();
        let b = sample();
        assert_eq!(Path::new(&a), Path::new(&a));
        assert_ne!(Path::new(&a), Path::new(&b));
    }
}
