//! The unloading site: a rectangular map of empty, building and crane cells.
//!
//! Grids are read-only during a solve. They can be built cell by cell, from
//! nested rows, from a seeded [`GridBuilder`](crate::builder::GridBuilder),
//! or parsed from a text map:
//!
//! ```
//! use cranes_dp::grid::{Cell, Grid};
//!
//! let grid: Grid = "\
//!     .c.
//!     cXc
//!     .c.
//! ".parse().unwrap();
//! assert_eq!((grid.rows(), grid.columns()), (3, 3));
//! assert_eq!(grid.get(1, 1), Cell::Building);
//! assert_eq!(grid.crane_count(), 4);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{CranesError, Result};

/// Classification of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Impassable.
    Building,
    /// Worth one point when a path visits it.
    Crane,
}

impl Cell {
    /// Character used by the text map format.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Building => 'X',
            Cell::Crane => 'c',
        }
    }

    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::Building),
            'c' => Some(Cell::Crane),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_building(self) -> bool {
        matches!(self, Cell::Building)
    }

    #[inline]
    pub const fn is_crane(self) -> bool {
        matches!(self, Cell::Crane)
    }
}

/// Rectangular grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-empty grid. Zero dimensions are allowed; the solvers reject them.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    /// Build a grid from nested rows.
    ///
    /// Every row must have the length of the first one.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * columns);
        for (row, line) in rows.iter().enumerate() {
            if line.len() != columns {
                return Err(CranesError::RaggedRow {
                    row,
                    expected: columns,
                    found: line.len(),
                });
            }
            cells.extend_from_slice(line);
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Classification of cell (`row`, `column`).
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Cell {
        assert!(
            self.in_bounds(row, column),
            "cell ({row}, {column}) outside {}x{} grid",
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + column]
    }

    /// Overwrite cell (`row`, `column`).
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) {
        assert!(
            self.in_bounds(row, column),
            "cell ({row}, {column}) outside {}x{} grid",
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + column] = cell;
    }

    pub fn crane_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_crane()).count()
    }

    pub fn building_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_building()).count()
    }

    /// Iterate rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks_exact(0) panics; a zero-width grid has no cells anyway.
        self.cells.chunks_exact(self.columns.max(1))
    }
}

impl FromStr for Grid {
    type Err = CranesError;

    fn from_str(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .enumerate()
                .map(|(column, ch)| {
                    Cell::from_symbol(ch).ok_or(CranesError::UnknownCell {
                        line: line_no + 1,
                        column: column + 1,
                        found: ch,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }
        Grid::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
