//! The two crane unloading solvers and their shared entry points.
//!
//! - [`exhaustive`] : brute-force enumeration of every south/east bit pattern.
//! - [`dyn_prog`]   : score table plus traceback, O(rows · columns).
//!
//! Both take a `&Grid` and return the best [`Path`]. Their scores always
//! agree; the step sequences may differ when several paths tie.

pub mod dyn_prog;
pub mod exhaustive;

use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::grid::Grid;
use crate::path::Path;

/// Solver selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Exhaustive,
    DynProg,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Exhaustive, Algorithm::DynProg];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Exhaustive => "exhaustive",
            Algorithm::DynProg => "dyn_prog",
        }
    }

    /// Run the solver, reporting precondition failures as errors.
    pub fn try_solve(self, grid: &Grid) -> Result<Path<'_>> {
        match self {
            Algorithm::Exhaustive => exhaustive::solve(grid),
            Algorithm::DynProg => dyn_prog::solve(grid),
        }
    }

    /// Run the solver.
    ///
    /// # Panics
    /// Panics if the grid is empty, if the origin is a building
    /// ([`DynProg`](Algorithm::DynProg)), or if the grid needs more than 63
    /// steps ([`Exhaustive`](Algorithm::Exhaustive)).
    pub fn solve(self, grid: &Grid) -> Path<'_> {
        match self.try_solve(grid) {
            Ok(path) => path,
            Err(err) => panic!("{} solver: {err}", self.name()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "exhaustive" => Ok(Algorithm::Exhaustive),
            "dyn_prog" | "dp" => Ok(Algorithm::DynProg),
            other => Err(format!("unknown algorithm '{other}'")),
        }
    }
}

/// Best path found by exhaustive enumeration.
///
/// # Panics
/// Panics if the grid is empty or `(rows-1)+(columns-1) >= 64`.
pub fn crane_unloading_exhaustive(grid: &Grid) -> Path<'_> {
    Algorithm::Exhaustive.solve(grid)
}

/// Best path found by dynamic programming.
///
/// # Panics
/// Panics if the grid is empty or its origin is a building.
pub fn crane_unloading_dyn_prog(grid: &Grid) -> Path<'_> {
    Algorithm::DynProg.solve(grid)
}

pub fn try_crane_unloading_exhaustive(grid: &Grid) -> Result<Path<'_>> {
    exhaustive::solve(grid)
}

pub fn try_crane_unloading_dyn_prog(grid: &Grid) -> Result<Path<'_>> {
    dyn_prog::solve(grid)
}
