//! Crane unloading: maximum-crane monotone paths through a grid.
//!
//! A grid holds empty cells, impassable buildings and cranes. Starting at the
//! top-left cell and moving only south or east, find the path that visits
//! the most cranes without entering a building. The path may stop anywhere.
//!
//! Two solvers are provided behind the same contract:
//! - [`crane_unloading_exhaustive`] enumerates every step pattern. It is
//!   exponential and intended as a reference for small grids.
//! - [`crane_unloading_dyn_prog`] fills a score table in O(rows · columns)
//!   and traces the best path back from the highest-scoring cell.
//!
//! ## Quick start
//! ```
//! use cranes_dp::{crane_unloading_dyn_prog, crane_unloading_exhaustive, Grid};
//!
//! let grid: Grid = ".c.\ncXc\n.c.".parse().unwrap();
//! let fast = crane_unloading_dyn_prog(&grid);
//! let slow = crane_unloading_exhaustive(&grid);
//! assert_eq!(fast.total_cranes(), 2);
//! assert_eq!(slow.total_cranes(), 2);
//! ```
//!
//! Enable the `tracing` feature to get spans around each solve.

pub mod builder;
pub mod error;
pub mod grid;
pub mod path;
pub mod solvers;
pub mod utils;

pub use crate::builder::GridBuilder;
pub use crate::error::{CranesError, Result};
pub use crate::grid::{Cell, Grid};
pub use crate::path::{Path, StepDirection};
pub use crate::solvers::{
    crane_unloading_dyn_prog, crane_unloading_exhaustive, try_crane_unloading_dyn_prog,
    try_crane_unloading_exhaustive, Algorithm,
};
