//! Error type shared by grid construction, path building and the solvers.
//!
//! The solver entry points treat [`CranesError::EmptyGrid`],
//! [`CranesError::StepBudgetExceeded`] and [`CranesError::UnreachableOrigin`]
//! as fatal precondition failures and panic with the error's message. The
//! `try_*` variants return them instead.

use thiserror::Error;

use crate::path::StepDirection;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CranesError {
    #[error("grid must be non-empty (got {rows}x{columns})")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("exhaustive search supports at most {limit} steps, grid needs {steps}")]
    StepBudgetExceeded { steps: usize, limit: usize },

    #[error("origin cell is unreachable; the grid origin must not be a building")]
    UnreachableOrigin,

    #[error("step {direction} from ({row}, {column}) leaves the grid or enters a building")]
    InvalidStep {
        direction: StepDirection,
        row: usize,
        column: usize,
    },

    #[error("unknown cell character {found:?} at line {line}, column {column}")]
    UnknownCell {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, CranesError>;
