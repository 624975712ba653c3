//! Dynamic program over a per-cell score table, followed by a traceback.
//!
//! `score[r][c]` is the largest crane count of any monotone path from the
//! origin to `(r, c)` that avoids buildings, or `None` if no such path
//! exists. The table is filled row-major so both predecessors are final
//! before a cell is visited.
//!
//! The answer is the reachable cell with the highest score, which is not
//! necessarily the bottom-right corner. Ties go to the first cell in
//! row-major order. The step sequence is recovered by walking back from that
//! cell towards the neighbour with the higher score, preferring the left
//! neighbour on ties, then replaying the reversed steps from the origin.

use crate::error::{CranesError, Result};
use crate::grid::Grid;
use crate::path::{Path, StepDirection};

pub fn solve(grid: &Grid) -> Result<Path<'_>> {
    if grid.is_empty() {
        return Err(CranesError::EmptyGrid {
            rows: grid.rows(),
            columns: grid.columns(),
        });
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("dyn_prog", rows = grid.rows(), columns = grid.columns());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let table = ScoreTable::fill(grid);
    // Nothing is reachable once the origin is not.
    let (end, best_score) = table.best_cell().ok_or(CranesError::UnreachableOrigin)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(?end, cranes = best_score, "best endpoint selected");

    let steps = table.traceback(end);
    let path = Path::from_steps(grid, &steps)?;
    assert_eq!(
        path.total_cranes(),
        best_score as usize,
        "traceback from {end:?} does not reproduce the table score"
    );
    Ok(path)
}

/// Row-major table of best scores; `None` marks unreachable cells.
#[derive(Debug, Clone)]
pub(crate) struct ScoreTable {
    columns: usize,
    scores: Vec<Option<u32>>,
}

impl ScoreTable {
    pub(crate) fn fill(grid: &Grid) -> Self {
        let rows = grid.rows();
        let columns = grid.columns();
        let mut table = Self {
            columns,
            scores: vec![None; rows * columns],
        };

        for r in 0..rows {
            for c in 0..columns {
                let cell = grid.get(r, c);
                if cell.is_building() {
                    continue;
                }
                let gain = u32::from(cell.is_crane());
                let best = if r == 0 && c == 0 {
                    Some(gain)
                } else {
                    let from_above = if r > 0 { table.get(r - 1, c) } else { None };
                    let from_left = if c > 0 { table.get(r, c - 1) } else { None };
                    match (from_above, from_left) {
                        // Equal scores keep `from_above`.
                        (Some(above), Some(left)) => Some(if left > above { left } else { above }),
                        (Some(score), None) | (None, Some(score)) => Some(score),
                        (None, None) => None,
                    }
                    .map(|score| score + gain)
                };
                table.scores[r * columns + c] = best;
            }
        }
        table
    }

    #[inline]
    pub(crate) fn get(&self, r: usize, c: usize) -> Option<u32> {
        self.scores[r * self.columns + c]
    }

    /// First reachable cell in row-major order holding the maximum score.
    pub(crate) fn best_cell(&self) -> Option<((usize, usize), u32)> {
        let mut best: Option<(usize, u32)> = None;
        for (idx, score) in self.scores.iter().enumerate() {
            let Some(score) = *score else { continue };
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((idx, score));
            }
        }
        best.map(|(idx, score)| ((idx / self.columns, idx % self.columns), score))
    }

    /// Steps from the origin to `end`, in forward order.
    pub(crate) fn traceback(&self, end: (usize, usize)) -> Vec<StepDirection> {
        let (mut r, mut c) = end;
        debug_assert!(self.get(r, c).is_some(), "traceback from unreachable cell");
        let mut trace = Vec::with_capacity(r + c);

        while (r, c) != (0, 0) {
            let left = if c > 0 { self.get(r, c - 1) } else { None };
            let above = if r > 0 { self.get(r - 1, c) } else { None };
            debug_assert!(left.is_some() || above.is_some());
            // `None` orders below every score.
            if left.is_some() && left >= above {
                trace.push(StepDirection::East);
                c -= 1;
            } else {
                trace.push(StepDirection::South);
                r -= 1;
            }
        }

        trace.reverse();
        trace
    }
}
