//! Exhaustive enumeration of monotone step sequences.
//!
//! Every length `L` in `0..=max_steps` and every counter in `[0, 2^L)` is
//! decoded into a step sequence, least significant bit first, with
//! [`StepDirection::from_bit`]. A sequence that hits a wall or leaves the grid
//! is discarded as a whole. The best complete sequence wins; ties keep the
//! earliest one in (length, counter) order.
//!
//! Runs in O(2^max_steps · max_steps) and is only practical for tiny grids.
//! It serves as the correctness oracle for [`dyn_prog`](super::dyn_prog).

use crate::error::{CranesError, Result};
use crate::grid::Grid;
use crate::path::{Path, StepDirection};
use crate::utils::{pattern_count, step_budget, MAX_EXHAUSTIVE_STEPS};

pub fn solve(grid: &Grid) -> Result<Path<'_>> {
    if grid.is_empty() {
        return Err(CranesError::EmptyGrid {
            rows: grid.rows(),
            columns: grid.columns(),
        });
    }
    let max_steps = step_budget(grid.rows(), grid.columns());
    if max_steps > MAX_EXHAUSTIVE_STEPS {
        return Err(CranesError::StepBudgetExceeded {
            steps: max_steps,
            limit: MAX_EXHAUSTIVE_STEPS,
        });
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!(
        "exhaustive",
        rows = grid.rows(),
        columns = grid.columns(),
        max_steps
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut best = Path::new(grid);
    for steps in 0..=max_steps {
        for counter in 0..pattern_count(steps) {
            let Some(candidate) = decode(grid, counter, steps) else {
                continue;
            };
            if candidate.total_cranes() > best.total_cranes() {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    steps,
                    counter,
                    cranes = candidate.total_cranes(),
                    "new best"
                );
                best = candidate;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        cranes = best.total_cranes(),
        end = ?best.position(),
        "exhaustive search finished"
    );

    Ok(best)
}

/// Build the path encoded by the low `steps` bits of `counter`, or `None` if
/// any step is invalid.
fn decode(grid: &Grid, counter: u64, steps: usize) -> Option<Path<'_>> {
    let mut path = Path::new(grid);
    for k in 0..steps {
        let direction = StepDirection::from_bit(counter >> k);
        if !path.is_step_valid(direction) {
            return None;
        }
        path.add_step(direction);
    }
    Some(path)
}
