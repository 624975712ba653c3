//! Step-budget helpers shared by the solvers and the timing harness.

/// Longest sequence the exhaustive solver can encode in a `u64` counter.
pub const MAX_EXHAUSTIVE_STEPS: usize = 63;

/// Number of steps on any longest monotone path: `(rows-1) + (columns-1)`.
///
/// Returns 0 when either dimension is zero.
#[inline]
pub fn step_budget(rows: usize, columns: usize) -> usize {
    if rows == 0 || columns == 0 {
        0
    } else {
        (rows - 1) + (columns - 1)
    }
}

/// Number of south/east patterns of length `steps`, i.e. `2^steps`.
///
/// # Panics
/// Panics if `steps > MAX_EXHAUSTIVE_STEPS`.
#[inline]
pub fn pattern_count(steps: usize) -> u64 {
    assert!(
        steps <= MAX_EXHAUSTIVE_STEPS,
        "{steps} steps do not fit in a u64 counter"
    );
    1u64 << steps
}
