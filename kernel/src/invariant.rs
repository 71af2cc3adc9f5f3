//! Loop invariants checked by the variants in debug builds.
//!
//! Each check scans the whole sequence, so variants call them only inside
//! `debug_assert!`. Release builds never pay for them, and an unsorted input
//! is never diagnosed in production paths.

use crate::window::SearchWindow;

/// Point-search invariant: if `target` occurs anywhere in `seq`, at least one
/// occurrence lies inside `window`.
///
/// Holds vacuously when `target` is absent.
#[must_use]
pub fn occurrence_within<T: Ord>(seq: &[T], target: &T, window: &SearchWindow) -> bool {
    let mut present = false;
    for (i, item) in seq.iter().enumerate() {
        if item == target {
            if window.contains(i) {
                return true;
            }
            present = true;
        }
    }
    !present
}

/// Convergence invariant for the single-comparison variant: if `target`
/// occurs in `seq`, its last occurrence lies inside `window`.
#[must_use]
pub fn last_occurrence_within<T: Ord>(seq: &[T], target: &T, window: &SearchWindow) -> bool {
    match seq.iter().rposition(|item| item == target) {
        Some(last) => window.contains(last),
        None => true,
    }
}

/// Boundary invariant: the answer index (an insertion point, so possibly
/// `seq.len()`) lies in `[window.lo, window.hi]` of a half-open window.
///
/// `answer` is the first index whose element fails `precedes`: for the
/// leftmost search `precedes` is `< target`, for the rightmost `<= target`.
#[must_use]
pub fn boundary_within<T, F>(seq: &[T], window: &SearchWindow, precedes: F) -> bool
where
    F: Fn(&T) -> bool,
{
    let answer = seq.iter().position(|item| !precedes(item)).unwrap_or(seq.len());
    window.lo <= answer && answer <= window.hi
}

/// Whether `seq` is non-decreasing.
///
/// Exposed for harness and test code; the search variants never call it.
#[must_use]
pub fn is_sorted<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}
