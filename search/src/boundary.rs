//! Leftmost / rightmost boundary searches for sequences with duplicates.
//!
//! Both run the half-open loop with a single relational test per iteration
//! and always return a position; whether the target is actually there is
//! for the caller to check (or use [`first_occurrence`] /
//! [`last_occurrence`], which do it for you).
//!
//! For any target: `leftmost(seq, t) <= rightmost_end(seq, t)`, and
//! `leftmost..rightmost_end` is exactly the set of indices holding `t`.

use std::ops::Range;

use pivot_kernel::invariant::boundary_within;
use pivot_kernel::probe::Probe;
use pivot_kernel::window::{Midpoint, SearchWindow};

/// Trace label for [`leftmost_with`].
pub const LEFTMOST_LABEL: &str = "leftmost";
/// Trace label for [`rightmost_end_with`].
pub const RIGHTMOST_LABEL: &str = "rightmost";

/// Smallest `i` with `seq[i] >= target`; `seq.len()` if there is none.
///
/// This is the first occurrence of `target` when present, and its insertion
/// point otherwise.
///
/// # Examples
///
/// ```
/// use pivot_search::boundary::leftmost;
///
/// let seq = [1, 1, 1, 2, 2, 3];
/// assert_eq!(leftmost(&seq, &2), 3);
/// assert_eq!(leftmost(&seq, &4), 6);
/// ```
#[must_use]
pub fn leftmost<T: Ord>(seq: &[T], target: &T) -> usize {
    leftmost_with(seq, target, &mut Probe::new())
}

/// [`leftmost`], reporting to `probe`. One `<` test per iteration.
pub fn leftmost_with<T: Ord>(seq: &[T], target: &T, probe: &mut Probe<'_, T>) -> usize {
    partition_point_with(seq, probe, LEFTMOST_LABEL, |item| item < target)
}

/// Largest `i` with `seq[i] <= target`, or `None` if every element exceeds
/// `target`.
///
/// This is the last occurrence of `target` when present. `None` plays the
/// role of the conventional `-1`.
///
/// # Examples
///
/// ```
/// use pivot_search::boundary::rightmost;
///
/// let seq = [1, 1, 1, 2, 2, 3];
/// assert_eq!(rightmost(&seq, &2), Some(4));
/// assert_eq!(rightmost(&seq, &0), None);
/// ```
#[must_use]
pub fn rightmost<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    rightmost_with(seq, target, &mut Probe::new())
}

/// [`rightmost`], reporting to `probe`.
pub fn rightmost_with<T: Ord>(seq: &[T], target: &T, probe: &mut Probe<'_, T>) -> Option<usize> {
    rightmost_end_with(seq, target, probe).checked_sub(1)
}

/// One past the last index with `seq[i] <= target` (the raw loop result).
#[must_use]
pub fn rightmost_end<T: Ord>(seq: &[T], target: &T) -> usize {
    rightmost_end_with(seq, target, &mut Probe::new())
}

/// [`rightmost_end`], reporting to `probe`. One `<=` test per iteration.
pub fn rightmost_end_with<T: Ord>(seq: &[T], target: &T, probe: &mut Probe<'_, T>) -> usize {
    partition_point_with(seq, probe, RIGHTMOST_LABEL, |item| item <= target)
}

/// First occurrence of `target`, with the presence check applied.
#[must_use]
pub fn first_occurrence<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    let idx = leftmost(seq, target);
    (idx < seq.len() && seq[idx] == *target).then_some(idx)
}

/// Last occurrence of `target`, with the presence check applied.
#[must_use]
pub fn last_occurrence<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    rightmost(seq, target).filter(|&idx| seq[idx] == *target)
}

/// All indices holding `target`. Empty (at the insertion point) when absent.
#[must_use]
pub fn equal_range<T: Ord>(seq: &[T], target: &T) -> Range<usize> {
    leftmost(seq, target)..rightmost_end(seq, target)
}

/// Shared half-open loop: first index whose element does not satisfy
/// `precedes`. `precedes` must hold on a prefix of `seq` and fail on the rest.
fn partition_point_with<T, F>(
    seq: &[T],
    probe: &mut Probe<'_, T>,
    label: &'static str,
    precedes: F,
) -> usize
where
    F: Fn(&T) -> bool,
{
    let mut window = SearchWindow::half_open(seq.len());

    while window.lo < window.hi {
        debug_assert!(
            boundary_within(seq, &window, &precedes),
            "{label}: boundary escaped window {window}"
        );
        let mid = window.midpoint(Midpoint::Floor);
        probe.step(label, window, mid, seq);

        if probe.compare(precedes(&seq[mid])) {
            window.lo = mid + 1;
        } else {
            window.hi = mid;
        }
    }

    probe.settle(label, window, seq);
    window.lo
}
