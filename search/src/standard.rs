//! Half-open binary search returning any matching index.
//!
//! Invariant at loop entry: if `target` occurs in `seq`, some occurrence lies
//! in `[lo, hi)`.

use pivot_kernel::invariant::occurrence_within;
use pivot_kernel::outcome::SearchOutcome;
use pivot_kernel::probe::Probe;
use pivot_kernel::window::{Midpoint, SearchWindow};

/// Trace label.
pub const LABEL: &str = "standard";

/// Search `seq` for `target` without instrumentation.
///
/// # Examples
///
/// ```
/// use pivot_kernel::outcome::SearchOutcome;
/// use pivot_search::standard::search;
///
/// let seq = [-87, -42, -13, 0, 5, 19, 42, 77];
/// assert_eq!(search(&seq, &0), SearchOutcome::Found(3));
/// assert_eq!(search(&seq, &100), SearchOutcome::NotFound);
/// ```
#[must_use]
pub fn search<T: Ord>(seq: &[T], target: &T) -> SearchOutcome {
    search_with(seq, target, &mut Probe::new())
}

/// Search `seq` for `target`, reporting to `probe`.
///
/// Each iteration charges an equality test; iterations that do not find the
/// target also charge a greater-than test.
pub fn search_with<T: Ord>(seq: &[T], target: &T, probe: &mut Probe<'_, T>) -> SearchOutcome {
    let mut window = SearchWindow::half_open(seq.len());

    while window.lo < window.hi {
        debug_assert!(
            occurrence_within(seq, target, &window),
            "standard: target escaped window {window}"
        );
        let mid = window.midpoint(Midpoint::Floor);
        probe.step(LABEL, window, mid, seq);

        if probe.compare(seq[mid] == *target) {
            probe.resolved_by_equality();
            probe.settle(LABEL, window, seq);
            return SearchOutcome::Found(mid);
        }
        if probe.compare(seq[mid] > *target) {
            window.hi = mid;
        } else {
            window.lo = mid + 1;
        }
    }

    probe.settle(LABEL, window, seq);
    SearchOutcome::NotFound
}
