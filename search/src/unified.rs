//! Ceiling-midpoint binary search with a single equality test ("Bottenbruch").
//!
//! The closed window `[lo, hi]` shrinks with one relational test per
//! iteration until `lo == hi`; only then is the remaining element tested for
//! equality. The search is a two-state machine:
//!
//! ```text
//! Searching([lo, hi]) --lo == hi--> Converged(lo) --eq test--> outcome
//! ```
//!
//! The midpoint must round up. The low branch sets `lo = mid` without
//! touching `hi`, so with a floor midpoint a two-element window `[k, k + 1]`
//! yields `mid == k` and never shrinks.
//!
//! Invariant: if `target` occurs in `seq`, its last occurrence lies in
//! `[lo, hi]`. A present target is therefore always found at its last
//! occurrence.

use pivot_kernel::invariant::last_occurrence_within;
use pivot_kernel::outcome::SearchOutcome;
use pivot_kernel::probe::Probe;
use pivot_kernel::window::{Midpoint, SearchWindow, WindowConvention};

/// Trace label.
pub const LABEL: &str = "unified";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Searching(SearchWindow),
    Converged(usize),
}

/// Search `seq` for `target` without instrumentation.
#[must_use]
pub fn search<T: Ord>(seq: &[T], target: &T) -> SearchOutcome {
    search_with(seq, target, &mut Probe::new())
}

/// Search `seq` for `target`, reporting to `probe`.
///
/// Charges one greater-than test per iteration plus exactly one equality
/// test after convergence. An empty sequence costs nothing.
pub fn search_with<T: Ord>(seq: &[T], target: &T, probe: &mut Probe<'_, T>) -> SearchOutcome {
    let Some(seed) = SearchWindow::closed(seq.len()) else {
        return SearchOutcome::NotFound;
    };
    let mut phase = Phase::Searching(seed);

    loop {
        phase = match phase {
            Phase::Searching(window) if window.lo == window.hi => Phase::Converged(window.lo),
            Phase::Searching(mut window) => {
                debug_assert!(
                    last_occurrence_within(seq, target, &window),
                    "unified: target escaped window {window}"
                );
                let mid = window.midpoint(Midpoint::Ceiling);
                probe.step(LABEL, window, mid, seq);

                if probe.compare(seq[mid] > *target) {
                    // mid > lo, so this cannot underflow.
                    window.hi = mid - 1;
                } else {
                    window.lo = mid;
                }
                Phase::Searching(window)
            }
            Phase::Converged(index) => {
                let settled = SearchWindow::new(index, index, WindowConvention::Closed);
                probe.settle(LABEL, settled, seq);
                return if probe.compare(seq[index] == *target) {
                    SearchOutcome::Found(index)
                } else {
                    SearchOutcome::NotFound
                };
            }
        };
    }
}
