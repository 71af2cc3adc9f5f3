//! Closed-window binary search ("Wikipedia" style).
//!
//! The window `[lo, hi]` is seeded as `[0, n - 1]` and the loop runs while
//! `lo <= hi`. In unsigned arithmetic the crossing `hi = mid - 1 < lo` (or
//! `lo = mid + 1 > hi`) is detected before it happens and ends the loop.
//!
//! On duplicate-free input this agrees with [`crate::standard`] on presence
//! and on the index, but its iteration and comparison counts can differ.

use pivot_kernel::invariant::occurrence_within;
use pivot_kernel::outcome::SearchOutcome;
use pivot_kernel::probe::Probe;
use pivot_kernel::window::{Midpoint, SearchWindow, WindowConvention};

/// Trace label.
pub const LABEL: &str = "classic";

/// Search `seq` for `target` without instrumentation.
#[must_use]
pub fn search<T: Ord>(seq: &[T], target: &T) -> SearchOutcome {
    search_with(seq, target, &mut Probe::new())
}

/// Search `seq` for `target`, reporting to `probe`.
///
/// An exhausted window is reported to the sink as the empty half-open window
/// at the crossing index.
pub fn search_with<T: Ord>(seq: &[T], target: &T, probe: &mut Probe<'_, T>) -> SearchOutcome {
    let Some(mut window) = SearchWindow::closed(seq.len()) else {
        return SearchOutcome::NotFound;
    };

    loop {
        debug_assert!(
            occurrence_within(seq, target, &window),
            "classic: target escaped window {window}"
        );
        let mid = window.midpoint(Midpoint::Floor);
        probe.step(LABEL, window, mid, seq);

        if probe.compare(seq[mid] == *target) {
            probe.resolved_by_equality();
            probe.settle(LABEL, window, seq);
            return SearchOutcome::Found(mid);
        }

        if probe.compare(seq[mid] > *target) {
            if mid == window.lo {
                return exhausted(probe, window.lo, seq);
            }
            window.hi = mid - 1;
        } else {
            if mid == window.hi {
                return exhausted(probe, mid + 1, seq);
            }
            window.lo = mid + 1;
        }
    }
}

fn exhausted<T>(probe: &mut Probe<'_, T>, at: usize, seq: &[T]) -> SearchOutcome {
    probe.settle(LABEL, SearchWindow::new(at, at, WindowConvention::HalfOpen), seq);
    SearchOutcome::NotFound
}
