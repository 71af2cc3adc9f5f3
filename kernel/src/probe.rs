//! Instrumentation handle passed through a search call.
//!
//! A [`Probe`] accumulates [`SearchStats`] and forwards trace events to an
//! optional sink. Variants drive it at fixed points of their loops; it never
//! feeds anything back into control flow, so results are identical with or
//! without instrumentation attached.

use crate::stats::SearchStats;
use crate::trace::{SettleView, StepView, TraceSink};
use crate::window::SearchWindow;

/// How comparisons are charged when an equality test resolves an iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComparisonAccounting {
    /// Count only the tests actually evaluated. An iteration that finds the
    /// target costs one comparison (the equality test).
    #[default]
    Evaluated,
    /// Also charge the greater-than test on the iteration whose equality test
    /// already resolved the search, so every point-search iteration costs two.
    Charged,
}

impl ComparisonAccounting {
    /// Stable lowercase name used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Evaluated => "evaluated",
            Self::Charged => "charged",
        }
    }
}

/// Per-call instrumentation: counters plus an optional trace sink.
pub struct Probe<'s, T> {
    stats: SearchStats,
    accounting: ComparisonAccounting,
    sink: Option<&'s mut dyn TraceSink<T>>,
}

impl<'s, T> Probe<'s, T> {
    /// Counters only, `Evaluated` accounting.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stats: SearchStats::default(),
            accounting: ComparisonAccounting::Evaluated,
            sink: None,
        }
    }

    /// Counters plus a trace sink.
    #[must_use]
    pub fn with_sink(sink: &'s mut dyn TraceSink<T>) -> Self {
        Self {
            sink: Some(sink),
            ..Self::new()
        }
    }

    /// Select the comparison accounting.
    #[must_use]
    pub fn accounting(mut self, accounting: ComparisonAccounting) -> Self {
        self.accounting = accounting;
        self
    }

    /// Record one loop-body execution and report it to the sink.
    pub fn step(&mut self, label: &'static str, window: SearchWindow, mid: usize, seq: &[T]) {
        self.stats.iterations += 1;
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.on_step(&StepView {
                label,
                window,
                mid,
                seq,
            });
        }
    }

    /// Charge one element-to-target test and pass its result through.
    pub fn compare(&mut self, result: bool) -> bool {
        self.stats.comparisons += 1;
        result
    }

    /// An equality test just resolved the iteration. Under `Charged`
    /// accounting the skipped greater-than test is billed anyway.
    pub fn resolved_by_equality(&mut self) {
        if self.accounting == ComparisonAccounting::Charged {
            self.stats.comparisons += 1;
        }
    }

    /// Report the terminating window to the sink.
    pub fn settle(&mut self, label: &'static str, window: SearchWindow, seq: &[T]) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.on_settle(&SettleView { label, window, seq });
        }
    }

    /// Counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl<T> Default for Probe<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Probe<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Probe")
            .field("stats", &self.stats)
            .field("accounting", &self.accounting)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
