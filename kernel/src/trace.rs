//! Step-trace side channel.
//!
//! Variants report each loop iteration to an optional [`TraceSink`]. The sink
//! only observes: it receives borrowed views and cannot influence the search.
//! Rendering (colors, terminal output) lives in sinks supplied by the harness.

use crate::window::SearchWindow;

/// One loop iteration, reported before the midpoint element is tested.
#[derive(Debug)]
pub struct StepView<'a, T> {
    /// Stable variant name (e.g. `"standard"`).
    pub label: &'static str,
    /// Window at loop entry.
    pub window: SearchWindow,
    /// Midpoint index about to be tested.
    pub mid: usize,
    /// The full sequence being searched.
    pub seq: &'a [T],
}

/// The window a variant terminated with.
///
/// Emitted once per call, after the loop, whenever a window was seeded.
/// Closed-window variants on an empty sequence emit nothing at all.
#[derive(Debug)]
pub struct SettleView<'a, T> {
    pub label: &'static str,
    pub window: SearchWindow,
    pub seq: &'a [T],
}

/// Observer of search progress.
pub trait TraceSink<T> {
    /// Called once per iteration.
    fn on_step(&mut self, view: &StepView<'_, T>);

    /// Called once after the loop. Default: ignore.
    fn on_settle(&mut self, view: &SettleView<'_, T>) {
        let _ = view;
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl<T> TraceSink<T> for NoopSink {
    fn on_step(&mut self, _view: &StepView<'_, T>) {}
}

/// A recorded iteration: window and midpoint, without the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    pub label: &'static str,
    pub window: SearchWindow,
    pub mid: usize,
}

/// Sink that keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Iterations in order.
    pub steps: Vec<StepRecord>,
    /// Final window, if the variant seeded one.
    pub settled: Option<SearchWindow>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> TraceSink<T> for RecordingSink {
    fn on_step(&mut self, view: &StepView<'_, T>) {
        self.steps.push(StepRecord {
            label: view.label,
            window: view.window,
            mid: view.mid,
        });
    }

    fn on_settle(&mut self, view: &SettleView<'_, T>) {
        self.settled = Some(view.window);
    }
}
