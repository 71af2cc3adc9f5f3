//! Per-call search counters.

/// Work performed by one search call.
///
/// Both counters only grow during a call. `comparisons` counts every
/// element-to-target relational test charged under the active
/// [`crate::probe::ComparisonAccounting`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SearchStats {
    /// Loop body executions.
    pub iterations: u64,
    /// Element-to-target tests, including equality tests.
    pub comparisons: u64,
}

impl SearchStats {
    /// JSON form used in reports.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "comparisons": self.comparisons,
            "iterations": self.iterations,
        })
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "iter={} cmp={}", self.iterations, self.comparisons)
    }
}
