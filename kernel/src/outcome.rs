//! Point-search outcome.

/// Result of a point search.
///
/// `Found(i)` names *some* index holding an element equal to the target.
/// With duplicates, which one is variant-dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SearchOutcome {
    /// An index whose element equals the target.
    Found(usize),
    /// The target does not occur in the sequence.
    NotFound,
}

impl SearchOutcome {
    /// The found index, if any.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Found(i) => Some(i),
            Self::NotFound => None,
        }
    }

    /// Whether the search reported presence.
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The element referenced by a `Found` outcome.
    ///
    /// Returns `None` for `NotFound` or an index outside `seq`.
    #[must_use]
    pub fn value_in<T>(self, seq: &[T]) -> Option<&T> {
        self.index().and_then(|i| seq.get(i))
    }

    /// JSON form used in reports: `{"type":"found","index":i}` or
    /// `{"type":"not_found"}`.
    #[must_use]
    pub fn to_json(self) -> serde_json::Value {
        match self {
            Self::Found(index) => serde_json::json!({"index": index, "type": "found"}),
            Self::NotFound => serde_json::json!({"type": "not_found"}),
        }
    }
}

impl From<Option<usize>> for SearchOutcome {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Self::NotFound, Self::Found)
    }
}

/// Renders like the reference experiment table: the index, or `-1`.
impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found(i) => write!(f, "{i}"),
            Self::NotFound => f.write_str("-1"),
        }
    }
}
