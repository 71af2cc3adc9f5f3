//! Search windows: the candidate range a variant narrows on each iteration.
//!
//! Two conventions exist. Half-open windows `[lo, hi)` are empty when
//! `lo == hi`. Closed windows `[lo, hi]` always hold at least one index while
//! they exist; an exhausted closed window is represented by the caller
//! leaving its loop, never by `lo > hi` in unsigned arithmetic.

use std::ops::Range;

/// Which end of the window is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowConvention {
    /// `[lo, hi)`: `hi` excluded.
    HalfOpen,
    /// `[lo, hi]`: both ends included.
    Closed,
}

impl WindowConvention {
    /// Stable lowercase name used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HalfOpen => "half_open",
            Self::Closed => "closed",
        }
    }
}

/// Rounding applied when the window length is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Midpoint {
    /// `⌊(lo + hi) / 2⌋`.
    Floor,
    /// `⌈(lo + hi) / 2⌉`.
    Ceiling,
}

/// The current candidate range of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchWindow {
    /// Lowest candidate index.
    pub lo: usize,
    /// Upper bound; excluded or included depending on `convention`.
    pub hi: usize,
    /// Bound convention.
    pub convention: WindowConvention,
}

impl SearchWindow {
    /// The full extent of an `n`-element sequence as `[0, n)`.
    #[must_use]
    pub const fn half_open(n: usize) -> Self {
        Self {
            lo: 0,
            hi: n,
            convention: WindowConvention::HalfOpen,
        }
    }

    /// The full extent of an `n`-element sequence as `[0, n - 1]`.
    ///
    /// Returns `None` for an empty sequence: a closed window cannot be seeded.
    #[must_use]
    pub const fn closed(n: usize) -> Option<Self> {
        if n == 0 {
            return None;
        }
        Some(Self {
            lo: 0,
            hi: n - 1,
            convention: WindowConvention::Closed,
        })
    }

    /// Build a window from explicit bounds.
    #[must_use]
    pub const fn new(lo: usize, hi: usize, convention: WindowConvention) -> Self {
        Self { lo, hi, convention }
    }

    /// Number of candidate indices in the window.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self.convention {
            WindowConvention::HalfOpen => self.hi.saturating_sub(self.lo),
            WindowConvention::Closed => {
                if self.hi < self.lo {
                    0
                } else {
                    self.hi - self.lo + 1
                }
            }
        }
    }

    /// Whether no candidate index remains.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `index` is a candidate.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        match self.convention {
            WindowConvention::HalfOpen => self.lo <= index && index < self.hi,
            WindowConvention::Closed => self.lo <= index && index <= self.hi,
        }
    }

    /// The candidate indices as a half-open `Range`.
    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        match self.convention {
            WindowConvention::HalfOpen => self.lo..self.hi,
            WindowConvention::Closed => self.lo..self.hi + 1,
        }
    }

    /// The midpoint between `lo` and `hi` with the given rounding.
    ///
    /// Computed as `lo + (hi - lo) / 2` (or its ceiling) so it never
    /// overflows. Callers only ask for a midpoint of a non-empty window.
    #[must_use]
    pub const fn midpoint(&self, rounding: Midpoint) -> usize {
        let span = self.hi - self.lo;
        match rounding {
            Midpoint::Floor => self.lo + span / 2,
            Midpoint::Ceiling => self.lo + span.div_ceil(2),
        }
    }
}

impl std::fmt::Display for SearchWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.convention {
            WindowConvention::HalfOpen => write!(f, "[{}, {})", self.lo, self.hi),
            WindowConvention::Closed => write!(f, "[{}, {}]", self.lo, self.hi),
        }
    }
}
