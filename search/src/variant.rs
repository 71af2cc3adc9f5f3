//! Name-based dispatch over every variant, plus the instrumentation wrapper.
//!
//! Boundary variants are adapted to [`SearchOutcome`] by applying the
//! caller-side presence check, so they can sit next to the point searches in
//! a comparison. The presence check is not charged to [`SearchStats`].

use std::str::FromStr;

use pivot_kernel::outcome::SearchOutcome;
use pivot_kernel::probe::{ComparisonAccounting, Probe};
use pivot_kernel::stats::SearchStats;
use pivot_kernel::window::{Midpoint, WindowConvention};

use crate::{boundary, classic, standard, unified};

/// Every search variant in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// [`crate::standard`].
    Standard,
    /// [`crate::classic`].
    Classic,
    /// [`crate::unified`].
    Unified,
    /// [`crate::boundary::leftmost`], presence-checked.
    Leftmost,
    /// [`crate::boundary::rightmost`], presence-checked.
    Rightmost,
}

/// Point or boundary family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantFamily {
    /// Returns any matching index or `NotFound`.
    Point,
    /// Returns a position; presence checked afterwards.
    Boundary,
}

/// Outcome and counters of one instrumented call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measured {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl Variant {
    /// The three point-search variants, in report order.
    pub const POINT: [Variant; 3] = [Self::Standard, Self::Classic, Self::Unified];

    /// All variants, in report order.
    pub const ALL: [Variant; 5] = [
        Self::Standard,
        Self::Classic,
        Self::Unified,
        Self::Leftmost,
        Self::Rightmost,
    ];

    /// Stable lowercase name used in reports, traces, and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => standard::LABEL,
            Self::Classic => classic::LABEL,
            Self::Unified => unified::LABEL,
            Self::Leftmost => boundary::LEFTMOST_LABEL,
            Self::Rightmost => boundary::RIGHTMOST_LABEL,
        }
    }

    #[must_use]
    pub const fn family(self) -> VariantFamily {
        match self {
            Self::Standard | Self::Classic | Self::Unified => VariantFamily::Point,
            Self::Leftmost | Self::Rightmost => VariantFamily::Boundary,
        }
    }

    /// Window convention the variant iterates with.
    #[must_use]
    pub const fn convention(self) -> WindowConvention {
        match self {
            Self::Classic | Self::Unified => WindowConvention::Closed,
            Self::Standard | Self::Leftmost | Self::Rightmost => WindowConvention::HalfOpen,
        }
    }

    #[must_use]
    pub const fn midpoint(self) -> Midpoint {
        match self {
            Self::Unified => Midpoint::Ceiling,
            _ => Midpoint::Floor,
        }
    }

    /// Run without instrumentation.
    #[must_use]
    pub fn search<T: Ord>(self, seq: &[T], target: &T) -> SearchOutcome {
        self.search_with(seq, target, &mut Probe::new())
    }

    /// Run, reporting to `probe`.
    pub fn search_with<T: Ord>(
        self,
        seq: &[T],
        target: &T,
        probe: &mut Probe<'_, T>,
    ) -> SearchOutcome {
        match self {
            Self::Standard => standard::search_with(seq, target, probe),
            Self::Classic => classic::search_with(seq, target, probe),
            Self::Unified => unified::search_with(seq, target, probe),
            Self::Leftmost => {
                let idx = boundary::leftmost_with(seq, target, probe);
                SearchOutcome::from((idx < seq.len() && seq[idx] == *target).then_some(idx))
            }
            Self::Rightmost => {
                let idx = boundary::rightmost_with(seq, target, probe);
                SearchOutcome::from(idx.filter(|&i| seq[i] == *target))
            }
        }
    }

    /// Run with counters only and return `(outcome, stats)`.
    #[must_use]
    pub fn measure<T: Ord>(
        self,
        seq: &[T],
        target: &T,
        accounting: ComparisonAccounting,
    ) -> Measured {
        let mut probe = Probe::new().accounting(accounting);
        let outcome = self.search_with(seq, target, &mut probe);
        Measured {
            outcome,
            stats: probe.stats(),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown variant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError {
    pub name: String,
}

impl std::fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown search variant: {}", self.name)
    }
}

impl std::error::Error for ParseVariantError {}

impl FromStr for Variant {
    type Err = ParseVariantError;

    /// Accepts the stable names plus the historical aliases `binary`,
    /// `wikipedia`, and `bottenbruch`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "binary" => Ok(Self::Standard),
            "classic" | "wikipedia" => Ok(Self::Classic),
            "unified" | "bottenbruch" => Ok(Self::Unified),
            "leftmost" => Ok(Self::Leftmost),
            "rightmost" => Ok(Self::Rightmost),
            _ => Err(ParseVariantError {
                name: s.to_string(),
            }),
        }
    }
}
