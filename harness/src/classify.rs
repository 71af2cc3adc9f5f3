//! Agreement classification across variant outcomes.

use pivot_kernel::outcome::SearchOutcome;

/// How a set of outcomes for one input relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgreementVerdict {
    /// Every variant returned the same outcome.
    AllAgree,
    /// Every variant found the target, at different indices holding equal
    /// values. Expected with duplicates.
    AgreeOnValue,
    /// Presence mismatch, or indices holding different values.
    Disagree,
}

impl AgreementVerdict {
    /// All verdicts, best first.
    pub const ALL: [AgreementVerdict; 3] = [Self::AllAgree, Self::AgreeOnValue, Self::Disagree];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllAgree => "all_agree",
            Self::AgreeOnValue => "agree_on_value",
            Self::Disagree => "disagree",
        }
    }

    /// Whether this verdict indicates a correctness bug in some variant.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Disagree)
    }
}

impl std::fmt::Display for AgreementVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `outcomes`, all produced on `seq`.
///
/// A `NotFound` next to any `Found` is always `Disagree`: duplicates can move
/// the reported index, never presence. A `Found` index outside `seq` is
/// treated as a disagreement too.
///
/// # Examples
///
/// ```
/// use pivot_harness::classify::{classify, AgreementVerdict};
/// use pivot_kernel::outcome::SearchOutcome::{Found, NotFound};
///
/// let seq = [1, 2, 2, 3];
/// assert_eq!(classify(&seq, &[Found(1), Found(2)]), AgreementVerdict::AgreeOnValue);
/// assert_eq!(classify(&seq, &[Found(1), NotFound]), AgreementVerdict::Disagree);
/// ```
#[must_use]
pub fn classify<T: Eq>(seq: &[T], outcomes: &[SearchOutcome]) -> AgreementVerdict {
    let Some((first, rest)) = outcomes.split_first() else {
        return AgreementVerdict::AllAgree;
    };
    if rest.iter().all(|o| o == first) {
        return AgreementVerdict::AllAgree;
    }
    if outcomes.iter().any(|o| !o.is_found()) {
        return AgreementVerdict::Disagree;
    }

    let Some(reference) = first.value_in(seq) else {
        return AgreementVerdict::Disagree;
    };
    if rest.iter().all(|o| o.value_in(seq) == Some(reference)) {
        AgreementVerdict::AgreeOnValue
    } else {
        AgreementVerdict::Disagree
    }
}
