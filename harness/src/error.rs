//! Typed harness errors.
//!
//! Every error here is a pre-flight failure: nothing has been searched yet.
//! Disagreement between variants is never an error; it is reported as
//! [`crate::classify::AgreementVerdict::Disagree`].

/// Invalid trial policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// `trials` was zero.
    NoTrials,
    /// `length` was zero.
    EmptySequence,
    /// `value_min > value_max`.
    InvertedRange { value_min: i64, value_max: i64 },
    /// Distinct sampling needs at least `length` values in range.
    RangeTooNarrow { range_len: u128, length: usize },
    /// The value range does not fit in `usize` for distinct sampling.
    RangeTooWide { range_len: u128 },
    /// The miss sentinel `value_max + 1` would overflow.
    MissSentinelOverflow,
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTrials => f.write_str("trial policy requests zero trials"),
            Self::EmptySequence => f.write_str("trial policy requests zero-length sequences"),
            Self::InvertedRange {
                value_min,
                value_max,
            } => write!(f, "value range is inverted: {value_min} > {value_max}"),
            Self::RangeTooNarrow { range_len, length } => write!(
                f,
                "cannot draw {length} distinct values from a range of {range_len}"
            ),
            Self::RangeTooWide { range_len } => {
                write!(f, "value range of {range_len} is too wide for distinct sampling")
            }
            Self::MissSentinelOverflow => {
                f.write_str("miss sentinel value_max + 1 overflows i64")
            }
        }
    }
}

impl std::error::Error for PolicyError {}

/// Error during a comparison or experiment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// A comparison needs at least two variants.
    TooFewVariants { given: usize },
    /// The trial policy failed validation.
    Policy(PolicyError),
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewVariants { given } => {
                write!(f, "comparison needs at least two variants, got {given}")
            }
            Self::Policy(e) => write!(f, "invalid trial policy: {e}"),
            Self::CanonFailed { detail } => write!(f, "canonical JSON failed: {detail}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Policy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PolicyError> for HarnessError {
    fn from(e: PolicyError) -> Self {
        Self::Policy(e)
    }
}
