//! Trial policy: the configuration under which an experiment runs.
//!
//! A [`TrialPolicyV1`] fully determines the generated inputs (the seed is part
//! of it), so an experiment report that echoes its policy can be reproduced
//! bit-for-bit. The echo is a canonical JSON object committed to by the
//! report digest.

use pivot_kernel::probe::ComparisonAccounting;
use pivot_kernel::proof::canon::canonical_json_bytes;
use pivot_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::error::{HarnessError, PolicyError};

/// Domain for policy echo hashing.
pub const DOMAIN_TRIAL_POLICY: HashDomain = HashDomain::TrialPolicy;

const DEFAULT_TRIALS: u64 = 20;
const DEFAULT_LENGTH: usize = 20;
const DEFAULT_VALUE_MIN: i64 = 10;
const DEFAULT_VALUE_MAX: i64 = 20;

/// How sequence elements are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceShape {
    /// Without replacement: every element unique.
    Distinct,
    /// With replacement: duplicates expected when the range is narrow.
    WithDuplicates,
}

impl SequenceShape {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distinct => "distinct",
            Self::WithDuplicates => "with_duplicates",
        }
    }
}

/// How the target is chosen for each trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPolicy {
    /// Uniformly among the sequence elements.
    Present,
    /// Uniformly among the sequence elements plus one sentinel
    /// `value_max + 1` that never occurs.
    PresentOrMiss,
}

impl TargetPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::PresentOrMiss => "present_or_miss",
        }
    }
}

/// Experiment configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialPolicyV1 {
    /// Number of trials.
    pub trials: u64,
    /// Elements per generated sequence.
    pub length: usize,
    /// Smallest value drawn (inclusive).
    pub value_min: i64,
    /// Largest value drawn (inclusive).
    pub value_max: i64,
    pub shape: SequenceShape,
    pub targets: TargetPolicy,
    /// RNG seed; same seed, same inputs.
    pub seed: u64,
    /// Comparison accounting applied to every variant.
    pub accounting: ComparisonAccounting,
}

impl Default for TrialPolicyV1 {
    /// The duplicate-heavy showdown: 20 values in `10..=20`, with misses.
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            length: DEFAULT_LENGTH,
            value_min: DEFAULT_VALUE_MIN,
            value_max: DEFAULT_VALUE_MAX,
            shape: SequenceShape::WithDuplicates,
            targets: TargetPolicy::PresentOrMiss,
            seed: 0,
            accounting: ComparisonAccounting::Evaluated,
        }
    }
}

impl TrialPolicyV1 {
    /// Duplicate-heavy inputs (same as `Default`).
    #[must_use]
    pub fn duplicates_preset() -> Self {
        Self::default()
    }

    /// Unique values drawn from `-100..=99`, targets always present.
    #[must_use]
    pub fn distinct_preset() -> Self {
        Self {
            value_min: -100,
            value_max: 99,
            shape: SequenceShape::Distinct,
            targets: TargetPolicy::Present,
            ..Self::default()
        }
    }

    /// Number of values in `value_min..=value_max`.
    #[must_use]
    pub fn range_len(&self) -> u128 {
        let span = i128::from(self.value_max) - i128::from(self.value_min) + 1;
        u128::try_from(span).unwrap_or(0)
    }

    /// Pre-flight checks.
    ///
    /// # Errors
    ///
    /// Returns the first [`PolicyError`] found.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.trials == 0 {
            return Err(PolicyError::NoTrials);
        }
        if self.length == 0 {
            return Err(PolicyError::EmptySequence);
        }
        if self.value_min > self.value_max {
            return Err(PolicyError::InvertedRange {
                value_min: self.value_min,
                value_max: self.value_max,
            });
        }
        if self.shape == SequenceShape::Distinct {
            let range_len = self.range_len();
            if usize::try_from(range_len).is_err() {
                return Err(PolicyError::RangeTooWide { range_len });
            }
            if range_len < self.length as u128 {
                return Err(PolicyError::RangeTooNarrow {
                    range_len,
                    length: self.length,
                });
            }
        }
        if self.targets == TargetPolicy::PresentOrMiss && self.value_max == i64::MAX {
            return Err(PolicyError::MissSentinelOverflow);
        }
        Ok(())
    }

    /// JSON echo embedded in reports.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "accounting": self.accounting.as_str(),
            "length": self.length,
            "schema_version": "trial_policy.v1",
            "seed": self.seed,
            "shape": self.shape.as_str(),
            "targets": self.targets.as_str(),
            "trials": self.trials,
            "value_max": self.value_max,
            "value_min": self.value_min,
        })
    }

    /// Content hash of the canonical policy echo.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::CanonFailed`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, HarnessError> {
        let bytes = canonical_json_bytes(&self.to_json()).map_err(|e| HarnessError::CanonFailed {
            detail: e.to_string(),
        })?;
        Ok(canonical_hash(DOMAIN_TRIAL_POLICY, &bytes))
    }
}
