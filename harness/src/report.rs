//! Experiment reports.
//!
//! An [`ExperimentReportV1`] echoes the policy it ran under, so the report
//! alone is enough to regenerate its trials. Its canonical JSON uses
//! integer-only numbers: averages are never stored, only totals and counts,
//! and [`VariantAggregateV1::mean_iterations`] derives them on demand.

use pivot_kernel::proof::canon::canonical_json_bytes;
use pivot_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use pivot_kernel::stats::SearchStats;
use pivot_search::variant::Variant;

use crate::classify::AgreementVerdict;
use crate::compare::ComparisonV1;
use crate::error::HarnessError;
use crate::generate::Trial;
use crate::policy::TrialPolicyV1;

/// Domain for the full experiment report.
pub const DOMAIN_EXPERIMENT_REPORT: HashDomain = HashDomain::ExperimentReport;
/// Domain for a single trial record.
pub const DOMAIN_TRIAL_RECORD: HashDomain = HashDomain::TrialRecord;

/// Report schema identifier.
pub const REPORT_SCHEMA_VERSION: &str = "experiment_report.v1";

fn canon_bytes(value: &serde_json::Value) -> Result<Vec<u8>, HarnessError> {
    canonical_json_bytes(value).map_err(|e| HarnessError::CanonFailed {
        detail: e.to_string(),
    })
}

/// One trial: its input and every variant's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialRecordV1 {
    /// Zero-based trial number.
    pub index: u64,
    pub trial: Trial,
    pub comparison: ComparisonV1,
}

impl TrialRecordV1 {
    #[must_use]
    pub fn verdict(&self) -> AgreementVerdict {
        self.comparison.verdict
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = self.comparison.to_json();
        value["index"] = serde_json::json!(self.index);
        value["sequence"] = serde_json::json!(self.trial.sequence);
        value["target"] = serde_json::json!(self.trial.target);
        value
    }

    /// Content hash of this record alone.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::CanonFailed`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, HarnessError> {
        let bytes = canon_bytes(&self.to_json())?;
        Ok(canonical_hash(DOMAIN_TRIAL_RECORD, &bytes))
    }
}

/// Verdict counts across an experiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerdictTally {
    pub all_agree: u64,
    pub agree_on_value: u64,
    pub disagree: u64,
}

impl VerdictTally {
    pub fn record(&mut self, verdict: AgreementVerdict) {
        match verdict {
            AgreementVerdict::AllAgree => self.all_agree += 1,
            AgreementVerdict::AgreeOnValue => self.agree_on_value += 1,
            AgreementVerdict::Disagree => self.disagree += 1,
        }
    }

    #[must_use]
    pub fn count(&self, verdict: AgreementVerdict) -> u64 {
        match verdict {
            AgreementVerdict::AllAgree => self.all_agree,
            AgreementVerdict::AgreeOnValue => self.agree_on_value,
            AgreementVerdict::Disagree => self.disagree,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.all_agree + self.agree_on_value + self.disagree
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "agree_on_value": self.agree_on_value,
            "all_agree": self.all_agree,
            "disagree": self.disagree,
        })
    }
}

/// Running totals for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantAggregateV1 {
    pub variant: Variant,
    pub trials: u64,
    pub total_iterations: u64,
    pub max_iterations: u64,
    pub total_comparisons: u64,
    pub max_comparisons: u64,
}

impl VariantAggregateV1 {
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            trials: 0,
            total_iterations: 0,
            max_iterations: 0,
            total_comparisons: 0,
            max_comparisons: 0,
        }
    }

    pub fn record(&mut self, stats: SearchStats) {
        self.trials += 1;
        self.total_iterations += stats.iterations;
        self.total_comparisons += stats.comparisons;
        self.max_iterations = self.max_iterations.max(stats.iterations);
        self.max_comparisons = self.max_comparisons.max(stats.comparisons);
    }

    /// Average iterations per trial; `0.0` before any trial.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_iterations(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_iterations as f64 / self.trials as f64
    }

    /// Average comparisons per trial; `0.0` before any trial.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_comparisons(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_comparisons as f64 / self.trials as f64
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "max_comparisons": self.max_comparisons,
            "max_iterations": self.max_iterations,
            "total_comparisons": self.total_comparisons,
            "total_iterations": self.total_iterations,
            "trials": self.trials,
            "variant": self.variant.as_str(),
        })
    }
}

/// Whether per-trial records were kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Every trial recorded.
    Experiment,
    /// Aggregates only.
    Bulk,
}

impl ReportMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Experiment => "experiment",
            Self::Bulk => "bulk",
        }
    }
}

/// Complete, self-describing result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentReportV1 {
    pub mode: ReportMode,
    pub policy: TrialPolicyV1,
    /// Variants in column order.
    pub variants: Vec<Variant>,
    /// Empty in [`ReportMode::Bulk`].
    pub trials: Vec<TrialRecordV1>,
    pub tally: VerdictTally,
    /// One per entry of `variants`, same order.
    pub aggregates: Vec<VariantAggregateV1>,
}

impl ExperimentReportV1 {
    /// The aggregate for `variant`, if it took part.
    #[must_use]
    pub fn aggregate(&self, variant: Variant) -> Option<&VariantAggregateV1> {
        self.aggregates.iter().find(|a| a.variant == variant)
    }

    /// Whether any trial produced a [`AgreementVerdict::Disagree`].
    #[must_use]
    pub fn has_disagreement(&self) -> bool {
        self.tally.disagree > 0
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let variants: Vec<&str> = self.variants.iter().map(|v| v.as_str()).collect();
        let trials: Vec<serde_json::Value> =
            self.trials.iter().map(TrialRecordV1::to_json).collect();
        let aggregates: Vec<serde_json::Value> = self
            .aggregates
            .iter()
            .map(VariantAggregateV1::to_json)
            .collect();
        serde_json::json!({
            "aggregates": aggregates,
            "mode": self.mode.as_str(),
            "policy": self.policy.to_json(),
            "schema_version": REPORT_SCHEMA_VERSION,
            "tally": self.tally.to_json(),
            "trials": trials,
            "variants": variants,
        })
    }

    /// Canonical JSON bytes of [`Self::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::CanonFailed`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, HarnessError> {
        canon_bytes(&self.to_json())
    }

    /// Content hash of the canonical report bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::CanonFailed`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, HarnessError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_EXPERIMENT_REPORT, &bytes))
    }
}
