//! Side-by-side run of several variants on one input.

use pivot_kernel::outcome::SearchOutcome;
use pivot_kernel::probe::ComparisonAccounting;
use pivot_kernel::stats::SearchStats;
use pivot_search::variant::Variant;

use crate::classify::{classify, AgreementVerdict};
use crate::error::HarnessError;

/// One variant's answer and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantRunV1 {
    pub variant: Variant,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl VariantRunV1 {
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "outcome": self.outcome.to_json(),
            "stats": self.stats.to_json(),
            "variant": self.variant.as_str(),
        })
    }
}

/// Result of [`compare`]: runs in the order the variants were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonV1 {
    pub runs: Vec<VariantRunV1>,
    pub verdict: AgreementVerdict,
}

impl ComparisonV1 {
    /// The run for `variant`, if it took part.
    #[must_use]
    pub fn run(&self, variant: Variant) -> Option<&VariantRunV1> {
        self.runs.iter().find(|r| r.variant == variant)
    }

    #[must_use]
    pub fn outcomes(&self) -> Vec<SearchOutcome> {
        self.runs.iter().map(|r| r.outcome).collect()
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let runs: Vec<serde_json::Value> = self.runs.iter().map(VariantRunV1::to_json).collect();
        serde_json::json!({
            "runs": runs,
            "verdict": self.verdict.as_str(),
        })
    }
}

/// Run every variant in `variants` on `(seq, target)` and classify.
///
/// # Errors
///
/// Returns [`HarnessError::TooFewVariants`] if fewer than two variants are
/// given. Disagreement is reported in the verdict, never as an error.
pub fn compare<T: Ord>(
    seq: &[T],
    target: &T,
    variants: &[Variant],
    accounting: ComparisonAccounting,
) -> Result<ComparisonV1, HarnessError> {
    if variants.len() < 2 {
        return Err(HarnessError::TooFewVariants {
            given: variants.len(),
        });
    }

    let runs: Vec<VariantRunV1> = variants
        .iter()
        .map(|&variant| {
            let measured = variant.measure(seq, target, accounting);
            VariantRunV1 {
                variant,
                outcome: measured.outcome,
                stats: measured.stats,
            }
        })
        .collect();

    let outcomes: Vec<SearchOutcome> = runs.iter().map(|r| r.outcome).collect();
    let verdict = classify(seq, &outcomes);
    Ok(ComparisonV1 { runs, verdict })
}
