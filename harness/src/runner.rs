//! Experiment runner: policy in, report out.
//!
//! Trials run sequentially in generation order. A `Disagree` verdict is
//! logged at `warn` and counted; it never stops the run.

use pivot_search::variant::Variant;
use tracing::{debug, info, warn};

use crate::compare::compare;
use crate::error::HarnessError;
use crate::generate::TrialGenerator;
use crate::policy::TrialPolicyV1;
use crate::report::{
    ExperimentReportV1, ReportMode, TrialRecordV1, VariantAggregateV1, VerdictTally,
};

/// Run every trial of `policy` against `variants`, keeping each record.
///
/// # Errors
///
/// Returns [`HarnessError::Policy`] if the policy fails validation, or
/// [`HarnessError::TooFewVariants`] if fewer than two variants are given.
pub fn run_experiment(
    policy: &TrialPolicyV1,
    variants: &[Variant],
) -> Result<ExperimentReportV1, HarnessError> {
    run(policy, variants, ReportMode::Experiment)
}

/// Like [`run_experiment`], but keeps only the aggregates.
///
/// # Errors
///
/// Same as [`run_experiment`].
pub fn run_bulk(
    policy: &TrialPolicyV1,
    variants: &[Variant],
) -> Result<ExperimentReportV1, HarnessError> {
    run(policy, variants, ReportMode::Bulk)
}

fn run(
    policy: &TrialPolicyV1,
    variants: &[Variant],
    mode: ReportMode,
) -> Result<ExperimentReportV1, HarnessError> {
    if variants.len() < 2 {
        return Err(HarnessError::TooFewVariants {
            given: variants.len(),
        });
    }
    let generator = TrialGenerator::new(policy.clone())?;

    let mut trials = Vec::new();
    let mut tally = VerdictTally::default();
    let mut aggregates: Vec<VariantAggregateV1> =
        variants.iter().map(|&v| VariantAggregateV1::new(v)).collect();

    for (index, trial) in (0u64..).zip(generator) {
        let comparison = compare(&trial.sequence, &trial.target, variants, policy.accounting)?;
        let verdict = comparison.verdict;

        tally.record(verdict);
        for (aggregate, run) in aggregates.iter_mut().zip(&comparison.runs) {
            aggregate.record(run.stats);
        }

        if verdict.is_failure() {
            warn!(
                trial = index,
                target = trial.target,
                sequence = ?trial.sequence,
                outcomes = ?comparison.outcomes(),
                "variants disagree"
            );
        } else {
            debug!(
                trial = index,
                target = trial.target,
                verdict = %verdict,
                outcomes = ?comparison.outcomes(),
                "trial complete"
            );
        }

        if mode == ReportMode::Experiment {
            trials.push(TrialRecordV1 {
                index,
                trial,
                comparison,
            });
        }
    }

    info!(
        mode = mode.as_str(),
        trials = tally.total(),
        all_agree = tally.all_agree,
        agree_on_value = tally.agree_on_value,
        disagree = tally.disagree,
        seed = policy.seed,
        "experiment finished"
    );
    for aggregate in &aggregates {
        debug!(
            variant = aggregate.variant.as_str(),
            mean_iterations = aggregate.mean_iterations(),
            mean_comparisons = aggregate.mean_comparisons(),
            max_iterations = aggregate.max_iterations,
            "variant aggregate"
        );
    }

    Ok(ExperimentReportV1 {
        mode,
        policy: policy.clone(),
        variants: variants.to_vec(),
        trials,
        tally,
        aggregates,
    })
}
