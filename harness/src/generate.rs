//! Seeded trial generation.
//!
//! Inputs are drawn from a `ChaCha8Rng` seeded with the policy seed, so a
//! policy names its trials exactly. Every generated sequence is sorted
//! (non-decreasing) before it is handed to a search.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::PolicyError;
use crate::policy::{SequenceShape, TargetPolicy, TrialPolicyV1};

/// One generated input: a sorted sequence and a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    pub sequence: Vec<i64>,
    pub target: i64,
}

impl Trial {
    /// Whether the target occurs in the sequence.
    #[must_use]
    pub fn target_present(&self) -> bool {
        self.sequence.binary_search(&self.target).is_ok()
    }
}

/// Yields `policy.trials` trials, then stops.
#[derive(Debug)]
pub struct TrialGenerator {
    policy: TrialPolicyV1,
    rng: ChaCha8Rng,
    remaining: u64,
}

impl TrialGenerator {
    /// Validate `policy` and seed the generator from it.
    ///
    /// # Errors
    ///
    /// Returns the [`PolicyError`] from [`TrialPolicyV1::validate`].
    pub fn new(policy: TrialPolicyV1) -> Result<Self, PolicyError> {
        policy.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(policy.seed);
        let remaining = policy.trials;
        Ok(Self {
            policy,
            rng,
            remaining,
        })
    }

    #[must_use]
    pub fn policy(&self) -> &TrialPolicyV1 {
        &self.policy
    }

    /// Draw one trial regardless of the remaining count.
    pub fn draw(&mut self) -> Trial {
        let sequence = self.draw_sequence();
        let target = self.draw_target(&sequence);
        Trial { sequence, target }
    }

    fn draw_sequence(&mut self) -> Vec<i64> {
        let TrialPolicyV1 {
            length,
            value_min,
            value_max,
            shape,
            ..
        } = self.policy;

        let mut sequence: Vec<i64> = match shape {
            SequenceShape::Distinct => {
                // validate() guarantees the range fits in usize and holds
                // at least `length` values.
                let range_len = usize::try_from(self.policy.range_len()).unwrap_or(usize::MAX);
                rand::seq::index::sample(&mut self.rng, range_len, length)
                    .into_iter()
                    .map(|offset| value_min.wrapping_add_unsigned(offset as u64))
                    .collect()
            }
            SequenceShape::WithDuplicates => (0..length)
                .map(|_| self.rng.gen_range(value_min..=value_max))
                .collect(),
        };
        sequence.sort_unstable();
        sequence
    }

    fn draw_target(&mut self, sequence: &[i64]) -> i64 {
        let choices = match self.policy.targets {
            TargetPolicy::Present => sequence.len(),
            // One extra slot for the miss sentinel.
            TargetPolicy::PresentOrMiss => sequence.len() + 1,
        };
        let pick = self.rng.gen_range(0..choices);
        sequence
            .get(pick)
            .copied()
            .unwrap_or_else(|| self.policy.value_max.saturating_add(1))
    }
}

impl Iterator for TrialGenerator {
    type Item = Trial;

    fn next(&mut self) -> Option<Trial> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.draw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}
