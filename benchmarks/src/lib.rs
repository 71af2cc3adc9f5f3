//! Shared helpers for pivot benchmark suites.
//!
//! Bench inputs come from the harness generator, so they are seeded and
//! reproducible. Each input carries a content hash so a suite can log exactly
//! which data a timing was taken on.

use pivot_harness::generate::TrialGenerator;
use pivot_harness::policy::{SequenceShape, TargetPolicy, TrialPolicyV1};
use pivot_kernel::proof::canon::canonical_json_bytes;
use pivot_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Stride used to spread targets over the sequence.
const TARGET_STRIDE: usize = 7919;

/// A sorted sequence plus a fixed target mix.
pub struct BenchInput {
    pub sequence: Vec<i64>,
    /// Present targets, with every fourth one replaced by a miss.
    pub targets: Vec<i64>,
    pub digest: ContentHash,
}

/// Build a seeded input of `size` elements.
///
/// Distinct inputs draw from `0..=4 * size`; duplicate-heavy inputs draw
/// from a range a quarter the length, so each value repeats about four
/// times.
///
/// # Panics
///
/// Panics if `size` is zero or the derived policy is otherwise invalid.
/// Benchmark setup failures are fatal.
#[must_use]
pub fn bench_input(size: usize, shape: SequenceShape, target_count: usize) -> BenchInput {
    let span = i64::try_from(size).expect("size fits i64");
    let value_max = match shape {
        SequenceShape::Distinct => 4 * span,
        SequenceShape::WithDuplicates => (span / 4).max(1),
    };
    let policy = TrialPolicyV1 {
        trials: 1,
        length: size,
        value_min: 0,
        value_max,
        shape,
        targets: TargetPolicy::Present,
        seed: 0x5EED,
        ..TrialPolicyV1::default()
    };
    let mut generator = TrialGenerator::new(policy).expect("bench policy valid");
    let sequence = generator.draw().sequence;

    let targets: Vec<i64> = (0..target_count)
        .map(|k| {
            if k % 4 == 3 {
                value_max + 1
            } else {
                sequence[(k * TARGET_STRIDE) % size]
            }
        })
        .collect();

    let json = serde_json::json!({
        "sequence": sequence,
        "targets": targets,
    });
    let bytes = canonical_json_bytes(&json).expect("integer-only bench input");
    let digest = canonical_hash(HashDomain::BenchInput, &bytes);

    BenchInput {
        sequence,
        targets,
        digest,
    }
}
