//! Exhaustive property locks over every non-decreasing sequence of length
//! 0 through 7 on the alphabet `0..4`, with targets from `-1` through `4`
//! (below, inside, and above the alphabet).

use pivot_harness::classify::{classify, AgreementVerdict};
use pivot_kernel::outcome::SearchOutcome;
use pivot_kernel::probe::{ComparisonAccounting, Probe};
use pivot_kernel::trace::{NoopSink, RecordingSink};
use pivot_search::boundary::{leftmost, rightmost, rightmost_end};
use pivot_search::variant::{Variant, VariantFamily};

const MAX_LEN: usize = 7;
const ALPHABET: u8 = 4;
const TARGETS: std::ops::RangeInclusive<i8> = -1..=4;

/// All non-decreasing sequences of exactly `len` symbols.
fn sequences_of_len(len: usize) -> Vec<Vec<i8>> {
    fn extend(prefix: &mut Vec<i8>, len: usize, min: u8, out: &mut Vec<Vec<i8>>) {
        if prefix.len() == len {
            out.push(prefix.clone());
            return;
        }
        for sym in min..ALPHABET {
            prefix.push(i8::try_from(sym).unwrap());
            extend(prefix, len, sym, out);
            prefix.pop();
        }
    }
    let mut out = Vec::new();
    extend(&mut Vec::with_capacity(len), len, 0, &mut out);
    out
}

fn all_sequences() -> Vec<Vec<i8>> {
    (0..=MAX_LEN).flat_map(sequences_of_len).collect()
}

/// `ceil(log2(n + 1))`, i.e. the bit length of `n`.
fn log_bound(n: usize) -> u64 {
    u64::from(usize::BITS - n.leading_zeros())
}

#[test]
fn enumeration_is_complete() {
    // Multisets of size k from 4 symbols: C(k + 3, 3). Sum over k = 0..=7 is C(11, 4).
    assert_eq!(all_sequences().len(), 330);
}

#[test]
fn point_variants_find_present_targets() {
    for seq in all_sequences() {
        for target in TARGETS {
            let present = seq.contains(&target);
            for v in Variant::POINT {
                match v.search(&seq, &target) {
                    SearchOutcome::Found(i) => {
                        assert!(present, "{v} found absent {target} in {seq:?}");
                        assert_eq!(seq[i], target, "{v} returned wrong index in {seq:?}");
                    }
                    SearchOutcome::NotFound => {
                        assert!(!present, "{v} missed {target} in {seq:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn boundary_variants_bracket_the_run() {
    for seq in all_sequences() {
        let n = seq.len();
        for target in TARGETS {
            let lo = leftmost(&seq, &target);
            let end = rightmost_end(&seq, &target);
            assert!(lo <= end, "leftmost > rightmost_end for {target} in {seq:?}");
            assert_eq!(rightmost(&seq, &target), end.checked_sub(1));

            assert!(seq[lo..end].iter().all(|&x| x == target));
            assert!(lo == 0 || seq[lo - 1] < target);
            assert!(end == n || seq[end] > target);

            assert_eq!(lo, seq.partition_point(|&x| x < target));
            assert_eq!(end, seq.partition_point(|&x| x <= target));
        }
    }
}

#[test]
fn unified_finds_the_last_occurrence() {
    for seq in all_sequences() {
        for target in TARGETS {
            let expected = rightmost(&seq, &target).filter(|&i| seq[i] == target);
            assert_eq!(
                Variant::Unified.search(&seq, &target),
                SearchOutcome::from(expected),
                "{target} in {seq:?}"
            );
        }
    }
}

#[test]
fn iterations_stay_logarithmic() {
    for seq in all_sequences() {
        let bound = log_bound(seq.len()) + 1;
        for target in TARGETS {
            for v in Variant::ALL {
                let m = v.measure(&seq, &target, ComparisonAccounting::Evaluated);
                assert!(
                    m.stats.iterations <= bound,
                    "{v}: {} iterations > {bound} for {target} in {seq:?}",
                    m.stats.iterations
                );
            }
        }
    }
}

/// Lengths around every power of two up to 4096, plus everything below 130.
fn sweep_lengths() -> Vec<usize> {
    let mut lengths: Vec<usize> = (0..130).collect();
    for k in 7..=12 {
        let p = 1usize << k;
        lengths.extend([p - 1, p, p + 1]);
    }
    lengths.sort_unstable();
    lengths.dedup();
    lengths
}

#[test]
fn iterations_stay_logarithmic_at_scale() {
    // Even values with each one repeated `run` times; odd targets always miss.
    for run in [1usize, 2, 5] {
        for n in sweep_lengths() {
            let seq: Vec<i64> = (0..n).map(|i| 2 * i64::try_from(i / run).unwrap()).collect();
            let top = seq.last().copied().unwrap_or(0);
            let bound = log_bound(n) + 1;
            for target in -1..=top + 1 {
                for v in Variant::ALL {
                    let m = v.measure(&seq, &target, ComparisonAccounting::Evaluated);
                    assert!(
                        m.stats.iterations <= bound,
                        "{v}: {} iterations > {bound} for {target}, n={n}, run={run}",
                        m.stats.iterations
                    );
                    if v.family() == VariantFamily::Point {
                        assert_eq!(
                            m.outcome.is_found(),
                            target % 2 == 0 && target <= top && !seq.is_empty(),
                            "{v}: {target}, n={n}, run={run}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn sinks_never_change_results() {
    for seq in all_sequences() {
        for target in TARGETS {
            for v in Variant::ALL {
                for accounting in [ComparisonAccounting::Evaluated, ComparisonAccounting::Charged] {
                    let measured = v.measure(&seq, &target, accounting);

                    let mut recording = RecordingSink::new();
                    let (outcome, stats) = {
                        let mut probe: Probe<'_, i8> =
                            Probe::with_sink(&mut recording).accounting(accounting);
                        let outcome = v.search_with(&seq, &target, &mut probe);
                        (outcome, probe.stats())
                    };
                    assert_eq!(outcome, measured.outcome, "{v} {target} in {seq:?}");
                    assert_eq!(stats, measured.stats, "{v} {target} in {seq:?}");
                    assert_eq!(
                        recording.steps.len() as u64,
                        stats.iterations,
                        "{v}: one step per iteration for {target} in {seq:?}"
                    );
                    assert!(recording.steps.iter().all(|s| s.label == v.as_str()));

                    let mut noop = NoopSink;
                    let mut probe: Probe<'_, i8> = Probe::with_sink(&mut noop).accounting(accounting);
                    assert_eq!(v.search_with(&seq, &target, &mut probe), measured.outcome);
                    assert_eq!(probe.stats(), measured.stats);
                }
            }
        }
    }
}

#[test]
fn comparison_accounting_per_variant() {
    for seq in all_sequences() {
        for target in TARGETS {
            for v in Variant::ALL {
                let ev = v.measure(&seq, &target, ComparisonAccounting::Evaluated);
                let ch = v.measure(&seq, &target, ComparisonAccounting::Charged);
                assert_eq!(ev.outcome, ch.outcome);
                assert_eq!(ev.stats.iterations, ch.stats.iterations);
                let it = ev.stats.iterations;

                match v {
                    Variant::Standard | Variant::Classic => {
                        let found = u64::from(ev.outcome.is_found());
                        assert_eq!(ev.stats.comparisons, 2 * it - found, "{v} {seq:?} {target}");
                        assert_eq!(ch.stats.comparisons, 2 * it, "{v} {seq:?} {target}");
                    }
                    Variant::Unified => {
                        let after = u64::from(!seq.is_empty());
                        assert_eq!(ev.stats.comparisons, it + after);
                        assert_eq!(ch.stats, ev.stats);
                    }
                    Variant::Leftmost | Variant::Rightmost => {
                        assert_eq!(v.family(), VariantFamily::Boundary);
                        assert_eq!(ev.stats.comparisons, it);
                        assert_eq!(ch.stats, ev.stats);
                    }
                }
            }
        }
    }
}

#[test]
fn classification_never_disagrees() {
    for seq in all_sequences() {
        for target in TARGETS {
            let outcomes: Vec<SearchOutcome> =
                Variant::ALL.iter().map(|v| v.search(&seq, &target)).collect();
            let verdict = classify(&seq, &outcomes);
            assert_ne!(verdict, AgreementVerdict::Disagree, "{target} in {seq:?}");

            let occurrences = seq.iter().filter(|&&x| x == target).count();
            if occurrences <= 1 {
                assert_eq!(verdict, AgreementVerdict::AllAgree, "{target} in {seq:?}");
            }
        }
    }
}

#[test]
fn distinct_inputs_agree_on_index() {
    for seq in all_sequences() {
        if seq.windows(2).any(|w| w[0] == w[1]) {
            continue;
        }
        for target in TARGETS {
            assert_eq!(
                Variant::Standard.search(&seq, &target),
                Variant::Classic.search(&seq, &target),
                "{target} in {seq:?}"
            );
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    for seq in all_sequences() {
        for target in TARGETS {
            for v in Variant::ALL {
                let a = v.measure(&seq, &target, ComparisonAccounting::Evaluated);
                let b = v.measure(&seq, &target, ComparisonAccounting::Evaluated);
                assert_eq!(a, b);
            }
        }
    }
}
