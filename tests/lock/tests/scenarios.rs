//! Concrete scenario locks: fixed inputs with fixed answers and counts.

use pivot_harness::classify::AgreementVerdict;
use pivot_harness::compare::compare;
use pivot_kernel::outcome::SearchOutcome;
use pivot_kernel::probe::{ComparisonAccounting, Probe};
use pivot_kernel::stats::SearchStats;
use pivot_kernel::trace::RecordingSink;
use pivot_kernel::window::{SearchWindow, WindowConvention};
use pivot_search::boundary::{equal_range, leftmost, rightmost, rightmost_end};
use pivot_search::variant::Variant;

const REFERENCE: [i64; 8] = [-87, -42, -13, 0, 5, 19, 42, 77];
const DUPS: [i64; 6] = [1, 1, 1, 2, 2, 3];

fn stats(variant: Variant, seq: &[i64], target: i64) -> SearchStats {
    variant
        .measure(seq, &target, ComparisonAccounting::Evaluated)
        .stats
}

#[test]
fn reference_hit_from_every_point_variant() {
    for v in Variant::POINT {
        assert_eq!(v.search(&REFERENCE, &0), SearchOutcome::Found(3), "{v}");
    }
}

#[test]
fn reference_miss_from_every_variant() {
    for v in Variant::ALL {
        assert_eq!(v.search(&REFERENCE, &100), SearchOutcome::NotFound, "{v}");
        assert_eq!(v.search(&REFERENCE, &-100), SearchOutcome::NotFound, "{v}");
        assert_eq!(v.search(&REFERENCE, &1), SearchOutcome::NotFound, "{v}");
    }
}

#[test]
fn reference_counts() {
    // standard: [0,8) m4, [0,4) m2, [3,4) m3 found.
    assert_eq!(
        stats(Variant::Standard, &REFERENCE, 0),
        SearchStats {
            iterations: 3,
            comparisons: 5
        }
    );
    // classic: [0,7] m3 found on the first probe.
    assert_eq!(
        stats(Variant::Classic, &REFERENCE, 0),
        SearchStats {
            iterations: 1,
            comparisons: 1
        }
    );
    // unified: [0,7] m4, [0,3] m2, [2,3] m3, then the equality test.
    assert_eq!(
        stats(Variant::Unified, &REFERENCE, 0),
        SearchStats {
            iterations: 3,
            comparisons: 4
        }
    );
    // classic miss high: m3, m5, m6, m7.
    assert_eq!(
        stats(Variant::Classic, &REFERENCE, 100),
        SearchStats {
            iterations: 4,
            comparisons: 8
        }
    );
}

#[test]
fn charged_accounting_bills_the_dead_comparison() {
    let charged = Variant::Classic.measure(&REFERENCE, &0, ComparisonAccounting::Charged);
    assert_eq!(charged.outcome, SearchOutcome::Found(3));
    assert_eq!(
        charged.stats,
        SearchStats {
            iterations: 1,
            comparisons: 2
        }
    );
}

#[test]
fn duplicate_boundaries() {
    assert_eq!(leftmost(&DUPS, &1), 0);
    assert_eq!(rightmost(&DUPS, &1), Some(2));
    assert_eq!(leftmost(&DUPS, &2), 3);
    assert_eq!(rightmost(&DUPS, &2), Some(4));
    // Absent above everything: leftmost is one past rightmost.
    assert_eq!(leftmost(&DUPS, &4), 6);
    assert_eq!(rightmost(&DUPS, &4), Some(5));
    assert_eq!(rightmost_end(&DUPS, &4), leftmost(&DUPS, &4));
    assert!(equal_range(&DUPS, &4).is_empty());
}

#[test]
fn duplicate_point_answers() {
    assert_eq!(Variant::Standard.search(&DUPS, &1), SearchOutcome::Found(1));
    assert_eq!(Variant::Classic.search(&DUPS, &1), SearchOutcome::Found(2));
    assert_eq!(Variant::Unified.search(&DUPS, &1), SearchOutcome::Found(2));
    assert_eq!(Variant::Unified.search(&DUPS, &2), SearchOutcome::Found(4));
}

#[test]
fn duplicate_classification() {
    let cmp = compare(&DUPS, &1, &Variant::POINT, ComparisonAccounting::Evaluated).unwrap();
    assert_eq!(cmp.verdict, AgreementVerdict::AgreeOnValue);
    let cmp = compare(&DUPS, &3, &Variant::ALL, ComparisonAccounting::Evaluated).unwrap();
    assert_eq!(cmp.verdict, AgreementVerdict::AllAgree);
}

#[test]
fn single_element() {
    for v in Variant::ALL {
        assert_eq!(v.search(&[7_i64], &7), SearchOutcome::Found(0), "{v}");
        assert_eq!(v.search(&[7_i64], &6), SearchOutcome::NotFound, "{v}");
        assert_eq!(v.search(&[7_i64], &8), SearchOutcome::NotFound, "{v}");
    }
    // unified on one element: no iterations, only the final equality test.
    assert_eq!(
        stats(Variant::Unified, &[7], 7),
        SearchStats {
            iterations: 0,
            comparisons: 1
        }
    );
}

#[test]
fn empty_sequence_costs_nothing() {
    let empty: [i64; 0] = [];
    for v in Variant::ALL {
        let m = v.measure(&empty, &1, ComparisonAccounting::Charged);
        assert_eq!(m.outcome, SearchOutcome::NotFound, "{v}");
        assert_eq!(m.stats, SearchStats::default(), "{v}");
    }
}

#[test]
fn recorded_windows_for_reference_hit() {
    let mut sink = RecordingSink::new();
    {
        let mut probe: Probe<'_, i64> = Probe::with_sink(&mut sink);
        let _ = Variant::Unified.search_with(&REFERENCE, &0, &mut probe);
    }
    let windows: Vec<String> = sink.steps.iter().map(|s| s.window.to_string()).collect();
    assert_eq!(windows, vec!["[0, 7]", "[0, 3]", "[2, 3]"]);
    let mids: Vec<usize> = sink.steps.iter().map(|s| s.mid).collect();
    assert_eq!(mids, vec![4, 2, 3]);
    assert_eq!(
        sink.settled,
        Some(SearchWindow::new(3, 3, WindowConvention::Closed))
    );
}

#[test]
fn classic_exhaustion_settles_at_the_crossing() {
    let mut sink = RecordingSink::new();
    {
        let mut probe: Probe<'_, i64> = Probe::with_sink(&mut sink);
        let _ = Variant::Classic.search_with(&REFERENCE, &100, &mut probe);
    }
    assert_eq!(
        sink.settled,
        Some(SearchWindow::new(8, 8, WindowConvention::HalfOpen))
    );

    let mut sink = RecordingSink::new();
    {
        let mut probe: Probe<'_, i64> = Probe::with_sink(&mut sink);
        let _ = Variant::Classic.search_with(&REFERENCE, &-100, &mut probe);
    }
    assert_eq!(
        sink.settled,
        Some(SearchWindow::new(0, 0, WindowConvention::HalfOpen))
    );
}
