//! Hash domain and core-purity lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique and null-terminated
//! 3. All domains follow `PIVOT::*::V1\0` naming convention
//! 4. No raw `PIVOT::` domain literals in production source outside `hash_domain.rs`
//! 5. The kernel and search crates never print or log

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use pivot_kernel::proof::hash::HashDomain;

const KERNEL_SRC: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../kernel/src");
const SEARCH_SRC: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src");
const HARNESS_SRC: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../harness/src");

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        4,
        "expected 4 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_unique_and_null_terminated() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(seen.insert(domain.as_bytes()), "duplicate domain bytes: {domain}");
        assert!(domain.as_bytes().ends_with(&[0]), "{domain} is not null-terminated");
    }
}

#[test]
fn hash_domain_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.starts_with(b"PIVOT::"), "{domain} does not start with PIVOT::");
        assert!(bytes.ends_with(b"::V1\0"), "{domain} does not end with ::V1\\0");
    }
}

#[test]
fn no_raw_domain_literals_outside_authority() {
    let mut violations = Vec::new();
    for dir in [KERNEL_SRC, SEARCH_SRC, HARNESS_SRC] {
        scan_dir(dir, &["b\"PIVOT::"], Some("hash_domain.rs"), &mut violations);
    }
    assert!(
        violations.is_empty(),
        "raw PIVOT:: domain literals found outside hash_domain.rs:\n{}",
        violations.join("\n")
    );
}

#[test]
fn core_crates_never_print_or_log() {
    let patterns = ["println!", "print!(", "eprintln!", "dbg!", "tracing::"];
    let mut violations = Vec::new();
    for dir in [KERNEL_SRC, SEARCH_SRC] {
        assert!(Path::new(dir).exists(), "missing source dir {dir}");
        scan_dir(dir, &patterns, None, &mut violations);
    }
    assert!(
        violations.is_empty(),
        "output or logging in the algorithmic core:\n{}",
        violations.join("\n")
    );
}

/// Report non-comment, non-test lines containing any of `patterns`.
fn scan_dir(dir: &str, patterns: &[&str], skip_file: Option<&str>, violations: &mut Vec<String>) {
    for path in walkdir(Path::new(dir)) {
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        if skip_file.is_some() && path.file_name().and_then(|n| n.to_str()) == skip_file {
            continue;
        }
        let Ok(content) = std::fs::read_to_string(&path) else {
            continue;
        };

        // Skip #[cfg(test)] module blocks via brace-depth tracking.
        let mut brace_depth: usize = 0;
        let mut skip_depth: Option<usize> = None;
        let mut cfg_test_pending = false;

        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.contains("#[cfg(test)]") {
                cfg_test_pending = true;
                continue;
            }

            let opens = line.chars().filter(|&c| c == '{').count();
            let closes = line.chars().filter(|&c| c == '}').count();
            if cfg_test_pending && opens > 0 {
                skip_depth = Some(brace_depth);
                cfg_test_pending = false;
            }
            brace_depth = brace_depth.saturating_add(opens).saturating_sub(closes);

            if let Some(depth) = skip_depth {
                if brace_depth <= depth {
                    skip_depth = None;
                }
                continue;
            }
            if trimmed.starts_with("//") {
                continue;
            }
            if patterns.iter().any(|p| trimmed.contains(p)) {
                violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
            }
        }
    }
}

fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(walkdir(&path));
            } else {
                results.push(path);
            }
        }
    }
    results
}
