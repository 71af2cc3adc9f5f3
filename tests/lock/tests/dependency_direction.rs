//! Build-graph isolation: `kernel ← search ← harness ← cli`.
//!
//! The algorithmic core (kernel, search) must not reach up the stack, and
//! must not pull in randomness or logging.

use std::path::Path;

fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/, so workspace root is ../..
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists")
}

/// Crate names listed under `[dependencies]` of `<crate_dir>/Cargo.toml`.
fn dependencies(crate_dir: &str) -> Vec<String> {
    let manifest = workspace_root().join(crate_dir).join("Cargo.toml");
    let content = std::fs::read_to_string(&manifest)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", manifest.display()));

    let mut in_deps = false;
    let mut deps = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            in_deps = trimmed == "[dependencies]";
            continue;
        }
        if in_deps {
            if let Some((name, _)) = trimmed.split_once('=') {
                deps.push(name.trim().to_string());
            }
        }
    }
    deps
}

#[test]
fn kernel_depends_on_no_workspace_crate() {
    let deps = dependencies("kernel");
    assert!(
        deps.iter().all(|d| !d.starts_with("pivot-")),
        "kernel reaches into the workspace: {deps:?}"
    );
}

#[test]
fn search_depends_only_on_kernel() {
    let deps = dependencies("search");
    assert_eq!(deps, vec!["pivot-kernel".to_string()]);
}

#[test]
fn harness_does_not_depend_on_cli() {
    let deps = dependencies("harness");
    assert!(deps.contains(&"pivot-search".to_string()));
    assert!(!deps.contains(&"pivot-cli".to_string()));
}

#[test]
fn core_has_no_randomness_or_logging() {
    for crate_dir in ["kernel", "search"] {
        let deps = dependencies(crate_dir);
        for banned in ["rand", "rand_chacha", "tracing", "tracing-subscriber"] {
            assert!(
                !deps.iter().any(|d| d == banned),
                "{crate_dir} depends on {banned}"
            );
        }
    }
}
