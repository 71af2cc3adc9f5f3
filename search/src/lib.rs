//! Pivot Search: binary-search variants over sorted slices.
//!
//! This crate depends only on `pivot_kernel`. It does NOT depend on
//! `pivot_harness`, never logs, and never prints.
//!
//! # Crate dependency graph
//!
//! ```text
//! pivot_kernel  ←  pivot_search  ←  pivot_harness  ←  pivot_cli
//! (contract)       (variants)        (comparison)      (binary)
//! ```
//!
//! # Variants
//!
//! | Module | Window | Midpoint | Tests per iteration |
//! |--------|--------|----------|---------------------|
//! | [`standard`] | `[l, r)` | floor | eq, then gt |
//! | [`classic`] | `[l, r]` | floor | eq, then gt |
//! | [`unified`] | `[l, r]` | ceiling | gt; one eq after convergence |
//! | [`boundary`] | `[l, r)` | floor | lt (leftmost) or le (rightmost) |
//!
//! Every variant has a plain entry point and a `*_with` entry point taking a
//! [`pivot_kernel::probe::Probe`]. [`variant::Variant`] dispatches over all
//! five by name.
//!
//! Inputs must be non-decreasing. Sortedness is not checked; an unsorted
//! slice yields an unspecified (but memory-safe) result.

#![forbid(unsafe_code)]

pub mod boundary;
pub mod classic;
pub mod standard;
pub mod unified;
pub mod variant;
