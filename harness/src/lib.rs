//! Pivot Harness: side-by-side comparison of search variants.
//!
//! The harness feeds identical `(sequence, target)` inputs to several
//! variants, classifies whether their answers agree, and aggregates their
//! iteration and comparison counts into a self-describing report.
//!
//! # Pipeline
//!
//! ```text
//! TrialPolicyV1::validate()
//!   → TrialGenerator (seeded) → [compare() × trials] → classify()
//!   → ExperimentReportV1 → canonical JSON → digest
//! ```
//!
//! The harness does NOT implement search logic; it delegates to
//! `pivot_search`. Random input generation lives here, outside the
//! algorithmic core.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod compare;
pub mod error;
pub mod generate;
pub mod policy;
pub mod render;
pub mod report;
pub mod runner;
