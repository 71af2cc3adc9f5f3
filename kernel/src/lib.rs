//! Pivot Kernel: the data contract shared by every bisection variant.
//!
//! # API Surface
//!
//! - [`window::SearchWindow`] -- the half-open or closed candidate range
//! - [`outcome::SearchOutcome`] -- `Found(index)` or `NotFound`
//! - [`stats::SearchStats`] -- iteration and comparison counters
//! - [`probe::Probe`] -- instrumentation handle threaded through a search call
//! - [`trace::TraceSink`] -- optional per-step observer
//! - [`proof::canon`] / [`proof::hash`] -- canonical JSON and content hashing
//!   for reports
//!
//! # Module Dependency Direction
//!
//! `window` ← `invariant`, `trace` ← `probe`
//!
//! `outcome`, `stats`, and `proof` depend on nothing internal. The kernel
//! never prints and never logs; presentation belongs to sinks supplied by
//! callers.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod invariant;
pub mod outcome;
pub mod probe;
pub mod proof;
pub mod stats;
pub mod trace;
pub mod window;
