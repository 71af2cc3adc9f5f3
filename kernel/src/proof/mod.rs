//! Proof module: canonical JSON and domain-separated content hashing.
//!
//! Used by the harness to give every report a stable digest. Nothing in the
//! search path depends on it.

pub mod canon;
pub mod hash;
pub mod hash_domain;
