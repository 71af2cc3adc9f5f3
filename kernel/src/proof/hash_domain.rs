//! Typed domain separators for canonical hashing.
//!
//! Every digest selects a domain via [`HashDomain`]. Adding a domain is a
//! single change here: the enum, `as_bytes()`, `ALL`, and `Display` are all
//! generated from the same macro invocation.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// A single trial record (sequence, target, per-variant outcomes).
    TrialRecord => b"PIVOT::TRIAL_RECORD::V1\0",

    /// A full experiment report (policy echo, trials, aggregates).
    ExperimentReport => b"PIVOT::EXPERIMENT_REPORT::V1\0",

    /// Trial policy echo.
    TrialPolicy => b"PIVOT::TRIAL_POLICY::V1\0",

    /// Benchmark input fixtures.
    BenchInput => b"PIVOT::BENCH_INPUT::V1\0",
}
