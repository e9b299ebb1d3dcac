//! # Sieve of Eratosthenes
//!
//! This library computes every prime up to a caller-supplied bound.
//!
//! ## Core Algorithm
//!
//! 1. **Uncross**: allocate `max_value + 1` flags, every candidate in `[2, max_value]` unmarked
//! 2. **Cross out**: for each uncrossed `i <= ⌊√(max_value + 1)⌋`, mark `2i, 3i, …`
//! 3. **Collect**: survivors in `[2, max_value]` are the primes, in increasing order
//!
//! Time O(n log log n), space one bit per integer. Each call owns its own
//! marking array, so concurrent calls share nothing.
//!
//! ## Usage Example
//!
//! ```
//! use eratosthenes::{generate_primes, SieveConfig};
//!
//! assert_eq!(generate_primes(10), vec![2, 3, 5, 7]);
//! assert!(generate_primes(1).is_empty());
//!
//! let outcome = SieveConfig::new(20).with_profile(true).run()?;
//! assert_eq!(outcome.primes.len(), 8);
//! # Ok::<(), eratosthenes::SieveError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod sieve;  // Three-phase marking array
pub mod stats;  // Work accounting for the marking phase
pub mod util;   // Helper functions
/// Python bindings for exposing the sieve to external runtimes.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use sieve::{generate_primes, generate_primes_with_stats, prime_count};
pub use stats::SieveStats;

use thiserror::Error;

/// Default ceiling on `max_value` accepted by [`SieveConfig`]
///
/// About 12 MiB of marking array.
pub const DEFAULT_MAX_ALLOWED: i64 = 100_000_000;

/// Configuration parameters for a sieve run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SieveConfig {
    /// Upper bound (inclusive) of the primes to generate
    pub max_value: i64,

    /// Largest `max_value` this configuration accepts
    pub max_allowed: i64,

    /// Collect [`SieveStats`] for the run
    pub profile: bool,
}

impl SieveConfig {
    /// Create configuration with the default ceiling and profiling off
    pub fn new(max_value: i64) -> Self {
        Self {
            max_value,
            max_allowed: DEFAULT_MAX_ALLOWED,
            profile: false,
        }
    }

    /// Replace the ceiling on `max_value`
    pub fn with_max_allowed(mut self, max_allowed: i64) -> Self {
        self.max_allowed = max_allowed;
        self
    }

    /// Enable or disable statistics collection
    pub fn with_profile(mut self, profile: bool) -> Self {
        self.profile = profile;
        self
    }

    /// Check the bound against the ceiling
    ///
    /// Bounds below 2 are always valid; they produce no primes.
    pub fn validate(&self) -> Result<(), SieveError> {
        if self.max_allowed < 2 {
            return Err(SieveError::InvalidLimit(self.max_allowed));
        }
        if self.max_value > self.max_allowed {
            return Err(SieveError::BoundTooLarge {
                requested: self.max_value,
                limit: self.max_allowed,
            });
        }
        Ok(())
    }

    /// Validate, then run the sieve
    pub fn run(&self) -> Result<SieveOutcome, SieveError> {
        self.validate()?;

        let (primes, stats) = sieve::run(self.max_value, self.profile);
        Ok(SieveOutcome { primes, stats })
    }
}

/// Result of a configured sieve run
#[derive(Debug, Clone)]
pub struct SieveOutcome {
    /// Primes in `[2, max_value]`, strictly increasing
    pub primes: Vec<u64>,

    /// Marking statistics (if profiling was enabled and `max_value >= 2`)
    pub stats: Option<SieveStats>,
}

/// Errors from validating a [`SieveConfig`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// Requested bound exceeds the configured ceiling
    #[error("Bound {requested} exceeds the configured limit {limit}")]
    BoundTooLarge {
        /// Bound that was requested
        requested: i64,
        /// Ceiling that was exceeded
        limit: i64,
    },

    /// Ceiling itself cannot admit any prime
    #[error("Invalid limit {0}: must be at least 2")]
    InvalidLimit(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SieveConfig::new(100);
        assert_eq!(config.max_allowed, DEFAULT_MAX_ALLOWED);
        assert!(!config.profile);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bound_above_ceiling_is_rejected() {
        let err = SieveConfig::new(1_001)
            .with_max_allowed(1_000)
            .run()
            .unwrap_err();
        assert_eq!(
            err,
            SieveError::BoundTooLarge {
                requested: 1_001,
                limit: 1_000
            }
        );
        assert_eq!(err.to_string(), "Bound 1001 exceeds the configured limit 1000");
    }

    #[test]
    fn test_invalid_ceiling() {
        let err = SieveConfig::new(-3).with_max_allowed(1).validate().unwrap_err();
        assert_eq!(err, SieveError::InvalidLimit(1));
    }

    #[test]
    fn test_negative_bound_is_valid_and_empty() {
        let outcome = SieveConfig::new(-5).with_profile(true).run().unwrap();
        assert!(outcome.primes.is_empty());
        assert!(outcome.stats.is_none());
    }

    #[test]
    fn test_profiled_run_carries_stats() {
        let outcome = SieveConfig::new(20).with_profile(true).run().unwrap();
        assert_eq!(outcome.primes, vec![2, 3, 5, 7, 11, 13, 17, 19]);
        let stats = outcome.stats.expect("profiling enabled");
        assert_eq!(stats.prime_count, 8);
        assert_eq!(stats.array_len, 21);
        assert_eq!(stats.iteration_limit, 4);
    }
}
