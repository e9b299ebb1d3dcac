//! Sieve statistics and profiling
//!
//! Records how much work the marking phase did for a single call

mod tracker;

pub use tracker::StatsTracker;

/// Work summary for one sieve run (if profiling was enabled)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SieveStats {
    /// Length of the marking array (`max_value + 1`)
    pub array_len: usize,

    /// Largest candidate examined during marking
    pub iteration_limit: usize,

    /// Number of candidates whose multiples were crossed out
    pub passes: usize,

    /// Total writes into the marking array
    pub crossings: usize,

    /// Primes collected from the survivors
    pub prime_count: usize,
}

impl SieveStats {
    /// Fraction of candidates in `[2, max_value]` that survived as primes
    pub fn density(&self) -> f64 {
        let candidates = self.array_len.saturating_sub(2);
        if candidates == 0 {
            return 0.0;
        }
        self.prime_count as f64 / candidates as f64
    }

    /// Generate report
    pub fn report(&self) -> String {
        format!(
            "Array length: {}\nIteration limit: {}\nMarking:\n  Passes: {}\n  Crossings: {}\nPrimes: {} ({:.2}% of candidates)",
            self.array_len,
            self.iteration_limit,
            self.passes,
            self.crossings,
            self.prime_count,
            self.density() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_every_counter() {
        let stats = SieveStats {
            array_len: 11,
            iteration_limit: 3,
            passes: 2,
            crossings: 7,
            prime_count: 4,
        };
        let report = stats.report();
        assert!(report.contains("Array length: 11"));
        assert!(report.contains("Iteration limit: 3"));
        assert!(report.contains("Passes: 2"));
        assert!(report.contains("Crossings: 7"));
        assert!(report.contains("Primes: 4 (44.44% of candidates)"));
    }

    #[test]
    fn test_density_of_empty_range() {
        let stats = SieveStats {
            array_len: 0,
            iteration_limit: 0,
            passes: 0,
            crossings: 0,
            prime_count: 0,
        };
        assert_eq!(stats.density(), 0.0);
    }
}
