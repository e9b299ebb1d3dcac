//! Work tracking for the marking phase

use super::SieveStats;

/// Tracks work done during one sieve run
#[derive(Debug)]
pub struct StatsTracker {
    /// Profile data (if enabled)
    profile: Option<SieveStats>,
}

impl StatsTracker {
    /// Create new tracker
    pub fn new(profile_enabled: bool) -> Self {
        Self {
            profile: if profile_enabled {
                Some(SieveStats {
                    array_len: 0,
                    iteration_limit: 0,
                    passes: 0,
                    crossings: 0,
                    prime_count: 0,
                })
            } else {
                None
            },
        }
    }

    /// Record the shape of the marking array
    pub fn record_layout(&mut self, array_len: usize, iteration_limit: usize) {
        if let Some(ref mut p) = self.profile {
            p.array_len = array_len;
            p.iteration_limit = iteration_limit;
        }
    }

    /// Record one crossing-out pass and the writes it made
    pub fn record_pass(&mut self, crossings: usize) {
        if let Some(ref mut p) = self.profile {
            p.passes += 1;
            p.crossings += crossings;
        }
    }

    /// Record the number of survivors
    pub fn record_primes(&mut self, prime_count: usize) {
        if let Some(ref mut p) = self.profile {
            p.prime_count = prime_count;
        }
    }

    /// Take profile (consumes tracker)
    pub fn take_profile(&mut self) -> Option<SieveStats> {
        self.profile.take()
    }
}
