//! Sieve of Eratosthenes
//!
//! Three phases over a single marking array:
//! 1. Uncross every integer in `[2, max_value]`
//! 2. Cross out multiples of every uncrossed `i <= isqrt(len)`
//! 3. Collect the survivors in increasing order
//!
//! All state lives in a `Sieve` owned by one call. The phases are private
//! so they can only run in order through [`generate_primes`] and friends.

use bitvec::prelude::*;

use crate::stats::{SieveStats, StatsTracker};
use crate::util::isqrt;

/// Marking array for one sieve run
///
/// Bit `i` set means `i` has been crossed out (composite).
/// Bits 0 and 1 are never read as prime candidates.
#[derive(Debug)]
pub(crate) struct Sieve {
    crossed_out: BitVec,
    tracker: StatsTracker,
}

impl Sieve {
    /// Phase 1: allocate `max_value + 1` flags with every candidate uncrossed
    pub(crate) fn uncross_integers_up_to(max_value: usize, profile: bool) -> Self {
        let Some(len) = max_value.checked_add(1) else {
            panic!("bound {} exceeds the address space", max_value);
        };

        Self {
            crossed_out: bitvec![0; len],
            tracker: StatsTracker::new(profile),
        }
    }

    /// Length of the marking array
    pub(crate) fn len(&self) -> usize {
        self.crossed_out.len()
    }

    /// Largest candidate whose multiples need crossing out
    ///
    /// Taken from the array length rather than `max_value`; one extra
    /// candidate at most, never a missed composite.
    pub(crate) fn iteration_limit(&self) -> usize {
        isqrt(self.len())
    }

    /// Whether `i` is still a prime candidate
    fn not_crossed(&self, i: usize) -> bool {
        !self.crossed_out[i]
    }

    /// Phase 2: cross out multiples of every uncrossed candidate up to the limit
    pub(crate) fn cross_out_multiples(&mut self) {
        let limit = self.iteration_limit();
        tracing::debug!(array_len = self.len(), limit, "crossing out multiples");
        self.tracker.record_layout(self.len(), limit);

        for i in 2..=limit {
            if self.not_crossed(i) {
                self.cross_out_multiples_of(i);
            }
        }
    }

    fn cross_out_multiples_of(&mut self, i: usize) {
        let len = self.len();
        let mut crossings = 0;
        for multiple in (2 * i..len).step_by(i) {
            self.crossed_out.set(multiple, true);
            crossings += 1;
        }

        tracing::trace!(prime = i, crossings, "crossed out multiples");
        self.tracker.record_pass(crossings);
    }

    /// Number of uncrossed integers in `[2, max_value]`
    pub(crate) fn uncrossed_count(&self) -> usize {
        self.candidates().count_zeros()
    }

    fn candidates(&self) -> &BitSlice {
        // empty when the array stops short of index 2
        &self.crossed_out[2.min(self.len())..]
    }

    /// Phase 3: collect survivors into an exactly sized vector
    pub(crate) fn into_primes(mut self) -> (Vec<u64>, Option<SieveStats>) {
        let count = self.uncrossed_count();
        let mut primes = Vec::with_capacity(count);
        primes.extend(
            self.candidates()
                .iter_zeros()
                .map(|offset| (offset + 2) as u64),
        );

        tracing::debug!(prime_count = primes.len(), "collected primes");
        self.tracker.record_primes(primes.len());
        (primes, self.tracker.take_profile())
    }
}

/// Generate every prime `p` with `2 <= p <= max_value`, in increasing order.
///
/// Values below 2 yield an empty vector without allocating a marking array.
///
/// # Panics
///
/// Memory is one bit per integer up to `max_value`; a bound too large for
/// the address space panics before or during allocation. Callers bound
/// their input.
///
/// The marking phases are not reachable on their own:
///
/// ```compile_fail
/// use eratosthenes::sieve::Sieve;
///
/// let unmarked = Sieve::uncross_integers_up_to(10, false).into_primes();
/// ```
pub fn generate_primes(max_value: i64) -> Vec<u64> {
    run(max_value, false).0
}

/// Like [`generate_primes`], also returning statistics for the marking phase.
///
/// Statistics are `None` when `max_value < 2`, since no array is built.
pub fn generate_primes_with_stats(max_value: i64) -> (Vec<u64>, Option<SieveStats>) {
    run(max_value, true)
}

/// Number of primes `p` with `2 <= p <= max_value`.
pub fn prime_count(max_value: i64) -> usize {
    if max_value < 2 {
        return 0;
    }
    let mut sieve = Sieve::uncross_integers_up_to(to_index(max_value), false);
    sieve.cross_out_multiples();
    sieve.uncrossed_count()
}

pub(crate) fn run(max_value: i64, profile: bool) -> (Vec<u64>, Option<SieveStats>) {
    if max_value < 2 {
        return (Vec::new(), None);
    }

    let mut sieve = Sieve::uncross_integers_up_to(to_index(max_value), profile);
    sieve.cross_out_multiples();
    sieve.into_primes()
}

/// Positive bounds beyond the address space saturate and panic in phase 1.
fn to_index(max_value: i64) -> usize {
    usize::try_from(max_value).unwrap_or(usize::MAX)
}
