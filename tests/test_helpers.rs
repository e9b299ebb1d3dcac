//! Test helper functions for checking sieve output

#![allow(dead_code)]

/// Naive trial-division primality check
pub fn is_prime_naive(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    (2..n).all(|d| n % d != 0)
}

/// Whether `q` has a divisor in `[2, q - 1]`
pub fn has_proper_divisor(q: u64) -> bool {
    (2..q).any(|d| q % d == 0)
}

/// Primes up to `max_value` by trial division
pub fn primes_naive(max_value: i64) -> Vec<u64> {
    if max_value < 2 {
        return Vec::new();
    }
    (2..=max_value as u64).filter(|&n| is_prime_naive(n)).collect()
}
