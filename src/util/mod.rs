//! Utility functions

/// Exact integer square root: the largest `r` with `r * r <= n`.
///
/// Seeds from `f64::sqrt` and then corrects the estimate, since the float
/// result can be off by one once `n` exceeds 2^52.
pub fn isqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }

    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |square| square > n) {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .map_or(false, |square| square <= n)
    {
        root += 1;
    }
    root
}
