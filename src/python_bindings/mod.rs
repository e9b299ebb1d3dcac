//! Python bindings that expose the sieve via PyO3.
use pyo3::{exceptions::PyValueError, prelude::*, types::PyModule};

use crate::SieveConfig;

/// Generate all primes up to and including `max_value`.
///
/// Args:
///     max_value: Inclusive upper bound. Values below 2 yield an empty list.
///
/// Returns:
///     List of primes in increasing order.
#[pyfunction]
#[pyo3(name = "generate_primes")]
pub fn py_generate_primes(py: Python<'_>, max_value: i64) -> Vec<u64> {
    py.allow_threads(|| crate::generate_primes(max_value))
}

/// Count the primes up to and including `max_value`.
#[pyfunction]
#[pyo3(name = "prime_count")]
pub fn py_prime_count(py: Python<'_>, max_value: i64) -> usize {
    py.allow_threads(|| crate::prime_count(max_value))
}

/// Generate primes, refusing bounds above `max_allowed`.
///
/// Raises:
///     ValueError: If `max_value` exceeds `max_allowed`.
#[pyfunction]
#[pyo3(name = "generate_primes_bounded")]
pub fn py_generate_primes_bounded(
    py: Python<'_>,
    max_value: i64,
    max_allowed: i64,
) -> PyResult<Vec<u64>> {
    let config = SieveConfig::new(max_value).with_max_allowed(max_allowed);
    let outcome = py
        .allow_threads(|| config.run())
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok(outcome.primes)
}

/// Create Python module.
#[pymodule]
pub fn eratosthenes_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_generate_primes, m)?)?;
    m.add_function(wrap_pyfunction!(py_prime_count, m)?)?;
    m.add_function(wrap_pyfunction!(py_generate_primes_bounded, m)?)?;
    Ok(())
}
