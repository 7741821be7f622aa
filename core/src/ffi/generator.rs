//! PyO3 wrapper for the Shioi128 generator
//!
//! This module provides the Python interface to the Rust generator.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rng::Shioi128 as RustShioi128;

/// Python wrapper for the Rust Shioi128 generator
///
/// # Example (from Python)
///
/// ```python
/// from shioi_rng_core_rs import Shioi128
///
/// rng = Shioi128(12345)
/// value = rng.next()
/// amount = rng.range(10_000, 100_000)
///
/// rng.jump32()  # advance as if next() had been called 2**32 times
/// s0, s1 = rng.state()
/// ```
#[pyclass(name = "Shioi128")]
pub struct PyShioi128 {
    inner: RustShioi128,
}

#[pymethods]
impl PyShioi128 {
    /// Create a new generator from a 64-bit seed
    #[new]
    fn new(seed: u64) -> Self {
        PyShioi128 {
            inner: RustShioi128::new(seed),
        }
    }

    /// Rebuild a generator from raw state words
    ///
    /// Raises ValueError for the all-zero state, which is a degenerate
    /// fixed point of the transition.
    #[staticmethod]
    fn from_state(s0: u64, s1: u64) -> PyResult<Self> {
        if s0 == 0 && s1 == 0 {
            return Err(PyValueError::new_err(
                "state (0, 0) is a degenerate fixed point",
            ));
        }

        Ok(PyShioi128 {
            inner: RustShioi128::from_state(s0, s1),
        })
    }

    /// Return the current state words as a (s0, s1) tuple
    fn state(&self) -> (u64, u64) {
        self.inner.state()
    }

    /// Produce the next 64-bit value and advance the state
    fn next(&mut self) -> u64 {
        self.inner.next()
    }

    /// Uniform integer in [min, max)
    ///
    /// Raises ValueError if min >= max.
    fn range(&mut self, min: i64, max: i64) -> PyResult<i64> {
        if min >= max {
            return Err(PyValueError::new_err("min must be less than max"));
        }

        Ok(self.inner.range(min, max))
    }

    /// Uniform float in [0.0, 1.0)
    fn next_f64(&mut self) -> f64 {
        self.inner.next_f64()
    }

    /// Advance the state as if next() had been called 2**32 times
    fn jump32(&mut self) {
        self.inner.jump32();
    }

    /// Advance the state as if next() had been called 2**64 times
    fn jump64(&mut self) {
        self.inner.jump64();
    }

    /// Advance the state as if next() had been called 2**96 times
    fn jump96(&mut self) {
        self.inner.jump96();
    }
}
