//! Shioi RNG Core - Rust Engine
//!
//! Deterministic pseudorandom number generation with jump-ahead support.
//!
//! # Architecture
//!
//! - **rng**: The Shioi128 generator (seeding, 64-bit output step, jumps)
//! - **checkpoint**: Save/load of generator state with integrity hashing
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded, replayable)
//! 2. Generator state is an owned value; one instance per thread/task
//! 3. State restores must be bit-for-bit, or future output diverges
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod checkpoint;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{RngSnapshot, SnapshotError};
pub use rng::Shioi128;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn shioi_rng_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyShioi128>()?;
    Ok(())
}
