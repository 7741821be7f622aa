//! Deterministic random number generation
//!
//! Uses the Shioi128 algorithm for fast, deterministic random number
//! generation with O(1)/O(128) jump-ahead by 2^32, 2^64 and 2^96 steps.
//! CRITICAL: All randomness in dependent simulations MUST go through this
//! module.

mod shioi;

pub use shioi::Shioi128;
