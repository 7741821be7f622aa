//! FFI boundary - Python bindings via PyO3
//!
//! Kept minimal: the wrapper exposes the generator operations and raw
//! state access, nothing else.

pub mod generator;
