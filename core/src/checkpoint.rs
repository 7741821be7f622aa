//! Checkpoint - Save/Load Generator State
//!
//! Enables serialization and deserialization of generator state for
//! pause/resume functionality.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored generator continues the exact output
//!   stream of the captured one
//! - **Bit-exactness**: State words are stored verbatim; nothing is
//!   re-derived on restore
//! - **Integrity**: A snapshot carries a hash of its state words and can
//!   only be restored when the hash still matches

use crate::rng::Shioi128;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors surfaced when validating or restoring a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("State hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },

    #[error("Snapshot holds the all-zero state, which is a degenerate fixed point")]
    DegenerateState,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Generator state snapshot
///
/// Captures the complete 128-bit state plus an integrity hash. Restoring a
/// valid snapshot yields a generator whose future output is bit-for-bit
/// identical to the captured one.
///
/// # Example
///
/// ```
/// use shioi_rng_core_rs::{RngSnapshot, Shioi128};
///
/// let mut rng = Shioi128::new(12345);
/// for _ in 0..10 {
///     rng.next();
/// }
///
/// let snapshot = RngSnapshot::capture(&rng).unwrap();
/// let mut restored = snapshot.restore().unwrap();
/// assert_eq!(restored.next(), rng.next());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngSnapshot {
    /// First state word
    pub s0: u64,

    /// Second state word
    pub s1: u64,

    /// SHA256 hash of the state words (for validation)
    pub state_hash: String,
}

impl RngSnapshot {
    /// Capture the current generator state
    pub fn capture(rng: &Shioi128) -> Result<Self, SnapshotError> {
        let (s0, s1) = rng.state();
        let state_hash = compute_state_hash(s0, s1)?;

        Ok(RngSnapshot { s0, s1, state_hash })
    }

    /// Rebuild a generator from this snapshot
    ///
    /// # Errors
    ///
    /// - [`SnapshotError::HashMismatch`] if the stored hash no longer
    ///   matches the state words (the snapshot was corrupted or edited)
    /// - [`SnapshotError::DegenerateState`] if the snapshot holds `(0, 0)`
    pub fn restore(&self) -> Result<Shioi128, SnapshotError> {
        let actual = compute_state_hash(self.s0, self.s1)?;
        if actual != self.state_hash {
            return Err(SnapshotError::HashMismatch {
                expected: self.state_hash.clone(),
                actual,
            });
        }

        if self.s0 == 0 && self.s1 == 0 {
            return Err(SnapshotError::DegenerateState);
        }

        Ok(Shioi128::from_state(self.s0, self.s1))
    }

    /// Serialize this snapshot to a JSON string
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self)
            .map_err(|e| SnapshotError::Serialization(format!("Snapshot serialization failed: {}", e)))
    }

    /// Deserialize a snapshot from a JSON string
    ///
    /// The result is not yet validated; call [`restore`](Self::restore) to
    /// check integrity and rebuild the generator.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json)
            .map_err(|e| SnapshotError::Serialization(format!("Snapshot deserialization failed: {}", e)))
    }
}

/// Compute deterministic SHA256 hash of the state words
///
/// Hashes a canonical JSON rendering (fixed key order) so the hash is
/// stable across processes and platforms.
fn compute_state_hash(s0: u64, s1: u64) -> Result<String, SnapshotError> {
    let canonical = serde_json::json!({ "s0": s0, "s1": s1 });
    let json = serde_json::to_string(&canonical)
        .map_err(|e| SnapshotError::Serialization(format!("State serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}
