//! Shioi128 random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes.
//!
//! # Algorithm
//!
//! Shioi128 keeps 128 bits of state in two 64-bit words. The state
//! transition is an LFSR-style update that is linear over GF(2); the output
//! adds a nonlinear scramble (a 64-bit multiply followed by a rotate) on
//! top of it. Because the transition itself is linear, the state reachable
//! after 2^32, 2^64 or 2^96 steps can be computed by evaluating a fixed
//! 128-bit jump polynomial against the state orbit instead of stepping
//! that many times.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact runs)
//! - Testing (verify behavior)
//! - Research (validate results)

use serde::{Deserialize, Serialize};

/// Output scramble multiplier.
const OUTPUT_MUL: u64 = 0xD2B74407B1CE6E93;

/// Rotation applied to the scrambled word before adding s1.
const OUTPUT_ROT: u32 = 29;

/// Knuth MMIX LCG constants, used by seeding only.
const SEED_MUL: u64 = 6364136223846793005;
const SEED_ADD: u64 = 1442695040888963407;

/// Jump polynomial advancing the state by 2^32 steps.
const JUMP_POLY_2_32: [u64; 2] = [0x8003A4B944F009D0, 0x7FFE925EEBD5615B];

/// Jump polynomial advancing the state by 2^96 steps.
const JUMP_POLY_2_96: [u64; 2] = [0x8003A4B944F009D1, 0x7FFE925EEBD5615B];

/// Rotate left.
#[inline]
fn rotl(x: u64, k: u32) -> u64 {
    (x << k) | (x >> (64 - k))
}

/// Deterministic random number generator using Shioi128
///
/// The state is an owned value: create as many independent instances as
/// needed (e.g. one per thread) instead of sharing one. The all-zero state
/// `(0, 0)` is a fixed point of the transition and yields a constant output
/// stream; seeding makes such a state statistically improbable, and callers
/// restoring raw state must uphold the same precondition.
///
/// # Example
/// ```
/// use shioi_rng_core_rs::Shioi128;
///
/// let mut rng = Shioi128::new(12345);
/// let value = rng.next();
/// let range_value = rng.range(0, 100); // [0, 100)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shioi128 {
    /// First state word
    s0: u64,
    /// Second state word
    s1: u64,
}

impl Shioi128 {
    /// Create a new RNG with given seed
    ///
    /// Any 64-bit seed is accepted, including zero. Seeding runs two rounds
    /// of a 64-bit LCG over the seed so that seeds differing in a single
    /// bit still produce well-separated states.
    ///
    /// # Example
    /// ```
    /// use shioi_rng_core_rs::Shioi128;
    ///
    /// let rng = Shioi128::new(401);
    /// assert_eq!(rng.state(), (0x6C64F673ED93B6CC, 0x97C703D5F6C9D72B));
    /// ```
    pub fn new(seed: u64) -> Self {
        let s0 = seed.wrapping_mul(SEED_MUL).wrapping_add(SEED_ADD);
        let s1 = s0.wrapping_mul(SEED_MUL).wrapping_add(SEED_ADD);
        Self { s0, s1 }
    }

    /// Rebuild an RNG from raw state words (for checkpointing/replay)
    ///
    /// The words must be exactly the pair returned by [`state`](Self::state)
    /// or the future output stream diverges. The caller must not pass
    /// `(0, 0)`; that state is a degenerate fixed point.
    pub fn from_state(s0: u64, s1: u64) -> Self {
        Self { s0, s1 }
    }

    /// Get current state words (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use shioi_rng_core_rs::Shioi128;
    ///
    /// let mut rng = Shioi128::new(12345);
    /// rng.next();
    /// let (s0, s1) = rng.state();
    ///
    /// // Later, can recreate the RNG at the same point
    /// let rng2 = Shioi128::from_state(s0, s1);
    /// assert_eq!(rng2.state(), rng.state());
    /// ```
    pub fn state(&self) -> (u64, u64) {
        (self.s0, self.s1)
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state and returns a random value. The
    /// output is computed from the state *before* the update.
    ///
    /// # Example
    /// ```
    /// use shioi_rng_core_rs::Shioi128;
    ///
    /// let mut rng = Shioi128::new(401);
    /// assert_eq!(rng.next(), 0xF8D7B7BA91C4D17A);
    /// ```
    pub fn next(&mut self) -> u64 {
        let (s0, s1) = (self.s0, self.s1);
        let result = rotl(s0.wrapping_mul(OUTPUT_MUL), OUTPUT_ROT).wrapping_add(s1);

        self.s0 = s1;
        // The right shift is arithmetic: the top bit of s0 propagates down.
        self.s1 = (s0 << 2) ^ (((s0 as i64) >> 19) as u64) ^ s1;

        result
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use shioi_rng_core_rs::Shioi128;
    ///
    /// let mut rng = Shioi128::new(12345);
    /// let amount = rng.range(10_000, 100_000);
    /// assert!(amount >= 10_000 && amount < 100_000);
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Uses the top 53 bits for a full mantissa.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Advance the state as if [`next`](Self::next) had been called 2^32
    /// times
    ///
    /// Useful for partitioning one seed into many non-overlapping
    /// subsequences: seed once, then hand each consumer a clone jumped a
    /// different number of times.
    ///
    /// # Example
    /// ```
    /// use shioi_rng_core_rs::Shioi128;
    ///
    /// let rng = Shioi128::new(12345);
    /// let mut stream_b = rng.clone();
    /// stream_b.jump32(); // disjoint from rng for the next 2^32 draws
    /// ```
    pub fn jump32(&mut self) {
        self.jump(JUMP_POLY_2_32);
    }

    /// Advance the state as if [`next`](Self::next) had been called 2^64
    /// times
    ///
    /// The jump polynomial for this distance collapses to `{0x3, 0}`, so
    /// the new state is computed in closed form (one extra transition
    /// application XORed in) instead of the 128-step generic evaluation.
    pub fn jump64(&mut self) {
        let (s0, s1) = (self.s0, self.s1);

        self.s0 = s0 ^ s1;
        self.s1 = (s0 << 2) ^ (((s0 as i64) >> 19) as u64);
    }

    /// Advance the state as if [`next`](Self::next) had been called 2^96
    /// times
    pub fn jump96(&mut self) {
        self.jump(JUMP_POLY_2_96);
    }

    /// Evaluate a jump polynomial against the current state orbit.
    ///
    /// Square-and-multiply over GF(2): for each set bit b of the
    /// polynomial, the state reached after b plain steps is XORed into the
    /// accumulator; the running state is stepped once per bit regardless.
    /// Always exactly 128 `next` calls, whatever the polynomial.
    fn jump(&mut self, jumppoly: [u64; 2]) {
        let mut t = (0u64, 0u64);

        for word in jumppoly {
            for b in 0..64 {
                if (word >> b) & 1 == 1 {
                    t.0 ^= self.s0;
                    t.1 ^= self.s1;
                }
                self.next();
            }
        }

        self.s0 = t.0;
        self.s1 = t.1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Polynomial with only bit `b` set, i.e. "the state after b steps".
    fn monomial(b: usize) -> [u64; 2] {
        let mut poly = [0u64; 2];
        poly[b / 64] = 1u64 << (b % 64);
        poly
    }

    #[test]
    fn test_seed_401_expected_state() {
        let rng = Shioi128::new(401);
        assert_eq!(rng.state(), (0x6C64F673ED93B6CC, 0x97C703D5F6C9D72B));
    }

    #[test]
    fn test_zero_seed_accepted_and_nonzero_state() {
        let rng = Shioi128::new(0);
        assert_ne!(rng.state(), (0, 0), "Zero seed must not yield zero state");
    }

    #[test]
    fn test_zero_state_is_fixed_point() {
        let mut rng = Shioi128::from_state(0, 0);
        for _ in 0..10 {
            assert_eq!(rng.next(), 0);
            assert_eq!(rng.state(), (0, 0), "Zero state should never advance");
        }
    }

    #[test]
    #[should_panic(expected = "min must be less than max")]
    fn test_range_invalid_bounds() {
        let mut rng = Shioi128::new(12345);
        rng.range(100, 50); // min > max should panic
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut rng = Shioi128::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!(
                val >= 0.0 && val < 1.0,
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }

    #[test]
    fn test_next_f64_deterministic() {
        let mut rng1 = Shioi128::new(99999);
        let mut rng2 = Shioi128::new(99999);

        for _ in 0..100 {
            let val1 = rng1.next_f64();
            let val2 = rng2.next_f64();
            assert_eq!(val1, val2, "next_f64() not deterministic");
        }
    }

    #[test]
    fn test_monomial_jump_equals_stepping() {
        // A polynomial whose only set bit is b accumulates exactly the
        // state reached after b steps, so the generic routine must land
        // where b plain next() calls land.
        for b in [0usize, 1, 2, 5, 19, 63, 64, 65, 100, 127] {
            let mut jumped = Shioi128::new(401);
            jumped.jump(monomial(b));

            let mut stepped = Shioi128::new(401);
            for _ in 0..b {
                stepped.next();
            }

            assert_eq!(
                jumped.state(),
                stepped.state(),
                "monomial jump of degree {} diverged from stepping",
                b
            );
        }
    }

    #[test]
    fn test_jump64_matches_generic_poly() {
        let mut closed_form = Shioi128::new(401);
        closed_form.jump64();

        let mut generic = Shioi128::new(401);
        generic.jump([0x3, 0]);

        assert_eq!(closed_form.state(), generic.state());
    }

    proptest! {
        #[test]
        fn prop_jump64_closed_form_equivalence(s0: u64, s1: u64) {
            let mut closed_form = Shioi128::from_state(s0, s1);
            closed_form.jump64();

            let mut generic = Shioi128::from_state(s0, s1);
            generic.jump([0x3, 0]);

            prop_assert_eq!(closed_form.state(), generic.state());
        }

        #[test]
        fn prop_monomial_jump_equivalence(s0: u64, s1: u64, b in 0usize..128) {
            let mut jumped = Shioi128::from_state(s0, s1);
            jumped.jump(monomial(b));

            let mut stepped = Shioi128::from_state(s0, s1);
            for _ in 0..b {
                stepped.next();
            }

            prop_assert_eq!(jumped.state(), stepped.state());
        }
    }
}
