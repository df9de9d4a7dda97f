//! Park-Miller "minimal standard" generator with multiplier 48271.

use rand_core::{RngCore, impls};

const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 48_271;

/// Lehmer generator `x' = 48271 * x mod (2^31 - 1)`.
///
/// Each call yields 31 bits; [`RngCore::next_u64`] joins two draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minstd {
    state: u32,
}

impl Minstd {
    /// Seed the generator. A seed congruent to 0 would lock the generator at
    /// 0, so it is replaced by 1.
    pub fn new(seed: u64) -> Self {
        let reduced = seed % MODULUS;
        let state = if reduced == 0 { 1 } else { reduced as u32 };
        Self { state }
    }

    /// Advance and return the raw state, in `1..2^31 - 1`.
    pub fn next_raw(&mut self) -> u32 {
        self.state = (u64::from(self.state) * MULTIPLIER % MODULUS) as u32;
        self.state
    }
}

impl RngCore for Minstd {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}
