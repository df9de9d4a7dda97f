//! xorshift128+ (Vigna), with the generator state held per instance.

use rand_core::{RngCore, impls};

/// Fixed second state word; the seed supplies the first.
pub const SECOND_WORD: u64 = 0x8000_0000_8000_4021;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift128Plus {
    state: [u64; 2],
}

impl Xorshift128Plus {
    pub fn new(seed: u64) -> Self {
        Self {
            state: [seed, SECOND_WORD],
        }
    }

    pub fn next_raw(&mut self) -> u64 {
        let mut x = self.state[0];
        let y = self.state[1];
        self.state[0] = y;
        x ^= x << 23;
        x ^= x >> 17;
        x ^= y ^ (y >> 26);
        self.state[1] = x;
        x.wrapping_add(y)
    }
}

impl RngCore for Xorshift128Plus {
    fn next_u32(&mut self) -> u32 {
        // High bits are the stronger ones
        (self.next_raw() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_raw()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}
