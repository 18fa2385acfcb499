//! The random source that drives a run, and helpers for drawing genes from it.

use crate::constants::MONKE_GENE_RANGE;
use rand::{Rng, RngCore, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// wyrand. Small, fast, and good enough for roulette draws.
#[derive(Debug, Clone)]
pub struct WyRng {
    state: u64,
}

impl WyRng {
    pub fn seeded(state: u64) -> Self {
        Self { state }
    }
}

impl RngCore for WyRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        const WY_CONST_0: u64 = 0x2d35_8dcc_aa6c_78a5;
        const WY_CONST_1: u64 = 0x8bb8_4b93_962e_acc9;
        self.state = self.state.wrapping_add(WY_CONST_0);
        let t = u128::from(self.state) * u128::from(self.state ^ WY_CONST_1);
        (t as u64) ^ (t >> 64) as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for WyRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seeded(u64::from_le_bytes(seed))
    }
}

/// Nanoseconds since the unix epoch. A clock set before the epoch still yields a usable seed.
pub fn seed_clock() -> u64 {
    let since = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|err| err.duration());
    since.as_nanos() as u64
}

pub fn default_rng() -> WyRng {
    WyRng::seeded(seed_clock())
}

/// A uniformly random printable gene
#[inline]
pub fn gene(rng: &mut impl RngCore) -> u8 {
    rng.random_range(MONKE_GENE_RANGE)
}

/// A uniformly random draw in [0, 1)
#[inline]
pub fn roll(rng: &mut impl RngCore) -> f64 {
    rng.random::<f64>()
}
