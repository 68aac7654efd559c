//! Millisecond delay when no HAL timer is free.
//!
//! `cortex_m::asm::delay` is not an accurate timer but gives a delay of at least the
//! indicated number of clock cycles, so the delay is never shorter than asked for.
//! Any HAL timer delay implementing `DelayNs` can be handed to the shim instead.

pub use embedded_hal::delay::DelayNs;

#[cfg(target_arch = "arm")]
use cortex_m::asm::delay;

// should be set for board not for HAL
#[cfg(feature = "stm32f1xx")]
pub const CORE_CLOCK_HZ: u32 = 8_000_000;

#[cfg(feature = "stm32f4xx")]
pub const CORE_CLOCK_HZ: u32 = 16_000_000;

#[cfg(feature = "stm32f7xx")]
pub const CORE_CLOCK_HZ: u32 = 8_000_000;

#[cfg(feature = "stm32h7xx")]
pub const CORE_CLOCK_HZ: u32 = 8_000_000;

#[cfg(feature = "stm32l4xx")]
pub const CORE_CLOCK_HZ: u32 = 8_000_000;

pub struct CycleDelay {
    #[cfg_attr(not(target_arch = "arm"), allow(dead_code))]
    cycles_per_us: u32,
}

impl CycleDelay {
    pub fn new(core_clock_hz: u32) -> Self {
        // below 1 MHz round up, a short delay is worse than a long one
        CycleDelay { cycles_per_us: core_clock_hz.div_ceil(1_000_000) }
    }

    #[cfg(any(
        feature = "stm32f1xx",
        feature = "stm32f4xx",
        feature = "stm32f7xx",
        feature = "stm32h7xx",
        feature = "stm32l4xx",
    ))]
    pub fn for_board() -> Self {
        Self::new(CORE_CLOCK_HZ)
    }
}

/// Hand `us` microseconds to `spin` as cycle counts that each fit in a u32.
#[cfg_attr(not(target_arch = "arm"), allow(dead_code))]
fn spin_us(us: u32, cycles_per_us: u32, mut spin: impl FnMut(u32)) {
    let chunk_us = u32::MAX / cycles_per_us.max(1);
    let mut left = us;
    while left > 0 {
        let step = left.min(chunk_us);
        spin(step * cycles_per_us);
        left -= step;
    }
}

#[cfg(target_arch = "arm")]
impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_us(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        spin_us(us, self.cycles_per_us, delay);
    }

    fn delay_ms(&mut self, ms: u32) {
        // one millisecond at a time so long waits do not overflow the cycle count
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    fn total_cycles(us: u32, cycles_per_us: u32) -> (u64, Vec<u32>) {
        let mut chunks = Vec::new();
        spin_us(us, cycles_per_us, |c| chunks.push(c));
        (chunks.iter().map(|&c| u64::from(c)).sum(), chunks)
    }

    #[test]
    fn cycles_per_us_round_up() {
        assert_eq!(CycleDelay::new(16_000_000).cycles_per_us, 16);
        assert_eq!(CycleDelay::new(500_000).cycles_per_us, 1);
    }

    #[test]
    fn short_wait_is_one_chunk() {
        let (total, chunks) = total_cycles(1_000, 16);
        assert_eq!(total, 16_000);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn zero_wait_spins_nothing() {
        let (total, chunks) = total_cycles(0, 16);
        assert_eq!(total, 0);
        assert!(chunks.is_empty());
    }

    #[test]
    fn long_wait_is_not_cut_short() {
        // 1000 s at 16 MHz is far past u32::MAX cycles
        let (total, chunks) = total_cycles(1_000_000_000, 16);
        assert_eq!(total, 16_000_000_000);
        assert!(chunks.len() > 1);
    }

    #[test]
    fn longest_wait_at_fast_clock() {
        let (total, _) = total_cycles(u32::MAX, 480);
        assert_eq!(total, u64::from(u32::MAX) * 480);
    }
}
