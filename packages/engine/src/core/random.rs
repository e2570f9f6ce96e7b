//! Scatter randomness
//!
//! xorshift32 keeps the hot loop allocation-free. The state is seeded from the
//! wall clock, so two rebuilds of the same text never share a trajectory.

#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform source in [0, 1)
pub struct RandomSource {
    state: u32,
}

impl RandomSource {
    pub fn from_clock() -> Self {
        Self::with_seed(clock_seed())
    }

    pub fn with_seed(seed: u32) -> Self {
        // xorshift has a fixed point at zero
        Self { state: if seed == 0 { 0x9E37_79B9 } else { seed } }
    }

    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fit an f32 mantissa exactly
        (xorshift32(&mut self.state) >> 8) as f32 / (1u32 << 24) as f32
    }
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u32 {
    let now = js_sys::Date::now();
    let jitter = js_sys::Math::random();
    (now as u64 as u32) ^ ((jitter * u32::MAX as f64) as u32)
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(0x2545_F491)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_f32_stays_in_unit_interval() {
        let mut rng = RandomSource::with_seed(12345);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn zero_seed_does_not_stick() {
        let mut rng = RandomSource::with_seed(0);
        let a = rng.next_f32();
        let b = rng.next_f32();
        assert_ne!(a, b);
    }
}
