//! Seeded PRNG for reproducible shape jitter.

/// Mulberry32: a tiny 32-bit generator that is cheap, well distributed for
/// procedural graphics, and trivially portable. The same seed always yields
/// the same sequence, which is what makes generated shapes shareable by seed.
///
/// Every intermediate step is unsigned 32-bit with wraparound; using anything
/// wider without masking changes the output stream.
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next sample in `[0, 1)`, advancing the internal state.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference sequence for seed 12345, derived by evaluating the bit
    // operations above with explicit 32-bit masking. Division by 2^32 is
    // exact in f64, so equality here is exact, not approximate.
    const GOLDEN_12345: [f64; 4] = [
        0.9797282677609473,
        0.3067522644996643,
        0.484205421525985,
        0.817934412509203,
    ];

    #[test]
    fn golden_sequence_seed_12345() {
        let mut rng = Mulberry32::new(12345);
        for expected in GOLDEN_12345 {
            assert_eq!(rng.next_f64(), expected);
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Mulberry32::new(0xDEAD_BEEF);
        let mut b = Mulberry32::new(0xDEAD_BEEF);
        for _ in 0..64 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn samples_stay_in_unit_interval() {
        let mut rng = Mulberry32::new(0);
        for _ in 0..1024 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
