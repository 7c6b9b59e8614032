//! Sources of pseudo-random hex digits.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Produces lowercase hexadecimal digits.
pub trait HexSource {
    /// Return exactly `len` digits from `0-9a-f`.
    fn hex_digits(&mut self, len: usize) -> String;
}

impl<S: HexSource + ?Sized> HexSource for &mut S {
    fn hex_digits(&mut self, len: usize) -> String {
        (**self).hex_digits(len)
    }
}

/// Hex digits drawn uniformly from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomHex<R> {
    rng: R,
}

impl<R: Rng> RandomHex<R> {
    pub fn new(rng: R) -> Self {
        RandomHex { rng }
    }
}

impl RandomHex<ThreadRng> {
    /// Thread-local generator, seeded from the OS.
    pub fn thread() -> Self {
        RandomHex::new(rand::rng())
    }
}

impl RandomHex<StdRng> {
    /// Reproducible generator for tests and replay.
    pub fn seeded(seed: u64) -> Self {
        RandomHex::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> HexSource for RandomHex<R> {
    fn hex_digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(HEX_DIGITS[self.rng.random_range(0..HEX_DIGITS.len())]))
            .collect()
    }
}
