//! Voss-McCartney pink noise.
//!
//! Five white sub-generators are summed. Sub-generator `i` is redrawn
//! whenever bit `i` of a wrapping 5-bit counter changes, so low bits update
//! often and high bits rarely. The result has roughly 1/f spectral density.

use rand::Rng;

/// Number of white sub-generators.
pub const PINK_GENERATORS: usize = 5;

const MAX_INDEX: u32 = (1 << PINK_GENERATORS) - 1;

/// Pink noise source producing values in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct PinkNoise {
    index: u32,
    white: [f64; PINK_GENERATORS],
}

impl PinkNoise {
    /// Creates a generator with every sub-value freshly drawn.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut white = [0.0; PINK_GENERATORS];
        for value in white.iter_mut() {
            *value = rng.gen::<f64>();
        }
        Self { index: 0, white }
    }

    /// Advances the counter and returns the next value in `[0, 1]`.
    ///
    /// Callers that want a bipolar signal rescale with `2x - 1`.
    pub fn next_value<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let last = self.index;
        self.index += 1;
        if self.index > MAX_INDEX {
            self.index = 0;
        }

        let changed = last ^ self.index;
        let mut sum = 0.0;
        for (bit, value) in self.white.iter_mut().enumerate() {
            if changed & (1 << bit) != 0 {
                *value = rng.gen::<f64>();
            }
            sum += *value;
        }
        sum / PINK_GENERATORS as f64
    }
}
