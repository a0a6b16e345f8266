//! 15-bit linear-feedback shift registers for the one-bit noise voices.

/// Initial register state.
pub const LFSR_SEED: u32 = 1 << 14;

/// Which bit is XORed with bit 0 to produce the feedback bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LfsrTap {
    /// Bit 1, matching the SN76489 periodic noise of the BBC Micro.
    OneBit,
    /// Bit 3, a buzzier sequence with no hardware counterpart.
    Buzz,
}

impl LfsrTap {
    fn shift(self) -> u32 {
        match self {
            LfsrTap::OneBit => 1,
            LfsrTap::Buzz => 3,
        }
    }
}

/// Pure transition: returns the next register state.
#[inline]
pub fn lfsr_step(state: u32, tap: LfsrTap) -> u32 {
    let feed = ((state >> tap.shift()) & 1) ^ (state & 1);
    (state >> 1) | (feed << 14)
}

/// Output level of a register state: `+0.5` when bit 0 is clear, else `-0.5`.
#[inline]
pub fn lfsr_level(state: u32) -> f64 {
    f64::from(!state & 1) - 0.5
}

/// A shift register together with its last output level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lfsr {
    tap: LfsrTap,
    state: u32,
    value: f64,
}

impl Lfsr {
    /// Seeded register with a zero output level.
    pub fn new(tap: LfsrTap) -> Self {
        Self {
            tap,
            state: LFSR_SEED,
            value: 0.0,
        }
    }

    /// Advances one step and latches the new output level.
    pub fn clock(&mut self) {
        self.state = lfsr_step(self.state, self.tap);
        self.value = lfsr_level(self.state);
    }

    /// Last latched output level.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Raw register state.
    pub fn state(&self) -> u32 {
        self.state
    }
}
