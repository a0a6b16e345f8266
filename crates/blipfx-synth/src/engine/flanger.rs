//! Short comb-style flanger over a fixed ring buffer.

use crate::params::{ParamId, ParameterSet};

/// Ring buffer length; also one past the largest usable offset.
pub const FLANGER_BUFFER_LEN: usize = 1024;

const MASK: usize = FLANGER_BUFFER_LEN - 1;

/// Delay-line flanger mixing each sub-sample with an earlier one.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Flanger {
    enabled: bool,
    offset: f64,
    delta_offset: f64,
    int_offset: usize,
    pos: usize,
    buffer: Vec<f64>,
}

impl Flanger {
    pub(crate) fn new(params: &ParameterSet) -> Self {
        let offset = params.get(ParamId::FlangerOffset);
        let sweep = params.get(ParamId::FlangerSweep);

        let magnitude = offset * offset * 1020.0;
        Self {
            enabled: offset != 0.0 || sweep != 0.0,
            offset: if offset < 0.0 { -magnitude } else { magnitude },
            delta_offset: sweep * sweep * sweep * 0.2,
            int_offset: 0,
            pos: 0,
            buffer: vec![0.0; FLANGER_BUFFER_LEN],
        }
    }

    #[cfg(test)]
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Per-output-sample update of the delay offset.
    ///
    /// The offset is used by magnitude and capped at the buffer size.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if !self.enabled {
            return;
        }
        self.offset += self.delta_offset;
        let whole = (self.offset as i64).unsigned_abs();
        self.int_offset = whole.min(MASK as u64) as usize;
    }

    /// Per-sub-sample processing.
    #[inline]
    pub(crate) fn process(&mut self, input: f64) -> f64 {
        if !self.enabled {
            return input;
        }
        self.buffer[self.pos & MASK] = input;
        let delayed = self.buffer[(self.pos + FLANGER_BUFFER_LEN - self.int_offset) & MASK];
        self.pos = (self.pos + 1) & MASK;
        input + delayed
    }

    #[cfg(test)]
    pub(crate) fn int_offset(&self) -> usize {
        self.int_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flanger(offset: f64, sweep: f64) -> Flanger {
        let mut params = ParameterSet::new();
        params.set(ParamId::FlangerOffset, offset);
        params.set(ParamId::FlangerSweep, sweep);
        Flanger::new(&params)
    }

    #[test]
    fn test_disabled_by_default() {
        let mut f = flanger(0.0, 0.0);
        assert!(!f.is_enabled());
        f.advance();
        assert_eq!(f.process(0.25), 0.25);
    }

    #[test]
    fn test_zero_offset_doubles_signal() {
        let mut f = flanger(0.0, 0.0001);
        f.advance();
        assert_eq!(f.int_offset(), 0);
        assert_eq!(f.process(0.25), 0.5);
    }

    #[test]
    fn test_delayed_copy_appears_after_offset() {
        let mut f = flanger(0.1, 0.0);
        f.advance();
        // 0.1^2 * 1020 = 10.2
        assert_eq!(f.int_offset(), 10);

        assert_eq!(f.process(1.0), 1.0);
        for _ in 0..9 {
            assert_eq!(f.process(0.0), 0.0);
        }
        assert_eq!(f.process(0.0), 1.0);
    }

    #[test]
    fn test_negative_offset_uses_magnitude() {
        let mut f = flanger(-0.1, 0.0);
        f.advance();
        assert_eq!(f.int_offset(), 10);
    }

    #[test]
    fn test_offset_capped() {
        let mut f = flanger(1.0, 1.0);
        for _ in 0..100 {
            f.advance();
        }
        assert_eq!(f.int_offset(), 1023);

        let mut f = flanger(-1.0, -1.0);
        for _ in 0..100 {
            f.advance();
        }
        assert_eq!(f.int_offset(), 1023);
    }
}
