//! Output-rate effects applied after the envelope: sample-and-hold bit
//! crushing and power-law compression.

use crate::params::{ParamId, ParameterSet};

/// Sample-and-hold rate reducer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BitCrusher {
    phase: f64,
    freq: f64,
    sweep: f64,
    last: f64,
}

impl BitCrusher {
    pub(crate) fn new(params: &ParameterSet) -> Self {
        Self {
            phase: 0.0,
            freq: 1.0 - params.get(ParamId::BitCrush).powf(1.0 / 3.0),
            sweep: -params.get(ParamId::BitCrushSweep) * 0.000015,
            last: 0.0,
        }
    }

    /// Latches `input` when the phase overflows and returns the held value.
    ///
    /// The phase must strictly exceed one, so even with no crushing a new
    /// value is only taken every second sample.
    #[inline]
    pub(crate) fn process(&mut self, input: f64) -> f64 {
        self.phase += self.freq;
        if self.phase > 1.0 {
            self.phase = 0.0;
            self.last = input;
        }
        self.freq = (self.freq + self.sweep).clamp(0.0, 1.0);
        self.last
    }
}

/// Odd power-law compressor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Compressor {
    factor: f64,
}

impl Compressor {
    pub(crate) fn new(params: &ParameterSet) -> Self {
        Self {
            factor: 1.0 / (1.0 + 4.0 * params.get(ParamId::CompressionAmount)),
        }
    }

    #[inline]
    pub(crate) fn process(&self, input: f64) -> f64 {
        if input > 0.0 {
            input.powf(self.factor)
        } else {
            -(-input).powf(self.factor)
        }
    }
}
