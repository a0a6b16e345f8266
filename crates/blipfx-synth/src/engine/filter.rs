//! Resonant one-pole low-pass followed by a one-pole high-pass.
//!
//! Both filters run per sub-sample. The low-pass cutoff sweeps per
//! sub-sample, the high-pass cutoff once per output sample.

use crate::params::{ParamId, ParameterSet};

/// Low-pass stage: a damped position follower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LowPassFilter {
    pos: f64,
    delta_pos: f64,
    cutoff: f64,
    delta_cutoff: f64,
    damping: f64,
    on: bool,
}

impl LowPassFilter {
    pub(crate) fn new(params: &ParameterSet) -> Self {
        let knob = params.get(ParamId::LpFilterCutoff);
        let resonance = params.get(ParamId::LpFilterResonance);
        let cutoff = knob * knob * knob * 0.1;
        let damping = (5.0 / (1.0 + resonance * resonance * 20.0) * (0.01 + cutoff)).min(0.8);

        Self {
            pos: 0.0,
            delta_pos: 0.0,
            cutoff,
            delta_cutoff: 1.0 + params.get(ParamId::LpFilterCutoffSweep) * 0.0001,
            damping: 1.0 - damping,
            on: knob != 1.0,
        }
    }

    /// Filters one sub-sample, returning the new position.
    #[inline]
    pub(crate) fn process(&mut self, input: f64) -> f64 {
        self.cutoff = (self.cutoff * self.delta_cutoff).clamp(0.0, 0.1);

        if self.on {
            self.delta_pos += (input - self.pos) * self.cutoff;
            self.delta_pos *= self.damping;
        } else {
            self.pos = input;
            self.delta_pos = 0.0;
        }

        self.pos += self.delta_pos;
        self.pos
    }
}

/// High-pass stage: integrates the low-pass output's deltas with leakage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HighPassFilter {
    pos: f64,
    cutoff: f64,
    delta_cutoff: f64,
}

impl HighPassFilter {
    pub(crate) fn new(params: &ParameterSet) -> Self {
        let knob = params.get(ParamId::HpFilterCutoff);
        Self {
            pos: 0.0,
            cutoff: knob * knob * 0.1,
            delta_cutoff: 1.0 + params.get(ParamId::HpFilterCutoffSweep) * 0.0003,
        }
    }

    /// Moves the cutoff by one output sample's sweep.
    #[inline]
    pub(crate) fn sweep(&mut self) {
        if self.delta_cutoff != 0.0 {
            self.cutoff = (self.cutoff * self.delta_cutoff).clamp(0.00001, 0.1);
        }
    }

    #[inline]
    pub(crate) fn process(&mut self, delta: f64) -> f64 {
        self.pos += delta;
        self.pos *= 1.0 - self.cutoff;
        self.pos
    }
}

/// Both filters, active only when either is configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FilterStage {
    enabled: bool,
    low_pass: LowPassFilter,
    high_pass: HighPassFilter,
}

impl FilterStage {
    pub(crate) fn new(params: &ParameterSet) -> Self {
        Self {
            enabled: params.get(ParamId::LpFilterCutoff) != 1.0
                || params.get(ParamId::HpFilterCutoff) != 0.0,
            low_pass: LowPassFilter::new(params),
            high_pass: HighPassFilter::new(params),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Per-output-sample update.
    #[inline]
    pub(crate) fn sweep(&mut self) {
        if self.enabled {
            self.high_pass.sweep();
        }
    }

    /// Per-sub-sample filtering.
    #[inline]
    pub(crate) fn process(&mut self, input: f64) -> f64 {
        if !self.enabled {
            return input;
        }
        let old = self.low_pass.pos;
        let low = self.low_pass.process(input);
        self.high_pass.process(low - old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_bypass() {
        let mut stage = FilterStage::new(&ParameterSet::new());
        assert!(!stage.is_enabled());
        assert_eq!(stage.process(0.37), 0.37);
    }

    #[test]
    fn test_low_pass_smooths_step() {
        let mut params = ParameterSet::new();
        params.set(ParamId::LpFilterCutoff, 0.5);
        let mut stage = FilterStage::new(&params);
        assert!(stage.is_enabled());

        let first = stage.process(1.0);
        assert!(first > 0.0 && first < 0.1);
    }

    #[test]
    fn test_high_pass_removes_dc() {
        let mut params = ParameterSet::new();
        params.set(ParamId::HpFilterCutoff, 0.5);
        let mut stage = FilterStage::new(&params);

        let mut out = 0.0;
        for _ in 0..10_000 {
            out = stage.process(1.0);
        }
        assert!(out.abs() < 1e-3, "{out}");
    }

    #[test]
    fn test_high_pass_sweep_clamps() {
        let mut params = ParameterSet::new();
        params.set(ParamId::HpFilterCutoff, 1.0);
        params.set(ParamId::HpFilterCutoffSweep, 1.0);
        let mut hp = HighPassFilter::new(&params);
        for _ in 0..10_000 {
            hp.sweep();
        }
        assert_eq!(hp.cutoff, 0.1);

        params.set(ParamId::HpFilterCutoffSweep, -1.0);
        let mut hp = HighPassFilter::new(&params);
        for _ in 0..100_000 {
            hp.sweep();
        }
        assert_eq!(hp.cutoff, 0.00001);
    }
}
