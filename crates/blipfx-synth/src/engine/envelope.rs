//! Attack / sustain / decay volume envelope.
//!
//! Stage lengths are counted in output samples. The sustain stage starts
//! loud and tilts down to unity according to the punch amount.

use crate::params::{ParamId, ParameterSet};

/// Scale from a squared time knob to a stage length in samples.
const STAGE_SCALE: f64 = 100_000.0;

/// Envelope stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    /// Ramp from silence to full volume.
    Attack,
    /// Full volume plus a decaying punch boost.
    Sustain,
    /// Ramp down to silence.
    Decay,
    /// Terminal; the sound is over.
    Finished,
}

impl EnvelopeStage {
    /// Numeric index, 0 through 3.
    pub fn index(self) -> u8 {
        match self {
            EnvelopeStage::Attack => 0,
            EnvelopeStage::Sustain => 1,
            EnvelopeStage::Decay => 2,
            EnvelopeStage::Finished => 3,
        }
    }

    fn next(self) -> Self {
        match self {
            EnvelopeStage::Attack => EnvelopeStage::Sustain,
            EnvelopeStage::Sustain => EnvelopeStage::Decay,
            EnvelopeStage::Decay | EnvelopeStage::Finished => EnvelopeStage::Finished,
        }
    }
}

#[inline]
fn reciprocal(length: f64) -> f64 {
    if length > 0.0 {
        1.0 / length
    } else {
        0.0
    }
}

/// Envelope state.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Envelope {
    stage: EnvelopeStage,
    time: f64,
    length: f64,
    lengths: [f64; 3],
    over_lengths: [f64; 3],
    punch: f64,
    volume: f64,
}

impl Envelope {
    /// Builds the envelope from already length-clamped parameters.
    pub(crate) fn new(params: &ParameterSet) -> Self {
        let attack = params.get(ParamId::AttackTime);
        let sustain = params.get(ParamId::SustainTime);
        let decay = params.get(ParamId::DecayTime);

        let lengths = [
            attack * attack * STAGE_SCALE,
            sustain * sustain * STAGE_SCALE,
            decay * decay * STAGE_SCALE + 10.0,
        ];

        Self {
            stage: EnvelopeStage::Attack,
            time: 0.0,
            length: lengths[0],
            lengths,
            over_lengths: lengths.map(reciprocal),
            punch: params.get(ParamId::SustainPunch),
            volume: 0.0,
        }
    }

    /// Advances one sample and returns the volume for it.
    pub(crate) fn advance(&mut self) -> f64 {
        self.time += 1.0;
        if self.time > self.length {
            self.time = 0.0;
            self.stage = self.stage.next();
            match self.stage {
                EnvelopeStage::Sustain => self.length = self.lengths[1],
                EnvelopeStage::Decay => self.length = self.lengths[2],
                _ => {}
            }
        }

        self.volume = match self.stage {
            EnvelopeStage::Attack => self.time * self.over_lengths[0],
            EnvelopeStage::Sustain => {
                1.0 + (1.0 - self.time * self.over_lengths[1]) * 2.0 * self.punch
            }
            EnvelopeStage::Decay => 1.0 - self.time * self.over_lengths[2],
            EnvelopeStage::Finished => 0.0,
        };
        self.volume
    }

    #[inline]
    pub(crate) fn stage(&self) -> EnvelopeStage {
        self.stage
    }

    #[inline]
    pub(crate) fn is_finished(&self) -> bool {
        self.stage == EnvelopeStage::Finished
    }

    /// Sum of the three stage lengths.
    pub(crate) fn full_length(&self) -> f64 {
        self.lengths.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(attack: f64, sustain: f64, decay: f64, punch: f64) -> Envelope {
        let mut params = ParameterSet::new();
        params.set(ParamId::AttackTime, attack);
        params.set(ParamId::SustainTime, sustain);
        params.set(ParamId::DecayTime, decay);
        params.set(ParamId::SustainPunch, punch);
        Envelope::new(&params)
    }

    #[test]
    fn test_stage_lengths() {
        let env = envelope(0.1, 0.2, 0.3, 0.0);
        let expected = 0.01 * STAGE_SCALE + 0.04 * STAGE_SCALE + 0.09 * STAGE_SCALE + 10.0;
        assert!((env.full_length() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_attack_ramps_up() {
        let mut env = envelope(0.1, 0.1, 0.1, 0.0);
        let mut last = 0.0;
        for _ in 0..900 {
            let v = env.advance();
            assert!(v >= last);
            last = v;
        }
        assert_eq!(env.stage(), EnvelopeStage::Attack);
    }

    #[test]
    fn test_punch_starts_sustain_loud() {
        let mut env = envelope(0.0, 0.1, 0.1, 0.5);
        // Zero attack moves straight to sustain on the first sample.
        let first = env.advance();
        assert_eq!(env.stage(), EnvelopeStage::Sustain);
        assert!((first - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_runs_to_finished() {
        let mut env = envelope(0.01, 0.05, 0.05, 0.3);
        let mut steps = 0;
        while !env.is_finished() {
            env.advance();
            steps += 1;
            assert!(steps < 1_000_000);
        }
        assert_eq!(env.stage().index(), 3);
        assert_eq!(env.advance(), 0.0);
        assert!(steps as f64 >= env.full_length());
    }
}
