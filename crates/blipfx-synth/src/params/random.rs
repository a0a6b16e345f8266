//! Mutation and full randomization.

use rand::Rng;

use super::{unit, ParamId, ParameterSet, WaveType, PARAMETERS};

/// Default mutation step.
pub const DEFAULT_MUTATION: f64 = 0.05;

impl ParameterSet {
    /// Nudges every unlocked parameter, each with probability one half, by a
    /// uniform offset in `[-amount, amount]`. The wave type is never touched.
    pub fn mutate<R: Rng + ?Sized>(&mut self, amount: f64, rng: &mut R) {
        for desc in PARAMETERS.iter() {
            if self.is_locked(desc.id) {
                continue;
            }
            if unit(rng) < 0.5 {
                let offset = unit(rng) * amount * 2.0 - amount;
                self.set(desc.id, self.get(desc.id) + offset);
            }
        }
    }

    /// Draws every unlocked parameter from its power-biased distribution,
    /// then applies the corrections that keep random sounds audible.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for desc in PARAMETERS.iter() {
            if self.is_locked(desc.id) {
                continue;
            }
            let r = unit(rng).powf(desc.random_power);
            self.set(desc.id, desc.min + desc.span() * r);
        }

        if !self.is_wave_type_locked() {
            let index = ((unit(rng) * WaveType::COUNT as f64) as usize).min(WaveType::COUNT - 1);
            self.set_wave_type(WaveType::ALL[index]);
        }

        if !self.is_locked(ParamId::RepeatSpeed) && unit(rng) < 0.5 {
            self.set(ParamId::RepeatSpeed, 0.0);
        }

        if !self.is_locked(ParamId::Slide) {
            let r = unit(rng) * 2.0 - 1.0;
            self.set(ParamId::Slide, r.powi(5));
        }

        if !self.is_locked(ParamId::DeltaSlide) {
            let r = unit(rng) * 2.0 - 1.0;
            self.set(ParamId::DeltaSlide, r.powi(3));
        }

        if !self.is_locked(ParamId::MinFrequency) {
            self.set(ParamId::MinFrequency, 0.0);
        }

        if !self.is_locked(ParamId::StartFrequency) {
            let start = if unit(rng) < 0.5 {
                (unit(rng) * 2.0 - 1.0).powi(2)
            } else {
                (unit(rng) * 0.5).powi(3) + 0.5
            };
            self.set(ParamId::StartFrequency, start);
        }

        if !self.is_locked(ParamId::SustainTime)
            && !self.is_locked(ParamId::DecayTime)
            && self.total_time() < 0.2
        {
            self.set(ParamId::SustainTime, 0.2 + unit(rng) * 0.3);
            self.set(ParamId::DecayTime, 0.2 + unit(rng) * 0.3);
        }

        if !self.is_locked(ParamId::Slide) {
            let start = self.get(ParamId::StartFrequency);
            let slide = self.get(ParamId::Slide);
            if (start > 0.7 && slide > 0.2) || (start < 0.2 && slide < -0.05) {
                self.set(ParamId::Slide, -slide);
            }
        }

        if !self.is_locked(ParamId::LpFilterCutoffSweep) {
            let sweep = self.get(ParamId::LpFilterCutoffSweep);
            if self.get(ParamId::LpFilterCutoff) < 0.1 && sweep < -0.05 {
                self.set(ParamId::LpFilterCutoffSweep, -sweep);
            }
        }
    }
}
