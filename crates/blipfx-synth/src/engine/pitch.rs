//! Period tracking: slide, pitch jumps, vibrato.
//!
//! The oscillator is driven by a period measured in sub-samples rather than
//! by a frequency, so every pitch effect here multiplies or divides that
//! period.

use crate::params::{ParamId, ParameterSet};

/// Scale of a pitch-jump counter window, shared by the repeat window.
const CHANGE_WINDOW: f64 = 20000.0;

/// Converts a frequency knob into a period.
#[inline]
pub(crate) fn period_for(frequency: f64) -> f64 {
    100.0 / (frequency * frequency + 0.001)
}

/// Attenuation shared by both jump channels and the repeat window.
#[inline]
fn repeat_scale(change_repeat: f64) -> f64 {
    ((1.0 - change_repeat) + 0.1) / 1.1
}

/// One pitch-jump ("change") channel.
///
/// After `limit` samples the working period is multiplied by `amount` once.
/// The shared repeat window divides it back out when it elapses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PitchJump {
    amount: f64,
    limit: i64,
    time: i64,
    reached: bool,
}

impl PitchJump {
    pub(crate) fn new(amount: f64, speed: f64, change_repeat: f64) -> Self {
        let amount = if amount > 0.0 {
            1.0 - amount * amount * 0.9
        } else {
            1.0 + amount * amount * 10.0
        };

        let limit = if speed == 1.0 {
            0
        } else {
            ((1.0 - speed) * (1.0 - speed) * CHANGE_WINDOW + 32.0) as i64
        };
        let limit = (limit as f64 * repeat_scale(change_repeat)) as i64;

        Self {
            amount,
            limit,
            time: 0,
            reached: false,
        }
    }

    /// Counts one sample and fires the jump when the limit is reached.
    #[inline]
    pub(crate) fn tick(&mut self, period: &mut f64) {
        if self.reached {
            return;
        }
        self.time += 1;
        if self.time >= self.limit {
            self.reached = true;
            *period *= self.amount;
        }
    }

    /// Restarts the counter and undoes a fired jump.
    #[inline]
    pub(crate) fn revert(&mut self, period: &mut f64) {
        self.time = 0;
        if self.reached {
            *period /= self.amount;
            self.reached = false;
        }
    }

    #[cfg(test)]
    pub(crate) fn amount(&self) -> f64 {
        self.amount
    }

    #[cfg(test)]
    pub(crate) fn limit(&self) -> i64 {
        self.limit
    }

    #[cfg(test)]
    pub(crate) fn is_reached(&self) -> bool {
        self.reached
    }
}

/// Working period with slide and pitch jumps applied.
///
/// This is exactly the state a repeat retrigger rebuilds.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Pitch {
    period: f64,
    max_period: f64,
    slide: f64,
    delta_slide: f64,
    change_period: f64,
    change_period_time: i64,
    jumps: [PitchJump; 2],
}

impl Pitch {
    pub(crate) fn new(params: &ParameterSet) -> Self {
        let slide = params.get(ParamId::Slide);
        let delta_slide = params.get(ParamId::DeltaSlide);
        let change_repeat = params.get(ParamId::ChangeRepeat);

        Self {
            period: period_for(params.get(ParamId::StartFrequency)),
            max_period: period_for(params.get(ParamId::MinFrequency)),
            slide: 1.0 - slide * slide * slide * 0.01,
            delta_slide: -delta_slide * delta_slide * delta_slide * 0.000001,
            change_period: repeat_scale(change_repeat) * CHANGE_WINDOW + 32.0,
            change_period_time: 0,
            jumps: [
                PitchJump::new(
                    params.get(ParamId::ChangeAmount),
                    params.get(ParamId::ChangeSpeed),
                    change_repeat,
                ),
                PitchJump::new(
                    params.get(ParamId::ChangeAmount2),
                    params.get(ParamId::ChangeSpeed2),
                    change_repeat,
                ),
            ],
        }
    }

    /// Advances one output sample.
    ///
    /// Returns true when the period had to be clamped to the maximum, which
    /// means the pitch fell below the minimum frequency.
    pub(crate) fn advance(&mut self) -> bool {
        self.change_period_time += 1;
        if self.change_period_time as f64 >= self.change_period {
            self.change_period_time = 0;
            for jump in self.jumps.iter_mut() {
                jump.revert(&mut self.period);
            }
        }

        for jump in self.jumps.iter_mut() {
            jump.tick(&mut self.period);
        }

        self.slide += self.delta_slide;
        self.period *= self.slide;

        if self.period > self.max_period {
            self.period = self.max_period;
            return true;
        }
        false
    }

    #[inline]
    pub(crate) fn period(&self) -> f64 {
        self.period
    }

    #[cfg(test)]
    pub(crate) fn max_period(&self) -> f64 {
        self.max_period
    }
}

/// Sinusoidal period modulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Vibrato {
    phase: f64,
    speed: f64,
    amplitude: f64,
}

impl Vibrato {
    pub(crate) fn new(params: &ParameterSet) -> Self {
        let speed = params.get(ParamId::VibratoSpeed);
        Self {
            phase: 0.0,
            speed: speed * speed * 0.01,
            amplitude: params.get(ParamId::VibratoDepth) * 0.5,
        }
    }

    /// Advances the phase and returns the modulated period.
    #[inline]
    pub(crate) fn apply(&mut self, period: f64) -> f64 {
        if self.amplitude > 0.0 {
            self.phase += self.speed;
            period * (1.0 + self.phase.sin() * self.amplitude)
        } else {
            period
        }
    }
}
