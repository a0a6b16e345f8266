//! Waveform generation: phase accumulator, shapes, overtone stacking, and
//! the per-period noise sources.

use rand::Rng;

use crate::lfsr::{Lfsr, LfsrTap};
use crate::params::{ParamId, ParameterSet, WaveType};
use crate::pink_noise::PinkNoise;

/// Slots in each noise buffer.
pub const NOISE_BUFFER_LEN: usize = 32;

/// Slots that share one value in the low-resolution buffer.
pub const LO_RES_HOLD: usize = 8;

/// Approximation of pi used by the tan shape. Its error is part of the sound.
const TAN_PI: f64 = 3.14;

const TWO_PI: f64 = 6.28318531;

/// Parabolic sine approximation over one normalized cycle.
///
/// `pos` is the position in the period, in `[0, 1)`.
#[inline]
pub fn fast_sin(pos: f64) -> f64 {
    let x = if pos > 0.5 {
        (pos - 1.0) * TWO_PI
    } else {
        pos * TWO_PI
    };
    let t = if x < 0.0 {
        1.27323954 * x + 0.405284735 * x * x
    } else {
        1.27323954 * x - 0.405284735 * x * x
    };
    if t < 0.0 {
        0.225 * (t * -t - t) + t
    } else {
        0.225 * (t * t - t) + t
    }
}

#[inline]
fn buffer_index(phase: f64, period: f64) -> usize {
    // The period is always a whole number of at least 8.
    ((phase * NOISE_BUFFER_LEN as f64 / period) as usize) % NOISE_BUFFER_LEN
}

/// Noise tables, redrawn once per oscillator period.
#[derive(Debug, Clone)]
pub(crate) struct NoiseBuffers {
    white: [f64; NOISE_BUFFER_LEN],
    pink: [f64; NOISE_BUFFER_LEN],
    lo_res: [f64; NOISE_BUFFER_LEN],
    pink_source: PinkNoise,
}

impl NoiseBuffers {
    pub(crate) fn new(pink_source: PinkNoise) -> Self {
        Self {
            white: [0.0; NOISE_BUFFER_LEN],
            pink: [0.0; NOISE_BUFFER_LEN],
            lo_res: [0.0; NOISE_BUFFER_LEN],
            pink_source,
        }
    }

    /// Refills every table, white first, then pink, then low-resolution.
    pub(crate) fn fill_all<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fill_white(rng);
        self.fill_pink(rng);
        self.fill_lo_res(rng);
    }

    fn fill_white<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for slot in self.white.iter_mut() {
            *slot = rng.gen::<f64>() * 2.0 - 1.0;
        }
    }

    fn fill_pink<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for slot in self.pink.iter_mut() {
            *slot = self.pink_source.next_value(rng) * 2.0 - 1.0;
        }
    }

    fn fill_lo_res<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..NOISE_BUFFER_LEN {
            self.lo_res[i] = if i % LO_RES_HOLD == 0 {
                rng.gen::<f64>() * 2.0 - 1.0
            } else {
                self.lo_res[i - 1]
            };
        }
    }

    #[cfg(test)]
    pub(crate) fn lo_res(&self) -> &[f64; NOISE_BUFFER_LEN] {
        &self.lo_res
    }
}

/// Square duty cycle with its per-sample sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DutyCycle {
    duty: f64,
    sweep: f64,
}

impl DutyCycle {
    pub(crate) fn new(params: &ParameterSet) -> Self {
        Self {
            duty: 0.5 - params.get(ParamId::SquareDuty) * 0.5,
            sweep: -params.get(ParamId::DutySweep) * 0.00005,
        }
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.duty = (self.duty + self.sweep).clamp(0.0, 0.5);
    }
}

/// The oscillator proper.
#[derive(Debug, Clone)]
pub(crate) struct Oscillator {
    wave_type: WaveType,
    /// Whole sub-samples into the current period.
    phase: i64,
    overtones: u32,
    overtone_falloff: f64,
    duty: DutyCycle,
    noise: NoiseBuffers,
    one_bit: Lfsr,
    buzz: Lfsr,
}

impl Oscillator {
    /// Creates the oscillator; buffers stay empty until [`Oscillator::reset`].
    pub(crate) fn new(params: &ParameterSet, pink_source: PinkNoise) -> Self {
        Self {
            wave_type: params.wave_type(),
            phase: 0,
            overtones: 0,
            overtone_falloff: 0.0,
            duty: DutyCycle { duty: 0.0, sweep: 0.0 },
            noise: NoiseBuffers::new(pink_source),
            one_bit: Lfsr::new(LfsrTap::OneBit),
            buzz: Lfsr::new(LfsrTap::Buzz),
        }
    }

    /// Full reset: phase, harmonics, shift registers, and every noise table.
    pub(crate) fn reset<R: Rng + ?Sized>(&mut self, params: &ParameterSet, rng: &mut R) {
        self.wave_type = params.wave_type();
        self.phase = 0;
        self.overtones = (params.get(ParamId::Overtones) * 10.0) as u32;
        self.overtone_falloff = params.get(ParamId::OvertoneFalloff);
        self.one_bit = Lfsr::new(LfsrTap::OneBit);
        self.buzz = Lfsr::new(LfsrTap::Buzz);
        self.noise.fill_all(rng);
    }

    /// Reloads the duty cycle; only the square wave uses it.
    pub(crate) fn reset_duty(&mut self, params: &ParameterSet) {
        if self.wave_type == WaveType::Square {
            self.duty = DutyCycle::new(params);
        }
    }

    /// Per-output-sample update.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if self.wave_type == WaveType::Square {
            self.duty.advance();
        }
    }

    /// Advances the phase one sub-sample, refreshing this wave's noise
    /// source when a period completes.
    #[inline]
    pub(crate) fn step<R: Rng + ?Sized>(&mut self, period: f64, rng: &mut R) {
        self.phase += 1;
        if self.phase as f64 >= period {
            self.phase -= period as i64;
            match self.wave_type {
                WaveType::Noise => self.noise.fill_white(rng),
                WaveType::Pink => self.noise.fill_pink(rng),
                WaveType::Tan => self.noise.fill_lo_res(rng),
                WaveType::OneBitNoise => self.one_bit.clock(),
                WaveType::Buzz => self.buzz.clock(),
                _ => {}
            }
        }
    }

    /// Current sub-sample with overtones summed.
    #[inline]
    pub(crate) fn sample(&self, period: f64) -> f64 {
        let phase = self.phase as f64;
        let mut sum = 0.0;
        let mut strength = 1.0;
        for k in 0..=self.overtones {
            let harmonic_phase = (phase * f64::from(k + 1)) % period;
            sum += strength * self.shape(harmonic_phase, period);
            strength *= 1.0 - self.overtone_falloff;
        }
        sum
    }

    /// Wave shape at `phase` sub-samples into a period of length `period`.
    #[inline]
    fn shape(&self, phase: f64, period: f64) -> f64 {
        let pos = phase / period;
        match self.wave_type {
            WaveType::Square => {
                if pos < self.duty.duty {
                    0.5
                } else {
                    -0.5
                }
            }
            WaveType::Saw => 1.0 - pos * 2.0,
            WaveType::Sine => fast_sin(pos),
            WaveType::Noise => self.noise.white[buffer_index(phase, period)],
            WaveType::Triangle => (1.0 - pos * 2.0).abs() - 1.0,
            WaveType::Pink => self.noise.pink[buffer_index(phase, period)],
            WaveType::Tan => (TAN_PI * phase / period).tan(),
            WaveType::Whistle => {
                let overtone = ((phase * 20.0) % period) / period;
                0.75 * fast_sin(pos) + 0.25 * fast_sin(overtone)
            }
            WaveType::Breaker => (1.0 - pos * pos * 2.0).abs() - 1.0,
            WaveType::OneBitNoise => self.one_bit.value(),
            WaveType::Buzz => self.buzz.value(),
        }
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> i64 {
        self.phase
    }

    #[cfg(test)]
    pub(crate) fn noise(&self) -> &NoiseBuffers {
        &self.noise
    }
}
