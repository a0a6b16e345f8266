//! The per-sample synthesis engine.
//!
//! Each output sample runs the same fixed pipeline:
//!
//! 1. repeat retrigger, pitch jumps, slide, minimum-frequency check
//! 2. vibrato, duty sweep, envelope, flanger and high-pass sweeps
//! 3. eight oscillator sub-samples, each filtered and flanged
//! 4. clip, volume, bit crush, compression, mute
//!
//! The engine owns a private snapshot of the parameters and its own RNG, so
//! independent engines can run side by side.

mod envelope;
mod filter;
mod flanger;
mod oscillator;
mod pitch;
mod post;


pub use envelope::EnvelopeStage;
pub use flanger::FLANGER_BUFFER_LEN;
pub use oscillator::{fast_sin, LO_RES_HOLD, NOISE_BUFFER_LEN};

use rand::Rng;

use crate::params::{ParamId, ParameterSet};
use crate::pink_noise::PinkNoise;

use envelope::Envelope;
use filter::FilterStage;
use flanger::Flanger;
use oscillator::Oscillator;
use pitch::{Pitch, Vibrato};
use post::{BitCrusher, Compressor};

/// Sub-samples computed per output sample.
pub const SUPERSAMPLES: usize = 8;

/// Smallest oscillator period, in sub-samples.
pub const MIN_PERIOD: f64 = 8.0;

/// Shortest allowed attack + sustain + decay.
pub const MIN_TOTAL_TIME: f64 = 0.18;

/// Shortest allowed sustain time.
pub const MIN_SUSTAIN_TIME: f64 = 0.01;

/// A generated sound is never shorter than this many samples.
pub const MIN_OUTPUT_SAMPLES: usize = 1536;

/// Pre-volume clip level of the summed sub-samples.
const SUPERSAMPLE_CLIP: f64 = 8.0;

/// Stateful generator for one sound.
#[derive(Debug, Clone)]
pub struct SynthEngine<R: Rng> {
    params: ParameterSet,
    rng: R,

    master_volume: f64,
    min_frequency: f64,
    muted: bool,

    pitch: Pitch,
    vibrato: Vibrato,
    oscillator: Oscillator,
    envelope: Envelope,
    filters: FilterStage,
    flanger: Flanger,
    bit_crusher: BitCrusher,
    compressor: Compressor,

    repeat_time: u32,
    repeat_limit: u32,

    samples_generated: usize,
}

impl<R: Rng> SynthEngine<R> {
    /// Snapshots `params` and performs a full reset.
    ///
    /// The caller's set is never modified; the minimum-duration adjustments
    /// apply to the snapshot only.
    pub fn new(params: &ParameterSet, mut rng: R) -> Self {
        let snapshot = params.clone();
        let pink = PinkNoise::new(&mut rng);

        let mut engine = Self {
            master_volume: 0.0,
            min_frequency: 0.0,
            muted: false,
            pitch: Pitch::new(&snapshot),
            vibrato: Vibrato::new(&snapshot),
            oscillator: Oscillator::new(&snapshot, pink),
            envelope: Envelope::new(&snapshot),
            filters: FilterStage::new(&snapshot),
            flanger: Flanger::new(&snapshot),
            bit_crusher: BitCrusher::new(&snapshot),
            compressor: Compressor::new(&snapshot),
            repeat_time: 0,
            repeat_limit: 0,
            samples_generated: 0,
            params: snapshot,
            rng,
        };
        engine.reset(true);
        engine
    }

    /// Rebuilds derived state from the snapshot.
    ///
    /// A partial reset only restores pitch, slide, jump channels and square
    /// duty; this is the retrigger used by the repeat effect. A full reset
    /// rebuilds everything, redraws the noise tables, and restarts the
    /// oscillator phase.
    pub fn reset(&mut self, full: bool) {
        self.pitch = Pitch::new(&self.params);
        self.oscillator.reset_duty(&self.params);

        if !full {
            return;
        }

        self.master_volume = {
            let v = self.params.get(ParamId::MasterVolume);
            v * v
        };

        if self.params.get(ParamId::SustainTime) < MIN_SUSTAIN_TIME {
            self.params.set(ParamId::SustainTime, MIN_SUSTAIN_TIME);
        }
        self.clamp_total_time();

        self.min_frequency = self.params.get(ParamId::MinFrequency);
        self.muted = false;

        self.oscillator.reset(&self.params, &mut self.rng);
        self.oscillator.reset_duty(&self.params);
        self.bit_crusher = BitCrusher::new(&self.params);
        self.compressor = Compressor::new(&self.params);
        self.filters = FilterStage::new(&self.params);
        self.vibrato = Vibrato::new(&self.params);
        self.envelope = Envelope::new(&self.params);
        self.flanger = Flanger::new(&self.params);

        self.repeat_time = 0;
        let repeat_speed = self.params.get(ParamId::RepeatSpeed);
        self.repeat_limit = if repeat_speed == 0.0 {
            0
        } else {
            ((1.0 - repeat_speed) * (1.0 - repeat_speed) * 20000.0) as u32 + 32
        };
    }

    /// Scales attack, sustain and decay up together so their sum is at least
    /// [`MIN_TOTAL_TIME`].
    fn clamp_total_time(&mut self) {
        let total = self.params.total_time();
        if total < MIN_TOTAL_TIME {
            let multiplier = MIN_TOTAL_TIME / total;
            for id in [ParamId::AttackTime, ParamId::SustainTime, ParamId::DecayTime] {
                self.params.set(id, self.params.get(id) * multiplier);
            }
        }
    }

    /// Produces the next output sample.
    ///
    /// The call that finishes the envelope returns `0.0`; after that this
    /// returns `0.0` without touching any state.
    pub fn next_sample(&mut self) -> f64 {
        if self.envelope.is_finished() {
            return 0.0;
        }

        if self.repeat_limit != 0 {
            self.repeat_time += 1;
            if self.repeat_time >= self.repeat_limit {
                self.repeat_time = 0;
                self.reset(false);
            }
        }

        if self.pitch.advance() && self.min_frequency > 0.0 {
            self.muted = true;
        }

        let period = self
            .vibrato
            .apply(self.pitch.period())
            .trunc()
            .max(MIN_PERIOD);

        self.oscillator.advance();
        let envelope_volume = self.envelope.advance();
        self.flanger.advance();
        self.filters.sweep();

        let mut super_sample = 0.0;
        for _ in 0..SUPERSAMPLES {
            self.oscillator.step(period, &mut self.rng);
            let mut sample = self.oscillator.sample(period);
            sample = self.filters.process(sample);
            sample = self.flanger.process(sample);
            super_sample += sample;
        }

        let super_sample = super_sample.clamp(-SUPERSAMPLE_CLIP, SUPERSAMPLE_CLIP);
        let scaled = self.master_volume * envelope_volume * super_sample / SUPERSAMPLES as f64;

        let crushed = self.bit_crusher.process(scaled);
        let compressed = self.compressor.process(crushed);

        self.samples_generated += 1;

        // The sample that moves the envelope into its terminal stage is
        // already silence.
        if self.muted || self.envelope.is_finished() {
            0.0
        } else {
            compressed
        }
    }

    /// Fills `out` sample by sample and returns how many slots were produced
    /// before the envelope finished. Remaining slots are set to silence.
    pub fn fill(&mut self, out: &mut [f64]) -> usize {
        let mut live = 0;
        for slot in out.iter_mut() {
            if self.envelope.is_finished() {
                *slot = 0.0;
            } else {
                *slot = self.next_sample();
                live += 1;
            }
        }
        live
    }

    /// True once the envelope has passed its decay stage.
    pub fn is_finished(&self) -> bool {
        self.envelope.is_finished()
    }

    /// True once the pitch fell below the minimum frequency.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Current envelope stage.
    pub fn envelope_stage(&self) -> EnvelopeStage {
        self.envelope.stage()
    }

    /// Sum of the envelope stage lengths, in samples.
    pub fn envelope_full_length(&self) -> f64 {
        self.envelope.full_length()
    }

    /// Samples a full generation produces: the envelope length, padded with
    /// silence up to [`MIN_OUTPUT_SAMPLES`].
    pub fn total_samples(&self) -> usize {
        (self.envelope.full_length() as usize).max(MIN_OUTPUT_SAMPLES)
    }

    /// Samples produced since construction, excluding post-finish silence.
    pub fn samples_generated(&self) -> usize {
        self.samples_generated
    }

    /// The engine's parameter snapshot, including its duration adjustments.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Consumes the engine and hands back its RNG.
    pub fn into_rng(self) -> R {
        self.rng
    }
}
