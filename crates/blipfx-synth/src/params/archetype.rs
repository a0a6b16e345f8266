//! Preset generators ("archetypes").
//!
//! Each generator resets the set and then applies a partly random recipe.
//! Every draw is a fresh uniform value from the injected RNG, so a fixed seed
//! always yields the same preset.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::{unit, ParamId, ParameterSet, WaveType};
use crate::error::SynthError;

/// Family of sound a preset generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    PickupCoin,
    LaserShoot,
    Explosion,
    Powerup,
    HitHurt,
    Jump,
    BlipSelect,
}

impl Archetype {
    /// All archetypes in menu order.
    pub const ALL: [Archetype; 7] = [
        Archetype::PickupCoin,
        Archetype::LaserShoot,
        Archetype::Explosion,
        Archetype::Powerup,
        Archetype::HitHurt,
        Archetype::Jump,
        Archetype::BlipSelect,
    ];

    /// Snake-case name.
    pub fn name(self) -> &'static str {
        match self {
            Archetype::PickupCoin => "pickup_coin",
            Archetype::LaserShoot => "laser_shoot",
            Archetype::Explosion => "explosion",
            Archetype::Powerup => "powerup",
            Archetype::HitHurt => "hit_hurt",
            Archetype::Jump => "jump",
            Archetype::BlipSelect => "blip_select",
        }
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            Archetype::PickupCoin => "Bright two-note chime for collecting items.",
            Archetype::LaserShoot => "Falling zap with a sliding pitch.",
            Archetype::Explosion => "Noisy burst, optionally repeating or flanged.",
            Archetype::Powerup => "Rising tone, sometimes repeated or with vibrato.",
            Archetype::HitHurt => "Short falling thud for damage.",
            Archetype::Jump => "Short rising square blip.",
            Archetype::BlipSelect => "Tiny menu click.",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Archetype {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Archetype::ALL
            .iter()
            .copied()
            .find(|a| a.name().replace('_', "") == wanted)
            .ok_or_else(|| SynthError::UnknownArchetype {
                name: s.to_string(),
            })
    }
}

impl ParameterSet {
    /// Resets the set and applies the recipe for `archetype`.
    pub fn generate<R: Rng + ?Sized>(&mut self, archetype: Archetype, rng: &mut R) {
        match archetype {
            Archetype::PickupCoin => self.generate_pickup_coin(rng),
            Archetype::LaserShoot => self.generate_laser_shoot(rng),
            Archetype::Explosion => self.generate_explosion(rng),
            Archetype::Powerup => self.generate_powerup(rng),
            Archetype::HitHurt => self.generate_hit_hurt(rng),
            Archetype::Jump => self.generate_jump(rng),
            Archetype::BlipSelect => self.generate_blip_select(rng),
        }
    }

    pub fn generate_pickup_coin<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();

        self.set(ParamId::StartFrequency, 0.4 + unit(rng) * 0.5);
        self.set(ParamId::SustainTime, unit(rng) * 0.1);
        self.set(ParamId::DecayTime, 0.1 + unit(rng) * 0.4);
        self.set(ParamId::SustainPunch, 0.3 + unit(rng) * 0.3);

        if unit(rng) < 0.5 {
            self.set(ParamId::ChangeSpeed, 0.5 + unit(rng) * 0.2);
            let cnum = (unit(rng) * 7.0) as u32 + 1;
            let cden = cnum + (unit(rng) * 7.0) as u32 + 2;
            self.set(ParamId::ChangeAmount, f64::from(cnum) / f64::from(cden));
        }
    }

    pub fn generate_laser_shoot<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();

        let mut wave = (unit(rng) * 3.0) as usize;
        if wave == 2 && unit(rng) < 0.5 {
            wave = (unit(rng) * 2.0) as usize;
        }
        self.set_wave_type(WaveType::ALL[wave]);

        self.set(ParamId::StartFrequency, 0.5 + unit(rng) * 0.5);
        let min_frequency = self.get(ParamId::StartFrequency) - 0.2 - unit(rng) * 0.6;
        self.set(ParamId::MinFrequency, min_frequency.max(0.2));
        self.set(ParamId::Slide, -0.15 - unit(rng) * 0.2);

        // Short zap variant.
        if unit(rng) < 0.33 {
            self.set(ParamId::StartFrequency, unit(rng) * 0.6);
            self.set(ParamId::MinFrequency, unit(rng) * 0.1);
            self.set(ParamId::Slide, -0.35 - unit(rng) * 0.3);
        }

        if unit(rng) < 0.5 {
            self.set(ParamId::SquareDuty, unit(rng) * 0.5);
            self.set(ParamId::DutySweep, unit(rng) * 0.2);
        } else {
            self.set(ParamId::SquareDuty, 0.4 + unit(rng) * 0.5);
            self.set(ParamId::DutySweep, -unit(rng) * 0.7);
        }

        self.set(ParamId::SustainTime, 0.1 + unit(rng) * 0.2);
        self.set(ParamId::DecayTime, unit(rng) * 0.4);
        if unit(rng) < 0.5 {
            self.set(ParamId::SustainPunch, unit(rng) * 0.3);
        }

        if unit(rng) < 0.33 {
            self.set(ParamId::FlangerOffset, unit(rng) * 0.2);
            self.set(ParamId::FlangerSweep, -unit(rng) * 0.2);
        }

        if unit(rng) < 0.5 {
            self.set(ParamId::HpFilterCutoff, unit(rng) * 0.3);
        }
    }

    pub fn generate_explosion<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();

        self.set_wave_type(WaveType::Noise);

        if unit(rng) < 0.5 {
            self.set(ParamId::StartFrequency, 0.1 + unit(rng) * 0.4);
            self.set(ParamId::Slide, -0.1 + unit(rng) * 0.4);
        } else {
            self.set(ParamId::StartFrequency, 0.2 + unit(rng) * 0.7);
            self.set(ParamId::Slide, -0.2 - unit(rng) * 0.2);
        }

        let start = self.get(ParamId::StartFrequency);
        self.set(ParamId::StartFrequency, start * start);

        if unit(rng) < 0.2 {
            self.set(ParamId::Slide, 0.0);
        }
        if unit(rng) < 0.33 {
            self.set(ParamId::RepeatSpeed, 0.3 + unit(rng) * 0.5);
        }

        self.set(ParamId::SustainTime, 0.1 + unit(rng) * 0.3);
        self.set(ParamId::DecayTime, unit(rng) * 0.5);
        self.set(ParamId::SustainPunch, 0.2 + unit(rng) * 0.6);

        if unit(rng) < 0.5 {
            self.set(ParamId::FlangerOffset, -0.3 + unit(rng) * 0.9);
            self.set(ParamId::FlangerSweep, -unit(rng) * 0.3);
        }

        if unit(rng) < 0.33 {
            self.set(ParamId::ChangeSpeed, 0.6 + unit(rng) * 0.3);
            self.set(ParamId::ChangeAmount, 0.8 - unit(rng) * 1.6);
        }
    }

    pub fn generate_powerup<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();

        if unit(rng) < 0.5 {
            self.set_wave_type(WaveType::Saw);
        } else {
            self.set(ParamId::SquareDuty, unit(rng) * 0.6);
        }

        if unit(rng) < 0.5 {
            self.set(ParamId::StartFrequency, 0.2 + unit(rng) * 0.3);
            self.set(ParamId::Slide, 0.1 + unit(rng) * 0.4);
            self.set(ParamId::RepeatSpeed, 0.4 + unit(rng) * 0.4);
        } else {
            self.set(ParamId::StartFrequency, 0.2 + unit(rng) * 0.3);
            self.set(ParamId::Slide, 0.05 + unit(rng) * 0.2);

            if unit(rng) < 0.5 {
                self.set(ParamId::VibratoDepth, unit(rng) * 0.7);
                self.set(ParamId::VibratoSpeed, unit(rng) * 0.6);
            }
        }

        self.set(ParamId::SustainTime, unit(rng) * 0.4);
        self.set(ParamId::DecayTime, 0.1 + unit(rng) * 0.4);
    }

    pub fn generate_hit_hurt<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();

        match (unit(rng) * 3.0) as usize {
            0 => {
                self.set_wave_type(WaveType::Square);
                self.set(ParamId::SquareDuty, unit(rng) * 0.6);
            }
            1 => self.set_wave_type(WaveType::Saw),
            _ => self.set_wave_type(WaveType::Noise),
        }

        self.set(ParamId::StartFrequency, 0.2 + unit(rng) * 0.6);
        self.set(ParamId::Slide, -0.3 - unit(rng) * 0.4);

        self.set(ParamId::SustainTime, unit(rng) * 0.1);
        self.set(ParamId::DecayTime, 0.1 + unit(rng) * 0.2);

        if unit(rng) < 0.5 {
            self.set(ParamId::HpFilterCutoff, unit(rng) * 0.3);
        }
    }

    pub fn generate_jump<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();

        self.set_wave_type(WaveType::Square);
        self.set(ParamId::SquareDuty, unit(rng) * 0.6);
        self.set(ParamId::StartFrequency, 0.3 + unit(rng) * 0.3);
        self.set(ParamId::Slide, 0.1 + unit(rng) * 0.2);

        self.set(ParamId::SustainTime, 0.1 + unit(rng) * 0.3);
        self.set(ParamId::DecayTime, 0.1 + unit(rng) * 0.2);

        if unit(rng) < 0.5 {
            self.set(ParamId::HpFilterCutoff, unit(rng) * 0.3);
        }
        if unit(rng) < 0.5 {
            self.set(ParamId::LpFilterCutoff, 1.0 - unit(rng) * 0.6);
        }
    }

    pub fn generate_blip_select<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();

        if unit(rng) < 0.5 {
            self.set_wave_type(WaveType::Square);
            self.set(ParamId::SquareDuty, unit(rng) * 0.6);
        } else {
            self.set_wave_type(WaveType::Saw);
        }

        self.set(ParamId::StartFrequency, 0.2 + unit(rng) * 0.4);

        self.set(ParamId::SustainTime, 0.1 + unit(rng) * 0.1);
        self.set(ParamId::DecayTime, unit(rng) * 0.2);
        self.set(ParamId::HpFilterCutoff, 0.1);
    }
}
