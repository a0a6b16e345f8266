//! Static descriptor table for the continuous synthesis parameters.
//!
//! Every knob is described exactly once here: its bounds, its default, and
//! the exponent used to bias full randomization. `mutate`, `randomize`,
//! `reset` and the lock helpers all iterate this table instead of naming
//! fields one by one.

use std::fmt;
use std::str::FromStr;

use crate::error::SynthError;

/// Number of continuous parameters.
pub const PARAM_COUNT: usize = 31;

/// Identifier of a continuous synthesis parameter.
///
/// Discriminants are the positions in [`PARAMETERS`] and [`ParamId::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamId {
    MasterVolume,
    AttackTime,
    SustainTime,
    SustainPunch,
    DecayTime,
    CompressionAmount,
    StartFrequency,
    MinFrequency,
    Slide,
    DeltaSlide,
    VibratoDepth,
    VibratoSpeed,
    Overtones,
    OvertoneFalloff,
    ChangeRepeat,
    ChangeAmount,
    ChangeSpeed,
    ChangeAmount2,
    ChangeSpeed2,
    SquareDuty,
    DutySweep,
    RepeatSpeed,
    FlangerOffset,
    FlangerSweep,
    LpFilterCutoff,
    LpFilterCutoffSweep,
    LpFilterResonance,
    HpFilterCutoff,
    HpFilterCutoffSweep,
    BitCrush,
    BitCrushSweep,
}

impl ParamId {
    /// All parameters in canonical order.
    pub const ALL: [ParamId; PARAM_COUNT] = [
        ParamId::MasterVolume,
        ParamId::AttackTime,
        ParamId::SustainTime,
        ParamId::SustainPunch,
        ParamId::DecayTime,
        ParamId::CompressionAmount,
        ParamId::StartFrequency,
        ParamId::MinFrequency,
        ParamId::Slide,
        ParamId::DeltaSlide,
        ParamId::VibratoDepth,
        ParamId::VibratoSpeed,
        ParamId::Overtones,
        ParamId::OvertoneFalloff,
        ParamId::ChangeRepeat,
        ParamId::ChangeAmount,
        ParamId::ChangeSpeed,
        ParamId::ChangeAmount2,
        ParamId::ChangeSpeed2,
        ParamId::SquareDuty,
        ParamId::DutySweep,
        ParamId::RepeatSpeed,
        ParamId::FlangerOffset,
        ParamId::FlangerSweep,
        ParamId::LpFilterCutoff,
        ParamId::LpFilterCutoffSweep,
        ParamId::LpFilterResonance,
        ParamId::HpFilterCutoff,
        ParamId::HpFilterCutoffSweep,
        ParamId::BitCrush,
        ParamId::BitCrushSweep,
    ];

    /// Position of this parameter in the descriptor table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The static descriptor for this parameter.
    #[inline]
    pub fn descriptor(self) -> &'static ParamDescriptor {
        &PARAMETERS[self.index()]
    }

    /// Snake-case name used in parameter files and on the command line.
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamId {
    type Err = SynthError;

    /// Accepts `snake_case` names as well as the `camelCase` names used by
    /// older sfxr-style tools (`masterVolume`, `lpFilterCutoff`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        ParamId::ALL
            .iter()
            .copied()
            .find(|id| normalize_name(id.name()) == wanted)
            .ok_or_else(|| SynthError::unknown_param(s))
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Coarse grouping used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamGroup {
    Envelope,
    Compression,
    Pitch,
    Vibrato,
    Harmonics,
    PitchJump,
    Square,
    Repeat,
    Flanger,
    LowPass,
    HighPass,
    BitCrush,
}

impl ParamGroup {
    /// Human-readable group name.
    pub fn label(self) -> &'static str {
        match self {
            ParamGroup::Envelope => "Envelope",
            ParamGroup::Compression => "Compression",
            ParamGroup::Pitch => "Pitch",
            ParamGroup::Vibrato => "Vibrato",
            ParamGroup::Harmonics => "Harmonics",
            ParamGroup::PitchJump => "Pitch Jump",
            ParamGroup::Square => "Square",
            ParamGroup::Repeat => "Repeat",
            ParamGroup::Flanger => "Flanger",
            ParamGroup::LowPass => "Low-pass Filter",
            ParamGroup::HighPass => "High-pass Filter",
            ParamGroup::BitCrush => "Bit Crush",
        }
    }
}

/// Immutable description of one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Parameter identifier.
    pub id: ParamId,
    /// Snake-case name.
    pub name: &'static str,
    /// Short display label.
    pub label: &'static str,
    /// One-sentence explanation of what the knob does.
    pub description: &'static str,
    /// Display group.
    pub group: ParamGroup,
    /// Value after `reset()`.
    pub default: f64,
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
    /// Exponent applied to the uniform draw in `randomize()`.
    pub random_power: f64,
}

impl ParamDescriptor {
    /// Clamps `value` into `[min, max]`.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Width of the valid range.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Builds a table row; `bounds` is `(default, min, max, random_power)`.
const fn param(
    id: ParamId,
    name: &'static str,
    label: &'static str,
    description: &'static str,
    group: ParamGroup,
    bounds: (f64, f64, f64, f64),
) -> ParamDescriptor {
    ParamDescriptor {
        id,
        name,
        label,
        description,
        group,
        default: bounds.0,
        min: bounds.1,
        max: bounds.2,
        random_power: bounds.3,
    }
}

/// Descriptor table, indexed by [`ParamId::index`].
pub static PARAMETERS: [ParamDescriptor; PARAM_COUNT] = [
    param(
        ParamId::MasterVolume,
        "master_volume",
        "Master Volume",
        "Overall volume of the sound.",
        ParamGroup::Envelope,
        (0.5, 0.0, 1.0, 1.0),
    ),
    param(
        ParamId::AttackTime,
        "attack_time",
        "Attack Time",
        "Length of the volume envelope attack.",
        ParamGroup::Envelope,
        (0.0, 0.0, 1.0, 4.0),
    ),
    param(
        ParamId::SustainTime,
        "sustain_time",
        "Sustain Time",
        "Length of the volume envelope sustain.",
        ParamGroup::Envelope,
        (0.3, 0.0, 1.0, 2.0),
    ),
    param(
        ParamId::SustainPunch,
        "sustain_punch",
        "Punch",
        "Tilts the sustain envelope for more 'pop'.",
        ParamGroup::Envelope,
        (0.0, 0.0, 1.0, 2.0),
    ),
    param(
        ParamId::DecayTime,
        "decay_time",
        "Decay Time",
        "Length of the volume envelope decay.",
        ParamGroup::Envelope,
        (0.4, 0.0, 1.0, 1.0),
    ),
    param(
        ParamId::CompressionAmount,
        "compression_amount",
        "Compression",
        "Pushes amplitudes together into a narrower range so the sound stands out against background music.",
        ParamGroup::Compression,
        (0.3, 0.0, 1.0, 1.0),
    ),
    param(
        ParamId::StartFrequency,
        "start_frequency",
        "Frequency",
        "Base note of the sound.",
        ParamGroup::Pitch,
        (0.3, 0.0, 1.0, 1.0),
    ),
    param(
        ParamId::MinFrequency,
        "min_frequency",
        "Frequency Cutoff",
        "If sliding, the sound will stop at this frequency, to prevent really low notes. Forced to zero by randomization when unlocked.",
        ParamGroup::Pitch,
        (0.0, 0.0, 1.0, 1.0),
    ),
    param(
        ParamId::Slide,
        "slide",
        "Frequency Slide",
        "Slides the frequency up or down.",
        ParamGroup::Pitch,
        (0.0, -1.0, 1.0, 1.0),
    ),
    param(
        ParamId::DeltaSlide,
        "delta_slide",
        "Delta Slide",
        "Accelerates the frequency slide. Can be used to get the frequency to change direction.",
        ParamGroup::Pitch,
        (0.0, -1.0, 1.0, 1.0),
    ),
    param(
        ParamId::VibratoDepth,
        "vibrato_depth",
        "Vibrato Depth",
        "Strength of the vibrato effect.",
        ParamGroup::Vibrato,
        (0.0, 0.0, 1.0, 3.0),
    ),
    param(
        ParamId::VibratoSpeed,
        "vibrato_speed",
        "Vibrato Speed",
        "Speed of the vibrato effect (i.e. frequency).",
        ParamGroup::Vibrato,
        (0.0, 0.0, 1.0, 1.0),
    ),
    param(
        ParamId::Overtones,
        "overtones",
        "Harmonics",
        "Overlays copies of the waveform at multiples of its frequency. The most expensive knob to turn up.",
        ParamGroup::Harmonics,
        (0.0, 0.0, 1.0, 3.0),
    ),
    param(
        ParamId::OvertoneFalloff,
        "overtone_falloff",
        "Harmonics Falloff",
        "The rate at which higher overtones decay.",
        ParamGroup::Harmonics,
        (0.0, 0.0, 1.0, 0.25),
    ),
    param(
        ParamId::ChangeRepeat,
        "change_repeat",
        "Pitch Jump Repeat Speed",
        "Larger values mean more pitch jumps, which can be useful for arpeggiation.",
        ParamGroup::PitchJump,
        (0.0, 0.0, 1.0, 1.0),
    ),
    param(
        ParamId::ChangeAmount,
        "change_amount",
        "Pitch Jump Amount 1",
        "Jump in pitch, either up or down.",
        ParamGroup::PitchJump,
        (0.0, -1.0, 1.0, 1.0),
    ),
    param(
        ParamId::ChangeSpeed,
        "change_speed",
        "Pitch Jump Onset 1",
        "How quickly the note shift happens.",
        ParamGroup::PitchJump,
        (0.0, 0.0, 1.0, 1.0),
    ),
    param(
        ParamId::ChangeAmount2,
        "change_amount2",
        "Pitch Jump Amount 2",
        "Jump in pitch, either up or down.",
        ParamGroup::PitchJump,
        (0.0, -1.0, 1.0, 1.0),
    ),
    param(
        ParamId::ChangeSpeed2,
        "change_speed2",
        "Pitch Jump Onset 2",
        "How quickly the note shift happens.",
        ParamGroup::PitchJump,
        (0.0, 0.0, 1.0, 1.0),
    ),
    param(
        ParamId::SquareDuty,
        "square_duty",
        "Square Duty",
        "Square waveform only: ratio between the up and down states of the wave.",
        ParamGroup::Square,
        (0.0, 0.0, 1.0, 1.0),
    ),
    param(
        ParamId::DutySweep,
        "duty_sweep",
        "Duty Sweep",
        "Square waveform only: sweeps the duty up or down.",
        ParamGroup::Square,
        (0.0, -1.0, 1.0, 3.0),
    ),
    param(
        ParamId::RepeatSpeed,
        "repeat_speed",
        "Repeat Speed",
        "Speed of the note repeating. Pitch state is reset on each repeat.",
        ParamGroup::Repeat,
        (0.0, 0.0, 1.0, 1.0),
    ),
    param(
        ParamId::FlangerOffset,
        "flanger_offset",
        "Flanger Offset",
        "Offsets a second copy of the wave by a small phase, changing the timbre.",
        ParamGroup::Flanger,
        (0.0, -1.0, 1.0, 3.0),
    ),
    param(
        ParamId::FlangerSweep,
        "flanger_sweep",
        "Flanger Sweep",
        "Sweeps the phase up or down.",
        ParamGroup::Flanger,
        (0.0, -1.0, 1.0, 3.0),
    ),
    param(
        ParamId::LpFilterCutoff,
        "lp_filter_cutoff",
        "Low-pass Filter Cutoff",
        "Frequency at which the low-pass filter starts attenuating higher frequencies.",
        ParamGroup::LowPass,
        (1.0, 0.0, 1.0, 0.3),
    ),
    param(
        ParamId::LpFilterCutoffSweep,
        "lp_filter_cutoff_sweep",
        "Low-pass Filter Cutoff Sweep",
        "Sweeps the low-pass cutoff up or down.",
        ParamGroup::LowPass,
        (0.0, -1.0, 1.0, 1.0),
    ),
    param(
        ParamId::LpFilterResonance,
        "lp_filter_resonance",
        "Low-pass Filter Resonance",
        "Changes the attenuation rate for the low-pass filter, changing the timbre.",
        ParamGroup::LowPass,
        (0.0, 0.0, 1.0, 1.0),
    ),
    param(
        ParamId::HpFilterCutoff,
        "hp_filter_cutoff",
        "High-pass Filter Cutoff",
        "Frequency at which the high-pass filter starts attenuating lower frequencies.",
        ParamGroup::HighPass,
        (0.0, 0.0, 1.0, 5.0),
    ),
    param(
        ParamId::HpFilterCutoffSweep,
        "hp_filter_cutoff_sweep",
        "High-pass Filter Cutoff Sweep",
        "Sweeps the high-pass cutoff up or down.",
        ParamGroup::HighPass,
        (0.0, -1.0, 1.0, 1.0),
    ),
    param(
        ParamId::BitCrush,
        "bit_crush",
        "Bit Crush",
        "Resamples the audio at a lower frequency.",
        ParamGroup::BitCrush,
        (0.0, 0.0, 1.0, 4.0),
    ),
    param(
        ParamId::BitCrushSweep,
        "bit_crush_sweep",
        "Bit Crush Sweep",
        "Sweeps the bit crush resampling rate up or down.",
        ParamGroup::BitCrush,
        (0.0, -1.0, 1.0, 5.0),
    ),
];
