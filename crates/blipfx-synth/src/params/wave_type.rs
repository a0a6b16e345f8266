//! Oscillator wave types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SynthError;

/// Oscillator shape selected for a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveType {
    /// Pulse wave with sweepable duty cycle.
    #[default]
    Square,
    /// Falling sawtooth.
    Saw,
    /// Parabolic sine approximation.
    Sine,
    /// White noise, redrawn once per period.
    Noise,
    /// Triangle wave.
    Triangle,
    /// Voss-McCartney pink noise, redrawn once per period.
    Pink,
    /// `tan` of the phase; deliberately unstable and distorted.
    Tan,
    /// Sine with a quarter-amplitude overtone at 20x the frequency.
    Whistle,
    /// Quadratic fold, a harsher triangle.
    Breaker,
    /// SN76489-style periodic one-bit noise.
    OneBitNoise,
    /// One-bit LFSR noise with different feedback taps.
    Buzz,
}

impl WaveType {
    /// Number of wave types.
    pub const COUNT: usize = 11;

    /// All wave types in index order.
    pub const ALL: [WaveType; WaveType::COUNT] = [
        WaveType::Square,
        WaveType::Saw,
        WaveType::Sine,
        WaveType::Noise,
        WaveType::Triangle,
        WaveType::Pink,
        WaveType::Tan,
        WaveType::Whistle,
        WaveType::Breaker,
        WaveType::OneBitNoise,
        WaveType::Buzz,
    ];

    /// Index of this wave type in [`WaveType::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wave type at `index`, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Snake-case name.
    pub fn name(self) -> &'static str {
        match self {
            WaveType::Square => "square",
            WaveType::Saw => "saw",
            WaveType::Sine => "sine",
            WaveType::Noise => "noise",
            WaveType::Triangle => "triangle",
            WaveType::Pink => "pink",
            WaveType::Tan => "tan",
            WaveType::Whistle => "whistle",
            WaveType::Breaker => "breaker",
            WaveType::OneBitNoise => "one_bit_noise",
            WaveType::Buzz => "buzz",
        }
    }

    /// True for the shapes that read from a refreshed noise buffer.
    pub fn is_buffered_noise(self) -> bool {
        matches!(self, WaveType::Noise | WaveType::Pink | WaveType::Tan)
    }
}

impl fmt::Display for WaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveType {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase().replace('-', "_");
        match lowered.as_str() {
            "sin" => return Ok(WaveType::Sine),
            "onebitnoise" | "one_bit" => return Ok(WaveType::OneBitNoise),
            _ => {}
        }
        WaveType::ALL
            .iter()
            .copied()
            .find(|w| w.name() == lowered)
            .ok_or_else(|| SynthError::UnknownWaveType { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (i, wave) in WaveType::ALL.iter().enumerate() {
            assert_eq!(wave.index(), i);
            assert_eq!(WaveType::from_index(i), Some(*wave));
        }
        assert_eq!(WaveType::from_index(WaveType::COUNT), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("square".parse::<WaveType>().unwrap(), WaveType::Square);
        assert_eq!("Sin".parse::<WaveType>().unwrap(), WaveType::Sine);
        assert_eq!(
            "one-bit-noise".parse::<WaveType>().unwrap(),
            WaveType::OneBitNoise
        );
        assert!("organ".parse::<WaveType>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&WaveType::OneBitNoise).unwrap();
        assert_eq!(json, "\"one_bit_noise\"");
        let back: WaveType = serde_json::from_str("\"whistle\"").unwrap();
        assert_eq!(back, WaveType::Whistle);
    }
}
