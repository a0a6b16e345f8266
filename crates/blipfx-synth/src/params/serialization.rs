//! JSON form of a [`ParameterSet`].
//!
//! ```json
//! {
//!   "wave_type": "square",
//!   "params": { "master_volume": 0.5, "attack_time": 0.0 },
//!   "locked": ["master_volume"],
//!   "wave_type_locked": false
//! }
//! ```
//!
//! Missing parameters take their defaults. Unknown parameter names are
//! rejected. Out-of-range values are clamped on load.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};

use super::{ParamId, ParameterSet, WaveType, PARAMETERS};
use crate::error::{SynthError, SynthResult};

/// On-disk shape used when reading a parameter file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParameterFile {
    #[serde(default)]
    wave_type: WaveType,
    #[serde(default)]
    params: BTreeMap<String, f64>,
    /// Absent means the reset lock state (master volume only).
    #[serde(default)]
    locked: Option<Vec<String>>,
    #[serde(default)]
    wave_type_locked: bool,
}

impl TryFrom<ParameterFile> for ParameterSet {
    type Error = SynthError;

    fn try_from(file: ParameterFile) -> Result<Self, Self::Error> {
        let mut params = ParameterSet::new();
        params.set_wave_type(file.wave_type);
        params.set_wave_type_locked(file.wave_type_locked);

        for (name, value) in &file.params {
            let id: ParamId = name.parse()?;
            params.values[id.index()] = *value;
        }
        params.make_valid();

        if let Some(locked) = file.locked {
            params.locked = [false; super::PARAM_COUNT];
            for name in &locked {
                let id: ParamId = name.parse()?;
                params.set_locked(id, true);
            }
        }

        Ok(params)
    }
}

/// Serializes the values in canonical table order.
struct OrderedValues<'a>(&'a ParameterSet);

impl Serialize for OrderedValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PARAMETERS.len()))?;
        for (desc, value, _) in self.0.iter() {
            map.serialize_entry(desc.name, &value)?;
        }
        map.end()
    }
}

impl Serialize for ParameterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let locked: Vec<&'static str> = self
            .iter()
            .filter(|(_, _, locked)| *locked)
            .map(|(desc, _, _)| desc.name)
            .collect();

        let mut state = serializer.serialize_struct("ParameterSet", 4)?;
        state.serialize_field("wave_type", &self.wave_type)?;
        state.serialize_field("params", &OrderedValues(self))?;
        state.serialize_field("locked", &locked)?;
        state.serialize_field("wave_type_locked", &self.wave_type_locked)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ParameterSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let file = ParameterFile::deserialize(deserializer)?;
        ParameterSet::try_from(file).map_err(serde::de::Error::custom)
    }
}

impl ParameterSet {
    /// Parses a parameter file.
    ///
    /// Unlike going through `serde_json::from_str::<ParameterSet>`, name
    /// errors surface as [`SynthError::UnknownParameter`] rather than being
    /// folded into a JSON error.
    pub fn from_json(json: &str) -> SynthResult<Self> {
        let file: ParameterFile = serde_json::from_str(json)?;
        ParameterSet::try_from(file)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SynthResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
