//! Loading parameter files and resolving lock names.

use anyhow::{Context, Result};
use blipfx_synth::{ParamId, ParameterSet};
use std::fs;
use std::path::Path;

/// Lock target accepted by `--lock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockTarget {
    /// The oscillator wave type.
    WaveType,
    /// A continuous parameter.
    Param(ParamId),
}

impl LockTarget {
    /// Parses a lock name: `wave_type` or any parameter name.
    pub fn parse(name: &str) -> Result<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if normalized == "wavetype" {
            return Ok(LockTarget::WaveType);
        }
        let id = name
            .parse::<ParamId>()
            .with_context(|| format!("Cannot lock '{}'", name))?;
        Ok(LockTarget::Param(id))
    }
}

/// Reads a parameter set from a JSON file.
///
/// Out-of-range values are clamped; unknown parameter names are an error.
pub fn load_params(path: &str) -> Result<ParameterSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameter file: {}", path))?;
    ParameterSet::from_json(&content)
        .with_context(|| format!("Failed to parse parameter file: {}", path))
}

/// Loads `path` if given, otherwise returns the default set.
pub fn load_params_or_default(path: Option<&str>) -> Result<ParameterSet> {
    match path {
        Some(path) => load_params(path),
        None => Ok(ParameterSet::new()),
    }
}

/// Locks every named target in `params`.
pub fn apply_locks(params: &mut ParameterSet, names: &[String]) -> Result<()> {
    for name in names {
        match LockTarget::parse(name)? {
            LockTarget::WaveType => params.set_wave_type_locked(true),
            LockTarget::Param(id) => params.set_locked(id, true),
        }
    }
    Ok(())
}

/// Writes `params` as pretty JSON.
pub fn save_params(params: &ParameterSet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = params
        .to_json_pretty()
        .context("Failed to serialize parameters")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write parameter file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blipfx_synth::WaveType;

    #[test]
    fn test_lock_target_parse() {
        assert_eq!(LockTarget::parse("wave_type").unwrap(), LockTarget::WaveType);
        assert_eq!(LockTarget::parse("waveType").unwrap(), LockTarget::WaveType);
        assert_eq!(
            LockTarget::parse("start_frequency").unwrap(),
            LockTarget::Param(ParamId::StartFrequency)
        );
        assert_eq!(
            LockTarget::parse("slide").unwrap(),
            LockTarget::Param(ParamId::Slide)
        );
        assert!(LockTarget::parse("wobble").is_err());
    }

    #[test]
    fn test_apply_locks() {
        let mut params = ParameterSet::new();
        apply_locks(&mut params, &["slide".to_string(), "wave_type".to_string()]).unwrap();
        assert!(params.is_locked(ParamId::Slide));
        assert!(params.is_wave_type_locked());
        assert!(!params.is_locked(ParamId::DecayTime));
    }

    #[test]
    fn test_save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("sound.json");

        let mut params = ParameterSet::new();
        params.set_wave_type(WaveType::Breaker);
        params.set(ParamId::Slide, -0.25);
        save_params(&params, &path).unwrap();

        let loaded = load_params(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.wave_type(), WaveType::Breaker);
        assert_eq!(loaded.get(ParamId::Slide), -0.25);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_params("/nonexistent/blipfx/params.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read parameter file"));
    }

    #[test]
    fn test_load_rejects_unknown_parameter() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, r#"{"params": {"wobble": 0.5}}"#).unwrap();

        let err = load_params(path.to_str().unwrap()).unwrap_err();
        assert!(format!("{:#}", err).contains("wobble"));
    }

    #[test]
    fn test_load_or_default() {
        assert_eq!(load_params_or_default(None).unwrap(), ParameterSet::new());
    }
}
