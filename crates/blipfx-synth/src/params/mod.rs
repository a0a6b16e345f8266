//! The parameter model: every tunable knob, its bounds, and its lock flag.
//!
//! A [`ParameterSet`] is the only input to synthesis. It is edited in place by
//! the archetype generators, by [`ParameterSet::mutate`] and
//! [`ParameterSet::randomize`], or directly through [`ParameterSet::set`].
//! Values are clamped into their descriptor bounds on every assignment.

mod archetype;
mod descriptor;
mod random;
mod serialization;
mod wave_type;


pub use archetype::Archetype;
pub use descriptor::{ParamDescriptor, ParamGroup, ParamId, PARAMETERS, PARAM_COUNT};
pub use random::DEFAULT_MUTATION;
pub use wave_type::WaveType;

use rand::Rng;

/// Draws a uniform value in `[0, 1)`.
#[inline]
pub(crate) fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}

/// A complete set of synthesis parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    wave_type: WaveType,
    wave_type_locked: bool,
    values: [f64; PARAM_COUNT],
    locked: [bool; PARAM_COUNT],
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSet {
    /// Creates a parameter set with every value at its default.
    pub fn new() -> Self {
        let mut params = Self {
            wave_type: WaveType::Square,
            wave_type_locked: false,
            values: [0.0; PARAM_COUNT],
            locked: [false; PARAM_COUNT],
        };
        params.reset();
        params
    }

    /// Restores every default, clears all locks except master volume, and
    /// selects the square wave.
    pub fn reset(&mut self) {
        self.wave_type = WaveType::Square;
        self.wave_type_locked = false;
        for desc in PARAMETERS.iter() {
            self.values[desc.id.index()] = desc.default;
            self.locked[desc.id.index()] = false;
        }
        self.locked[ParamId::MasterVolume.index()] = true;
    }

    /// Current value of `id`.
    #[inline]
    pub fn get(&self, id: ParamId) -> f64 {
        self.values[id.index()]
    }

    /// Assigns `value` to `id`, clamped into the parameter's bounds.
    ///
    /// NaN is not a value; assigning it leaves the parameter unchanged.
    pub fn set(&mut self, id: ParamId, value: f64) {
        if value.is_nan() {
            return;
        }
        self.values[id.index()] = id.descriptor().clamp(value);
    }

    /// Whether `id` is protected from mutation and randomization.
    #[inline]
    pub fn is_locked(&self, id: ParamId) -> bool {
        self.locked[id.index()]
    }

    /// Sets the lock flag of `id`.
    pub fn set_locked(&mut self, id: ParamId, locked: bool) {
        self.locked[id.index()] = locked;
    }

    /// Selected oscillator shape.
    #[inline]
    pub fn wave_type(&self) -> WaveType {
        self.wave_type
    }

    /// Selects the oscillator shape.
    pub fn set_wave_type(&mut self, wave_type: WaveType) {
        self.wave_type = wave_type;
    }

    /// Whether the wave type is protected from randomization.
    pub fn is_wave_type_locked(&self) -> bool {
        self.wave_type_locked
    }

    /// Sets the wave type lock flag.
    pub fn set_wave_type_locked(&mut self, locked: bool) {
        self.wave_type_locked = locked;
    }

    /// Sets every lock flag, including the wave type's.
    pub fn set_all_locked(&mut self, locked: bool) {
        self.wave_type_locked = locked;
        self.locked = [locked; PARAM_COUNT];
    }

    /// Re-clamps every value into its bounds.
    pub fn make_valid(&mut self) {
        for desc in PARAMETERS.iter() {
            let value = self.values[desc.id.index()];
            self.values[desc.id.index()] = if value.is_nan() {
                desc.default
            } else {
                desc.clamp(value)
            };
        }
    }

    /// Iterates `(descriptor, value, locked)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static ParamDescriptor, f64, bool)> + '_ {
        PARAMETERS
            .iter()
            .map(move |desc| (desc, self.values[desc.id.index()], self.locked[desc.id.index()]))
    }

    /// Sum of attack, sustain and decay times.
    pub fn total_time(&self) -> f64 {
        self.get(ParamId::AttackTime) + self.get(ParamId::SustainTime) + self.get(ParamId::DecayTime)
    }
}
