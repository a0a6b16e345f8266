//! Seeded parameter fixtures.

use blipfx_synth::rng::create_params_rng;
use blipfx_synth::{Archetype, ParameterSet, WaveType};

/// A named parameter set with the seed used to build and render it.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: String,
    pub seed: u32,
    pub params: ParameterSet,
}

/// One preset per archetype at `seed`.
pub fn archetype_fixtures(seed: u32) -> Vec<Fixture> {
    Archetype::ALL
        .iter()
        .map(|&archetype| {
            let mut params = ParameterSet::new();
            params.generate(archetype, &mut create_params_rng(seed));
            Fixture {
                name: format!("{}_{}", archetype.name(), seed),
                seed,
                params,
            }
        })
        .collect()
}

/// Default parameters on every wave type.
pub fn wave_fixtures() -> Vec<Fixture> {
    WaveType::ALL
        .iter()
        .map(|&wave_type| {
            let mut params = ParameterSet::new();
            params.set_wave_type(wave_type);
            Fixture {
                name: wave_type.name().to_string(),
                seed: 0,
                params,
            }
        })
        .collect()
}

/// A fully randomized set at `seed`.
pub fn random_fixture(seed: u32) -> Fixture {
    let mut params = ParameterSet::new();
    params.randomize(&mut create_params_rng(seed));
    Fixture {
        name: format!("random_{}", seed),
        seed,
        params,
    }
}
