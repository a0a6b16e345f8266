//! CLI command implementations

pub mod archetypes;
pub mod mutate;
pub mod params;
pub mod preset;
pub mod random;
pub mod render;

mod output;

pub use output::SoundReport;
