//! blipfx CLI library.
//!
//! Command implementations and parameter-file loading for the `blipfx`
//! binary, kept in a library so integration tests can drive them directly.

pub mod commands;
pub mod input;
