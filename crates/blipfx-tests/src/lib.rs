//! blipfx end-to-end test infrastructure
//!
//! Shared helpers for the integration tests in `tests/`:
//!
//! - [`fixtures`] - seeded parameter sets covering every archetype and wave
//! - [`determinism`] - byte-level comparison of repeated generations
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p blipfx-tests
//!
//! # Long seed sweeps
//! cargo test -p blipfx-tests -- --ignored
//! ```

pub mod determinism;
pub mod fixtures;
