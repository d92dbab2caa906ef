//! Library facade for the foragesim application.
//!
//! Re-exports the engine under `model` and hosts the headless episode driver
//! used by the `foragesim` binary.

pub mod app;
pub mod model;
