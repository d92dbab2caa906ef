//! Core data structures for the foragesim simulation.

pub mod agent;
pub mod food;
pub mod sensor;
