//! Plain data types shared by the foragesim engine and its collaborators.
//!
//! Nothing in this crate carries behaviour beyond small accessors; the
//! simulation rules live in `foragesim_core`.

pub mod data;

pub use data::agent::*;
pub use data::food::*;
pub use data::sensor::*;
