//! Per-agent simulation systems.
//!
//! Each system is a plain function over one agent plus read-only world data,
//! so the episode driver can run agents sequentially or on a thread pool.

pub mod collision;
pub mod fitness;
pub mod movement;
pub mod perception;
pub mod region;
