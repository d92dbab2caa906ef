//! Error types for the foragesim engine.
//!
//! Every failure the engine can report is a configuration error: once an
//! episode is well-formed, all per-tick geometry and arithmetic is total.
//! Any error aborts the whole episode and no fitness is produced.

use thiserror::Error;

/// Main error type for episode setup and execution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// World dimensions or food box do not describe a usable world
    #[error("Invalid world: {0}")]
    InvalidWorld(String),

    /// Food count must be positive
    #[error("Invalid food count: {0} (must be positive)")]
    InvalidFoodCount(usize),

    /// Tick budget must be positive
    #[error("Invalid tick budget: {0} (must be positive)")]
    InvalidTickBudget(u64),

    /// One decision function is required per agent
    #[error("Expected {expected} decision functions, got {actual}")]
    ControllerCount { expected: usize, actual: usize },

    /// A decision function broke the output contract
    #[error(
        "Decision function for agent {agent} returned {actual} values at tick {tick} (expected {expected})"
    )]
    DecisionLength {
        agent: usize,
        tick: u64,
        expected: usize,
        actual: usize,
    },

    /// Fitness was requested before the tick budget ran out
    #[error("Episode incomplete: tick {tick} of {budget}")]
    EpisodeIncomplete { tick: u64, budget: u64 },

    /// Any other out-of-range parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new invalid-world error.
    #[must_use]
    pub fn invalid_world<S: Into<String>>(msg: S) -> Self {
        Self::InvalidWorld(msg.into())
    }

    /// Creates a new invalid-parameter error.
    #[must_use]
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
