//! # Foragesim Core
//!
//! The simulation engine for foragesim - a bounded 2D foraging world used to
//! score externally controlled agents.
//!
//! This crate contains the episode logic, including:
//! - Vision-cone perception of food
//! - Gated movement integration
//! - Axis-aligned consumption checks
//! - 3x3 region exploration tracking and fitness accumulation
//! - The fixed-length episode loop, sync, async and batched
//!
//! ## Architecture
//!
//! Each tick runs the same pipeline for every agent: build the sensor vector,
//! ask its decision function for an action, move, perceive, record the
//! region, eat. All agents finish before the tick counter advances. Agent
//! updates can run on the rayon pool (`parallel` feature plus
//! `episode.parallel = true`).
//!
//! ## Example
//!
//! ```
//! use foragesim_core::decision::IdleController;
//! use foragesim_core::{run_episode, AppConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut config = AppConfig::default();
//! config.agent.count = 2;
//! config.episode.tick_budget = 100;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut controllers = vec![IdleController; 2];
//! let fitness = run_episode(&config, &mut controllers, &mut rng).unwrap();
//! assert_eq!(fitness.len(), 2);
//! ```

/// Configuration management for episode parameters
pub mod config;
/// Decision-function contract and reference controllers
pub mod decision;
/// Episode state machine and runners
pub mod episode;
/// Engine error type
pub mod error;
/// Agent creation
pub mod lifecycle;
/// Episode counters and structured logging
pub mod metrics;
/// One-episode-per-member batch evaluation
pub mod population;
/// Serializable episode views for renderers
pub mod snapshot;
/// Per-tick systems (Perception, Movement, Region, Collision, Fitness)
pub mod systems;
/// World bounds and food placement
pub mod world;

pub use config::AppConfig;
pub use decision::{AsyncDecisionFn, DecisionFn};
pub use episode::{
    run_episode, run_episode_async, Episode, EpisodePhase, EpisodeReport, SimulationState,
    TickObserver,
};
pub use error::SimError;
pub use metrics::{init_logging, EpisodeMetrics};
pub use population::evaluate_population;
pub use snapshot::EpisodeSnapshot;
pub use world::{episode_rng, World};
