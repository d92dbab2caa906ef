//! Configuration management for episode parameters.
//!
//! This module provides strongly-typed configuration structures that map to a
//! `config.toml` file. Every table is optional; missing tables and fields fall
//! back to the values in the `Default` impls.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 1000
//! height = 1000
//! food_count = 20
//! seed = 42
//!
//! [agent]
//! count = 50
//! speed = 1.0
//!
//! [episode]
//! tick_budget = 3000
//! ```

use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};

/// World-level configuration: bounds, food population and random seed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    pub food_count: usize,
    /// Seed for food placement. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            food_count: 20,
            seed: None,
        }
    }
}

/// Per-agent body and locomotion parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    pub count: usize,
    pub spawn_x: f64,
    pub spawn_y: f64,
    /// Units moved per tick when a translation gate fires.
    pub speed: f64,
    /// Degrees turned per tick when a turn gate fires.
    pub rotation_speed: f64,
    /// Initial heading in degrees.
    pub heading: f64,
    /// Action components strictly above this value fire their gate.
    pub activation_threshold: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            count: 50,
            spawn_x: 500.0,
            spawn_y: 500.0,
            speed: 1.0,
            rotation_speed: 1.0,
            heading: 0.0,
            activation_threshold: 0.5,
        }
    }
}

/// Vision cone and perception sentinels.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PerceptionConfig {
    /// Full opening angle of the cone in degrees.
    pub cone_angle: f64,
    pub cone_distance: f64,
    /// Reported distance when no food is visible.
    pub no_food_distance: f64,
    /// Reported relative angle when no food is visible.
    pub no_food_angle: f64,
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            cone_angle: 60.0,
            cone_distance: 200.0,
            no_food_distance: 1000.0,
            no_food_angle: 180.0,
        }
    }
}

/// Bounding-box sizes used for consumption.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CollisionConfig {
    /// Side of the square centered on the agent.
    pub agent_size: f64,
    /// Side of the square anchored at the food's top-left corner.
    pub food_size: f64,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            agent_size: 32.0,
            food_size: 16.0,
        }
    }
}

/// Scoring weights.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FitnessConfig {
    pub food_reward: f64,
    pub region_reward: f64,
    /// Subtracted once if the agent ever left the map.
    pub off_map_penalty: f64,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        Self {
            food_reward: 1.0,
            region_reward: 1.0,
            off_map_penalty: 5.0,
        }
    }
}

/// Episode driver settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EpisodeConfig {
    pub tick_budget: u64,
    /// Update agents on the rayon pool within each tick.
    pub parallel: bool,
    /// Progress is logged every `log_interval` ticks; 0 disables it.
    pub log_interval: u64,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            tick_budget: 30_000,
            parallel: false,
            log_interval: 1000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub agent: AgentConfig,
    pub perception: PerceptionConfig,
    pub collision: CollisionConfig,
    pub fitness: FitnessConfig,
    pub episode: EpisodeConfig,
}

fn ensure(cond: bool, msg: &str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(SimError::invalid_parameter(msg))
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns the first violation found. An agent count of zero is valid
    /// and produces an empty fitness list.
    pub fn validate(&self) -> Result<()> {
        if self.world.width == 0 {
            return Err(SimError::invalid_world("width must be positive"));
        }
        if self.world.height == 0 {
            return Err(SimError::invalid_world("height must be positive"));
        }
        if self.world.food_count == 0 {
            return Err(SimError::InvalidFoodCount(self.world.food_count));
        }
        if self.episode.tick_budget == 0 {
            return Err(SimError::InvalidTickBudget(self.episode.tick_budget));
        }

        ensure(
            self.collision.agent_size > 0.0 && self.collision.agent_size.is_finite(),
            "Agent size must be positive",
        )?;
        ensure(
            self.collision.food_size > 0.0 && self.collision.food_size.is_finite(),
            "Food size must be positive",
        )?;
        if self.collision.food_size > f64::from(self.world.width)
            || self.collision.food_size > f64::from(self.world.height)
        {
            return Err(SimError::invalid_world("food size exceeds world bounds"));
        }

        ensure(
            self.agent.spawn_x.is_finite() && self.agent.spawn_y.is_finite(),
            "Spawn point must be finite",
        )?;
        ensure(
            self.agent.speed >= 0.0 && self.agent.speed.is_finite(),
            "Speed must be non-negative",
        )?;
        ensure(
            self.agent.rotation_speed >= 0.0 && self.agent.rotation_speed.is_finite(),
            "Rotation speed must be non-negative",
        )?;
        ensure(self.agent.heading.is_finite(), "Heading must be finite")?;
        ensure(
            self.agent.activation_threshold.is_finite(),
            "Activation threshold must be finite",
        )?;

        ensure(
            self.perception.cone_angle > 0.0 && self.perception.cone_angle <= 360.0,
            "Cone angle must be in (0, 360]",
        )?;
        ensure(
            self.perception.cone_distance >= 0.0 && self.perception.cone_distance.is_finite(),
            "Cone distance must be non-negative",
        )?;
        ensure(
            self.perception.no_food_distance >= self.perception.cone_distance,
            "No-food distance must not be smaller than the cone distance",
        )?;

        ensure(
            self.fitness.food_reward >= 0.0,
            "Food reward must be non-negative",
        )?;
        ensure(
            self.fitness.region_reward >= 0.0,
            "Region reward must be non-negative",
        )?;
        ensure(
            self.fitness.off_map_penalty >= 0.0,
            "Off-map penalty must be non-negative",
        )?;

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;
        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Hash of every parameter that influences fitness.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.agent).as_bytes());
        hasher.update(format!("{:?}", self.perception).as_bytes());
        hasher.update(format!("{:?}", self.collision).as_bytes());
        hasher.update(format!("{:?}", self.fitness).as_bytes());
        hasher.update(self.episode.tick_budget.to_le_bytes());
        hex::encode(hasher.finalize())
    }
}
