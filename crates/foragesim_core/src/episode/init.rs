use super::{Episode, EpisodePhase, SimulationState};
use crate::config::AppConfig;
use crate::error::{Result, SimError};
use crate::lifecycle;
use crate::metrics::EpisodeMetrics;
use crate::systems::{perception, region};
use crate::world::World;
use foragesim_data::FoodItem;
use rand::Rng;
use uuid::Uuid;

impl Episode {
    /// Validates `config`, places food with `rng` and spawns every agent.
    pub fn new<R: Rng + ?Sized>(config: AppConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let world = World::generate(&config, rng);
        Ok(Self::assemble(config, world))
    }

    /// Like [`Episode::new`] but with a caller-chosen food layout.
    /// `config.world.food_count` is replaced by `food.len()`.
    pub fn with_food(mut config: AppConfig, food: Vec<FoodItem>) -> Result<Self> {
        if food.is_empty() {
            return Err(SimError::InvalidFoodCount(0));
        }
        config.world.food_count = food.len();
        config.validate()?;
        let world = World::with_food(config.world.width, config.world.height, food);
        Ok(Self::assemble(config, world))
    }

    fn assemble(config: AppConfig, world: World) -> Self {
        let regions = world.region_grid();
        let mut agents = lifecycle::spawn_agents(&config);
        // First decisions see the real surroundings; no region is recorded as visited yet.
        for agent in &mut agents {
            perception::perception_system(agent, &world.food, &config.perception);
            region::locate(agent, &regions);
        }

        let id = Uuid::new_v4();
        tracing::info!(
            episode = %id,
            agents = agents.len(),
            food = world.food.len(),
            tick_budget = config.episode.tick_budget,
            "Episode initialized"
        );

        Self {
            id,
            metrics: EpisodeMetrics::new(config.episode.log_interval),
            state: SimulationState {
                world,
                agents,
                regions,
            },
            phase: EpisodePhase::Init,
            config,
        }
    }
}
