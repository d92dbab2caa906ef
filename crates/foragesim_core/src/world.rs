//! World bounds and the food population of one episode.

use crate::config::AppConfig;
use crate::systems::region::RegionGrid;
use foragesim_data::FoodItem;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Builds the food-placement source: seeded when `world.seed` is set.
#[must_use]
pub fn episode_rng(config: &AppConfig) -> ChaCha8Rng {
    match config.world.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub width: u32,
    pub height: u32,
    /// Food in creation order. Never moved or removed during an episode.
    pub food: Vec<FoodItem>,
    pub tick: u64,
}

impl World {
    /// Places `config.world.food_count` items at integer coordinates so each
    /// food box lies fully inside the world.
    pub fn generate<R: Rng + ?Sized>(config: &AppConfig, rng: &mut R) -> Self {
        let max_x = (f64::from(config.world.width) - config.collision.food_size).floor() as u32;
        let max_y = (f64::from(config.world.height) - config.collision.food_size).floor() as u32;
        let food = (0..config.world.food_count)
            .map(|id| {
                let x = rng.gen_range(0..=max_x);
                let y = rng.gen_range(0..=max_y);
                FoodItem::new(id, f64::from(x), f64::from(y))
            })
            .collect();
        Self::with_food(config.world.width, config.world.height, food)
    }

    /// World with an explicit food layout. Ids are reassigned to creation order.
    #[must_use]
    pub fn with_food(width: u32, height: u32, food: Vec<FoodItem>) -> Self {
        let food = food
            .into_iter()
            .enumerate()
            .map(|(id, f)| FoodItem::new(id, f.x, f.y))
            .collect();
        Self {
            width,
            height,
            food,
            tick: 0,
        }
    }

    #[must_use]
    pub fn region_grid(&self) -> RegionGrid {
        RegionGrid::new(self.width, self.height)
    }
}
