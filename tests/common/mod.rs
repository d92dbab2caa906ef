use foragesim_lib::model::config::AppConfig;
use foragesim_lib::model::data::{FoodItem, SensorVector};
use foragesim_lib::model::decision::{decision_fn, DecisionFn};
use foragesim_lib::model::Episode;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub struct EpisodeBuilder {
    config: AppConfig,
    food: Vec<FoodItem>,
}

#[allow(dead_code)]
impl EpisodeBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.agent.count = 1;
        config.episode.tick_budget = 10;
        config.episode.log_interval = 0;
        Self {
            config,
            food: Vec::new(),
        }
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_agents(mut self, count: usize) -> Self {
        self.config.agent.count = count;
        self
    }

    pub fn with_ticks(mut self, ticks: u64) -> Self {
        self.config.episode.tick_budget = ticks;
        self
    }

    pub fn spawn_at(mut self, x: f64, y: f64, heading: f64) -> Self {
        self.config.agent.spawn_x = x;
        self.config.agent.spawn_y = y;
        self.config.agent.heading = heading;
        self
    }

    pub fn with_food(mut self, x: f64, y: f64) -> Self {
        let id = self.food.len();
        self.food.push(FoodItem::new(id, x, y));
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Food in a far corner is added when none was requested.
    pub fn build(self) -> Episode {
        let mut food = self.food;
        if food.is_empty() {
            food.push(FoodItem::new(0, 0.0, 0.0));
        }
        Episode::with_food(self.config, food).expect("Failed to build episode")
    }
}

/// Controller that records every sensor vector it receives.
#[allow(dead_code)]
pub fn recording(outputs: Vec<f64>) -> (impl DecisionFn, Arc<Mutex<Vec<SensorVector>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let controller = decision_fn(move |inputs: &SensorVector| {
        sink.lock().unwrap().push(*inputs);
        outputs.clone()
    });
    (controller, log)
}

#[allow(dead_code)]
pub fn seeded_config(seed: u64, agents: usize, ticks: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.world.seed = Some(seed);
    config.agent.count = agents;
    config.episode.tick_budget = ticks;
    config.episode.log_interval = 0;
    config
}
