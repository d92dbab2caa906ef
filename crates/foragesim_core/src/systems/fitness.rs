//! Fitness accumulation: per-tick consumption rewards and the exploration
//! bonus applied once at the end of an episode.

use crate::config::FitnessConfig;
use foragesim_data::Agent;

pub fn award_consumption(agent: &mut Agent, newly_consumed: usize, config: &FitnessConfig) {
    agent.fitness += newly_consumed as f64 * config.food_reward;
}

/// Exploration bonus minus the flat off-map penalty.
#[must_use]
pub fn exploration_score(agent: &Agent, config: &FitnessConfig) -> f64 {
    let mut score = agent.visited_regions.len() as f64 * config.region_reward;
    if agent.has_left_map() {
        score -= config.off_map_penalty;
    }
    score
}

/// Applies the end-of-episode adjustment and returns the final fitness.
pub fn finalize_fitness(agent: &mut Agent, config: &FitnessConfig) -> f64 {
    agent.fitness += exploration_score(agent, config);
    agent.fitness
}
