//! Agent creation.

use crate::config::AppConfig;
use crate::systems::movement::normalize_heading;
use foragesim_data::{Agent, AgentId, ControllerId, Perception, Position, Region, VisionCone};
use std::collections::BTreeSet;

/// Creates agent `index` at the configured spawn point with every counter zeroed.
///
/// The agent is driven by the decision function at the same index.
#[must_use]
pub fn create_agent(index: usize, config: &AppConfig) -> Agent {
    Agent {
        id: AgentId(index),
        controller: ControllerId(index),
        position: Position::new(config.agent.spawn_x, config.agent.spawn_y),
        heading: normalize_heading(config.agent.heading),
        speed: config.agent.speed,
        rotation_speed: config.agent.rotation_speed,
        vision: VisionCone {
            angle: config.perception.cone_angle,
            distance: config.perception.cone_distance,
        },
        hunger: 0,
        consumed_food: BTreeSet::new(),
        visited_regions: BTreeSet::new(),
        current_region: Region::OffMap,
        nearest_wall_distance: 0.0,
        perception: Perception::empty(
            config.perception.no_food_distance,
            config.perception.no_food_angle,
        ),
        fitness: 0.0,
    }
}

#[must_use]
pub fn spawn_agents(config: &AppConfig) -> Vec<Agent> {
    (0..config.agent.count)
        .map(|i| create_agent(i, config))
        .collect()
}
