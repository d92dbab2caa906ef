//! Read-only views of an episode for renderers and reports.

use crate::episode::SimulationState;
use crate::systems::perception::vision_cone_polygon;
use foragesim_data::{AgentId, FoodId, FoodItem, Perception, Position};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub hunger: u64,
    pub region: i32,
    pub fitness: f64,
    pub perception: Perception,
    pub consumed_food: Vec<FoodId>,
    /// Apex followed by the two cone edge endpoints.
    pub vision_cone: [Position; 3],
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EpisodeSnapshot {
    pub tick: u64,
    pub width: u32,
    pub height: u32,
    pub food: Vec<FoodItem>,
    pub agents: Vec<AgentSnapshot>,
}

impl EpisodeSnapshot {
    #[must_use]
    pub fn capture(state: &SimulationState) -> Self {
        let agents = state
            .agents
            .iter()
            .map(|a| AgentSnapshot {
                id: a.id,
                x: a.position.x,
                y: a.position.y,
                heading: a.heading,
                hunger: a.hunger,
                region: a.current_region.index(),
                fitness: a.fitness,
                perception: a.perception,
                consumed_food: a.consumed_food.iter().copied().collect(),
                vision_cone: vision_cone_polygon(a.position, a.heading, &a.vision),
            })
            .collect();

        Self {
            tick: state.world.tick,
            width: state.world.width,
            height: state.world.height,
            food: state.world.food.clone(),
            agents,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
