use super::food::FoodId;
use super::sensor::Region;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// World position. `y` grows downward, matching screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Index of an agent within its episode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct AgentId(pub usize);

/// Opaque handle resolving to the decision function that drives an agent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct ControllerId(pub usize);

/// Field of view. `angle` is the full opening in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisionCone {
    pub angle: f64,
    pub distance: f64,
}

impl VisionCone {
    #[must_use]
    pub fn half_angle(&self) -> f64 {
        self.angle / 2.0
    }
}

/// What an agent saw during the latest perception pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Perception {
    pub num_food_seen: u32,
    pub nearest_food_distance: f64,
    /// Heading minus bearing to the nearest visible food, in degrees.
    pub nearest_food_relative_angle: f64,
}

impl Perception {
    #[must_use]
    pub fn empty(no_food_distance: f64, no_food_angle: f64) -> Self {
        Self {
            num_food_seen: 0,
            nearest_food_distance: no_food_distance,
            nearest_food_relative_angle: no_food_angle,
        }
    }

    #[must_use]
    pub fn sees_food(&self) -> bool {
        self.num_food_seen > 0
    }
}

/// Full per-agent simulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub controller: ControllerId,
    pub position: Position,
    /// Degrees in `[0, 360)`. 0 faces +x, 90 faces -y.
    pub heading: f64,
    pub speed: f64,
    pub rotation_speed: f64,
    pub vision: VisionCone,
    /// Ticks since the last consumption.
    pub hunger: u64,
    pub consumed_food: BTreeSet<FoodId>,
    pub visited_regions: BTreeSet<Region>,
    pub current_region: Region,
    pub nearest_wall_distance: f64,
    pub perception: Perception,
    pub fitness: f64,
}

impl Agent {
    #[must_use]
    pub fn has_consumed(&self, food: FoodId) -> bool {
        self.consumed_food.contains(&food)
    }

    #[must_use]
    pub fn has_left_map(&self) -> bool {
        self.visited_regions.contains(&Region::OffMap)
    }
}
