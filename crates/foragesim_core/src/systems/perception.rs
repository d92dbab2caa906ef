//! Vision-cone perception.
//!
//! Bearings use the same convention as movement: 0 degrees points along +x
//! and angles grow toward -y, so an agent heading straight at a food item
//! sees it at a relative angle of 0.

use super::movement::{heading_vector, normalize_heading};
use crate::config::PerceptionConfig;
use foragesim_data::{Agent, FoodItem, Perception, Position, VisionCone};

/// Bearing in degrees, `[0, 360)`, from `from` toward `to`.
#[must_use]
pub fn bearing_to(from: Position, to: Position) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    normalize_heading((-dy).atan2(dx).to_degrees())
}

/// `heading - bearing` wrapped into `(-180, 180]`.
#[must_use]
pub fn relative_angle(heading: f64, bearing: f64) -> f64 {
    let d = (heading - bearing).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

#[must_use]
pub fn distance(a: Position, b: Position) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Distance and relative angle of `food` if it lies inside the cone.
///
/// The radial limit is inclusive, the angular limit is strict.
#[must_use]
pub fn sight_line(
    position: Position,
    heading: f64,
    vision: &VisionCone,
    food: &FoodItem,
) -> Option<(f64, f64)> {
    let target = Position::new(food.x, food.y);
    let dist = distance(position, target);
    if dist > vision.distance {
        return None;
    }
    let offset = relative_angle(heading, bearing_to(position, target));
    if offset.abs() < vision.half_angle() {
        Some((dist, offset))
    } else {
        None
    }
}

/// Recomputes an agent's perception from scratch.
///
/// Food is scanned in slice order; on equal distances the earlier item wins.
/// Items the agent has already consumed are invisible to it.
#[must_use]
pub fn perceive(agent: &Agent, food: &[FoodItem], config: &PerceptionConfig) -> Perception {
    let mut perception = Perception::empty(config.no_food_distance, config.no_food_angle);
    let mut nearest: Option<(f64, f64)> = None;

    for item in food {
        if agent.has_consumed(item.id) {
            continue;
        }
        if let Some((dist, offset)) = sight_line(agent.position, agent.heading, &agent.vision, item)
        {
            perception.num_food_seen += 1;
            if nearest.map_or(true, |(best, _)| dist < best) {
                nearest = Some((dist, offset));
            }
        }
    }

    if let Some((dist, offset)) = nearest {
        perception.nearest_food_distance = dist;
        perception.nearest_food_relative_angle = offset;
    }
    perception
}

pub fn perception_system(agent: &mut Agent, food: &[FoodItem], config: &PerceptionConfig) {
    agent.perception = perceive(agent, food, config);
}

/// Apex and the two edge endpoints of the cone, for display.
#[must_use]
pub fn vision_cone_polygon(position: Position, heading: f64, vision: &VisionCone) -> [Position; 3] {
    let edge = |offset: f64| {
        let (dx, dy) = heading_vector(heading + offset);
        Position::new(
            position.x + vision.distance * dx,
            position.y + vision.distance * dy,
        )
    };
    [
        position,
        edge(-vision.half_angle()),
        edge(vision.half_angle()),
    ]
}
