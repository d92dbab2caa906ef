//! Axis-aligned agent/food overlap and per-agent consumption.

use crate::config::CollisionConfig;
use foragesim_data::{Agent, FoodId, FoodItem, Position};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb {
    /// Square of side `size` centered on `center`.
    #[must_use]
    pub fn centered(center: Position, size: f64) -> Self {
        let half = size / 2.0;
        Self {
            min_x: center.x - half,
            min_y: center.y - half,
            max_x: center.x + half,
            max_y: center.y + half,
        }
    }

    /// Square of side `size` with its top-left corner at `corner`.
    #[must_use]
    pub fn anchored(corner: Position, size: f64) -> Self {
        Self {
            min_x: corner.x,
            min_y: corner.y,
            max_x: corner.x + size,
            max_y: corner.y + size,
        }
    }

    /// Strict overlap; boxes that only share an edge do not collide.
    #[must_use]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }
}

/// Ids of not-yet-consumed food overlapping the agent, in food order.
#[must_use]
pub fn detect_overlaps(agent: &Agent, food: &[FoodItem], config: &CollisionConfig) -> Vec<FoodId> {
    let body = Aabb::centered(agent.position, config.agent_size);
    food.iter()
        .filter(|item| !agent.has_consumed(item.id))
        .filter(|item| {
            body.overlaps(&Aabb::anchored(
                Position::new(item.x, item.y),
                config.food_size,
            ))
        })
        .map(|item| item.id)
        .collect()
}

/// Marks overlapping food consumed for this agent and resets its hunger.
///
/// Returns the ids consumed this call. Food already in the consumed set is
/// never returned again.
pub fn collision_system(
    agent: &mut Agent,
    food: &[FoodItem],
    config: &CollisionConfig,
) -> Vec<FoodId> {
    let mut eaten = detect_overlaps(agent, food, config);
    eaten.retain(|id| agent.consumed_food.insert(*id));
    if !eaten.is_empty() {
        agent.hunger = 0;
    }
    eaten
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::lifecycle;

    #[test]
    fn test_aabb_overlap_is_strict() {
        let a = Aabb::anchored(Position::new(0.0, 0.0), 10.0);
        let touching = Aabb::anchored(Position::new(10.0, 0.0), 10.0);
        let overlapping = Aabb::anchored(Position::new(9.5, 9.5), 10.0);
        let apart = Aabb::anchored(Position::new(30.0, 30.0), 10.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&overlapping));
        assert!(overlapping.overlaps(&a));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn test_centered_box() {
        let b = Aabb::centered(Position::new(100.0, 50.0), 32.0);
        assert_eq!(b.min_x, 84.0);
        assert_eq!(b.max_y, 66.0);
    }

    #[test]
    fn test_consumption_is_idempotent() {
        let config = AppConfig::default();
        let mut agent = lifecycle::create_agent(0, &config);
        agent.hunger = 40;
        let food = [FoodItem::new(0, 495.0, 495.0), FoodItem::new(1, 900.0, 900.0)];

        let first = collision_system(&mut agent, &food, &config.collision);
        assert_eq!(first, vec![FoodId(0)]);
        assert_eq!(agent.hunger, 0);

        agent.hunger = 3;
        let second = collision_system(&mut agent, &food, &config.collision);
        assert!(second.is_empty());
        assert_eq!(agent.hunger, 3);
        assert_eq!(agent.consumed_food.len(), 1);
    }

    #[test]
    fn test_consumption_is_per_agent() {
        let config = AppConfig::default();
        let mut a = lifecycle::create_agent(0, &config);
        let mut b = lifecycle::create_agent(1, &config);
        let food = [FoodItem::new(0, 500.0, 500.0)];
        assert_eq!(collision_system(&mut a, &food, &config.collision).len(), 1);
        assert_eq!(collision_system(&mut b, &food, &config.collision).len(), 1);
    }

    #[test]
    fn test_multiple_items_in_one_tick() {
        let config = AppConfig::default();
        let mut agent = lifecycle::create_agent(0, &config);
        let food = [
            FoodItem::new(0, 490.0, 490.0),
            FoodItem::new(1, 505.0, 505.0),
            FoodItem::new(2, 520.0, 500.0),
        ];
        let eaten = collision_system(&mut agent, &food, &config.collision);
        assert_eq!(eaten, vec![FoodId(0), FoodId(1)]);
    }
}
