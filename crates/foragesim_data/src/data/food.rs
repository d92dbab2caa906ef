use serde::{Deserialize, Serialize};

/// Stable identifier of a food item, equal to its creation index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct FoodId(pub usize);

/// A food pellet. Its position is the top-left corner of its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub x: f64,
    pub y: f64,
}

impl FoodItem {
    #[must_use]
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self {
            id: FoodId(id),
            x,
            y,
        }
    }
}
