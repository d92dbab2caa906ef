use serde::{Deserialize, Serialize};

/// Number of values handed to a decision function each tick.
pub const SENSOR_COUNT: usize = 6;
/// Number of values a decision function must return.
pub const ACTION_COUNT: usize = 4;

/// Inputs handed to a decision function, in this order:
/// `[num_food_seen, hunger, nearest_food_distance,
///   nearest_food_relative_angle, nearest_wall_distance, current_region]`.
pub type SensorVector = [f64; SENSOR_COUNT];

pub mod sensor_index {
    pub const NUM_FOOD_SEEN: usize = 0;
    pub const HUNGER: usize = 1;
    pub const NEAREST_FOOD_DISTANCE: usize = 2;
    pub const NEAREST_FOOD_ANGLE: usize = 3;
    pub const NEAREST_WALL_DISTANCE: usize = 4;
    pub const CURRENT_REGION: usize = 5;
}

/// Raw movement intent, interpreted positionally.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    pub forward: f64,
    pub backward: f64,
    pub turn_left: f64,
    pub turn_right: f64,
}

impl Action {
    pub const FORWARD: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const IDLE: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(forward: f64, backward: f64, turn_left: f64, turn_right: f64) -> Self {
        Self {
            forward,
            backward,
            turn_left,
            turn_right,
        }
    }

    /// Reads an action from decision-function output. `None` unless the
    /// slice has exactly [`ACTION_COUNT`] values.
    #[must_use]
    pub fn from_outputs(outputs: &[f64]) -> Option<Self> {
        match *outputs {
            [forward, backward, turn_left, turn_right] => {
                Some(Self::new(forward, backward, turn_left, turn_right))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn to_outputs(self) -> Vec<f64> {
        vec![self.forward, self.backward, self.turn_left, self.turn_right]
    }
}

/// One of the nine cells of the 3x3 exploration grid, or off the map.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Region {
    #[default]
    OffMap,
    Cell(u8),
}

impl Region {
    pub const OFF_MAP_INDEX: i32 = -1;

    /// Integer form used in sensor vectors and reports: `0..=8`, or `-1`.
    #[must_use]
    pub fn index(self) -> i32 {
        match self {
            Region::OffMap => Self::OFF_MAP_INDEX,
            Region::Cell(c) => i32::from(c),
        }
    }

    #[must_use]
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            Self::OFF_MAP_INDEX => Some(Region::OffMap),
            0..=8 => Some(Region::Cell(index as u8)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_off_map(self) -> bool {
        matches!(self, Region::OffMap)
    }
}
