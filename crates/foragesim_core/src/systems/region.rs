//! 3x3 exploration grid and wall distance.

use foragesim_data::{Agent, Position, Region};

/// Partition of the world into nine cells of integer size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionGrid {
    pub width: u32,
    pub height: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl RegionGrid {
    pub const CELLS_PER_AXIS: u32 = 3;

    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cell_width: (width / Self::CELLS_PER_AXIS).max(1),
            cell_height: (height / Self::CELLS_PER_AXIS).max(1),
        }
    }

    /// Region containing `pos`, or [`Region::OffMap`] outside `[0, width] x [0, height]`.
    ///
    /// The remainder strip left by the integer cell size belongs to the last
    /// row/column.
    #[must_use]
    pub fn region_of(&self, pos: Position) -> Region {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        if !(0.0..=w).contains(&pos.x) || !(0.0..=h).contains(&pos.y) {
            return Region::OffMap;
        }
        let last = Self::CELLS_PER_AXIS - 1;
        let col = ((pos.x / f64::from(self.cell_width)).floor() as u32).min(last);
        let row = ((pos.y / f64::from(self.cell_height)).floor() as u32).min(last);
        Region::Cell((row * Self::CELLS_PER_AXIS + col) as u8)
    }

    /// Smallest distance to any edge. Negative once the position is off the map.
    #[must_use]
    pub fn nearest_wall_distance(&self, pos: Position) -> f64 {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        pos.x.min(w - pos.x).min(pos.y).min(h - pos.y)
    }
}

/// Updates the agent's current region, wall distance and visit history.
pub fn region_system(agent: &mut Agent, grid: &RegionGrid) {
    locate(agent, grid);
    agent.visited_regions.insert(agent.current_region);
}

/// Updates current region and wall distance without recording a visit.
pub fn locate(agent: &mut Agent, grid: &RegionGrid) {
    agent.current_region = grid.region_of(agent.position);
    agent.nearest_wall_distance = grid.nearest_wall_distance(agent.position);
}
