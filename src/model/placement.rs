use std::collections::HashMap;

use super::container::ContainerId;
use super::item::ItemId;

// A single item's position and actual (post-rotation) dimensions inside a
// container. Origin `(x, y)` is the bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub l: u32,
}

impl Placement {
    pub fn new(x: u32, y: u32, w: u32, l: u32) -> Self {
        Self { x, y, w, l }
    }

    pub fn area(&self) -> u64 {
        self.w as u64 * self.l as u64
    }

    // The `(Xo, Yo, w, l)` tuple shape used at the external boundary.
    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.w, self.l)
    }

    pub fn intersects(&self, other: &Placement) -> bool {
        let r1_x2 = self.x + self.w;
        let r1_y2 = self.y + self.l;
        let r2_x2 = other.x + other.w;
        let r2_y2 = other.y + other.l;
        !(r1_x2 <= other.x || r2_x2 <= self.x || r1_y2 <= other.y || r2_y2 <= self.y)
    }
}

// `container_id -> { item_id -> Placement }`, plus per-container utilization.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    pub placements: HashMap<ContainerId, HashMap<ItemId, Placement>>,
    pub utilization: HashMap<ContainerId, f64>,
}

impl Solution {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.values().all(|m| m.is_empty())
    }

    pub fn placed_item_count(&self) -> usize {
        self.placements.values().map(|m| m.len()).sum()
    }

    // Sum of placed item areas divided by total item area.
    pub fn overall_fill_ratio(&self, all_items_area: u64) -> f64 {
        if all_items_area == 0 {
            return 0.0;
        }
        let placed_area: u64 = self
            .placements
            .values()
            .flat_map(|m| m.values())
            .map(|p| p.area())
            .sum();
        placed_area as f64 / all_items_area as f64
    }

    // Highest per-container utilization in this solution, 0.0 if there are
    // no containers. This is the quantity the hyper-search shares across
    // workers, since "100%" in the stop condition means a container is
    // fully packed, not that every item got placed somewhere.
    pub fn best_container_utilization(&self) -> f64 {
        self.utilization.values().cloned().fold(0.0, f64::max)
    }
}
