// The point-generation construction heuristic. The outer "which item
// next" loop is driven by algorithms::greedy::solve via a trivial
// InOrderStrategy; the inner "which point, which orientation" loop is a
// private method on ConstructState rather than a second SelectionStrategy,
// since it needs simultaneous mutable access to both the grid and the pool.

use std::collections::VecDeque;

use crate::algorithms::traits::{GreedyState, SelectionStrategy};
use crate::geometry::Grid;
use crate::model::{Container, Item, ItemId, Placement};
use crate::points::{spawn_points, PointsPool, Strategy};

use std::collections::HashMap;

struct ConstructState<'s> {
    container_w: u32,
    container_l: u32,
    grid: Grid,
    pool: PointsPool,
    strategy: &'s Strategy,
    rotation: bool,
    remaining: VecDeque<Item>,
    placed: HashMap<ItemId, Placement>,
    placed_list: Vec<Placement>,
    not_placed: Vec<Item>,
}

impl<'s> ConstructState<'s> {
    fn new(container: &Container, items: &[Item], strategy: &'s Strategy, rotation: bool) -> Self {
        let mut pool = PointsPool::new();
        pool.seed();
        Self {
            container_w: container.w,
            container_l: container.l,
            grid: Grid::new(container.w, container.l),
            pool,
            strategy,
            rotation,
            remaining: items.iter().cloned().collect(),
            placed: HashMap::new(),
            placed_list: Vec::new(),
            not_placed: Vec::new(),
        }
    }

    // Pops candidate points from the pool, trying the item's given
    // orientation and (if enabled) its rotated orientation, until one
    // fits or the pool empties.
    fn try_place(&mut self, item: &Item) -> Option<Placement> {
        loop {
            let (_class, x, y) = self.pool.pop_next(self.strategy)?;

            let (w, l) = item.dims(false);
            if self.grid.free_rect(x, y, w, l) {
                return Some(Placement::new(x, y, w, l));
            }

            if self.rotation && item.w != item.l {
                let (rw, rl) = item.dims(true);
                if self.grid.free_rect(x, y, rw, rl) {
                    return Some(Placement::new(x, y, rw, rl));
                }
            }
            // Rejected: discard this point and loop for the next one.
        }
    }

    fn utilization(&self) -> f64 {
        let container_area = self.container_w as u64 * self.container_l as u64;
        if container_area == 0 {
            return 0.0;
        }
        let used: u64 = self.placed_list.iter().map(|p| p.area()).sum();
        used as f64 / container_area as f64
    }
}

impl<'s> GreedyState for ConstructState<'s> {
    type Item = Item;

    fn is_finished(&self) -> bool {
        self.remaining.is_empty()
    }

    fn apply(&mut self, item: Item) {
        if let Some(pos) = self.remaining.iter().position(|r| r.id == item.id) {
            self.remaining.remove(pos);
        }

        match self.try_place(&item) {
            Some(placement) => {
                self.grid.mark(placement.x, placement.y, placement.w, placement.l);
                self.placed.insert(item.id.clone(), placement);
                self.placed_list.push(placement);

                for (class, x, y) in
                    spawn_points(placement, &self.placed_list, self.container_w, self.container_l)
                {
                    self.pool.push(class, x, y);
                }
            }
            None => self.not_placed.push(item),
        }
    }
}

// Selects the next item in the caller-given order; the constructor does
// not reorder items itself, ordering is the local search's job.
struct InOrderStrategy;

impl<'s> SelectionStrategy<ConstructState<'s>> for InOrderStrategy {
    fn next_candidate(&mut self, problem: &ConstructState<'s>) -> Option<Item> {
        problem.remaining.front().cloned()
    }
}

// Output of `construct`: placements made into this container, the items
// left over (in their original relative order), and the container's
// resulting utilization.
pub struct ConstructOutput {
    pub placements: HashMap<ItemId, Placement>,
    pub not_placed: Vec<Item>,
    pub utilization: f64,
}

// Runs the construction heuristic for a single container. Deterministic:
// for fixed (container, items, strategy, rotation) this is a pure function
// of its inputs, since the pool's pop order and the spawn rule are
// themselves deterministic.
pub fn construct(container: &Container, items: &[Item], strategy: &Strategy, rotation: bool) -> ConstructOutput {
    let mut state = ConstructState::new(container, items, strategy, rotation);
    let mut selection = InOrderStrategy;
    crate::algorithms::greedy::solve(&mut state, &mut selection);

    ConstructOutput {
        utilization: state.utilization(),
        placements: state.placed,
        not_placed: state.not_placed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, w: u32, l: u32) -> Item {
        Item::new(id, w, l)
    }

    #[test]
    fn exact_fill_four_unit_squares() {
        let container = Container::new("c", 4, 4);
        let items = vec![item("a", 2, 2), item("b", 2, 2), item("c", 2, 2), item("d", 2, 2)];
        let strategy = Strategy::default_order();
        let out = construct(&container, &items, &strategy, true);
        assert_eq!(out.placements.len(), 4);
        assert!(out.not_placed.is_empty());
        assert!((out.utilization - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rotation_required_to_fit() {
        let container = Container::new("c", 1, 5);
        let items = vec![item("a", 5, 1)];
        let strategy = Strategy::default_order();

        let out = construct(&container, &items, &strategy, true);
        assert_eq!(out.placements.len(), 1);
        let p = out.placements.get("a").unwrap();
        assert_eq!(p.as_tuple(), (0, 0, 1, 5));

        let out_no_rot = construct(&container, &items, &strategy, false);
        assert!(out_no_rot.placements.is_empty());
        assert_eq!(out_no_rot.not_placed.len(), 1);
    }

    #[test]
    fn unplaceable_residue_leaves_item_unplaced() {
        let container = Container::new("c", 3, 3);
        let items = vec![item("a", 3, 3), item("b", 1, 1)];
        let strategy = Strategy::default_order();
        let out = construct(&container, &items, &strategy, true);
        assert_eq!(out.placements.len(), 1);
        assert!(out.placements.contains_key("a"));
        assert_eq!(out.not_placed.len(), 1);
        assert_eq!(out.not_placed[0].id, "b");
        assert!((out.utilization - 1.0).abs() < 1e-9);
    }

    #[test]
    fn determinism_same_inputs_same_output() {
        let container = Container::new("c", 10, 10);
        let items = vec![item("a", 3, 4), item("b", 5, 2), item("c", 4, 4)];
        let strategy = Strategy::default_order();

        let out1 = construct(&container, &items, &strategy, true);
        let out2 = construct(&container, &items, &strategy, true);

        assert_eq!(out1.placements.len(), out2.placements.len());
        for (id, p1) in &out1.placements {
            let p2 = out2.placements.get(id).unwrap();
            assert_eq!(p1.as_tuple(), p2.as_tuple());
        }
        assert_eq!(
            out1.not_placed.iter().map(|i| i.id.clone()).collect::<Vec<_>>(),
            out2.not_placed.iter().map(|i| i.id.clone()).collect::<Vec<_>>()
        );
    }
}
