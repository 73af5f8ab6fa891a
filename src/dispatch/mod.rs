// Multi-container dispatcher: runs the constructor across the container
// sequence, narrowing the remaining-items list after each container.

use crate::construct::construct;
use crate::model::{Container, Item, Solution};
use crate::points::Strategy;

// Objective exponent k: the dispatcher's objective sums util_c^k across
// containers. Fixed at 2; squaring biases the search toward concentrating
// fill in fewer, fuller containers rather than spreading utilization
// thinly across many.
pub const OBJECTIVE_EXPONENT: i32 = 2;

// Fixed-point scale used to turn the `f64` objective into an `i64` so it
// composes with `Ord`-based cost comparisons without an ordered-float
// dependency.
pub const OBJECTIVE_SCALE: f64 = 1_000_000_000.0;

#[derive(Clone, Debug)]
pub struct DispatchOutput {
    pub solution: Solution,
    // Items from the input that no container could place.
    pub unplaced: Vec<Item>,
}

// Runs the constructor over `containers` in order, feeding each the items
// the previous containers left unplaced. An empty item list short-circuits
// to an empty solution.
pub fn dispatch(containers: &[Container], items: &[Item], strategy: &Strategy, rotation: bool) -> DispatchOutput {
    let mut solution = Solution::empty();

    if items.is_empty() {
        for c in containers {
            solution.utilization.insert(c.id.clone(), 0.0);
            solution.placements.insert(c.id.clone(), Default::default());
        }
        return DispatchOutput { solution, unplaced: Vec::new() };
    }

    let mut remaining = items.to_vec();

    for container in containers {
        let out = construct(container, &remaining, strategy, rotation);
        solution.utilization.insert(container.id.clone(), out.utilization);
        solution.placements.insert(container.id.clone(), out.placements);
        remaining = out.not_placed;
        if remaining.is_empty() {
            break;
        }
    }

    // Containers not reached at all (remaining emptied early) still report
    // a defined utilization of 0 rather than being absent from the map.
    for container in containers {
        solution.utilization.entry(container.id.clone()).or_insert(0.0);
        solution.placements.entry(container.id.clone()).or_default();
    }

    DispatchOutput { solution, unplaced: remaining }
}

// Sum of util_c^k across containers, scaled to a deterministic fixed-point i64.
pub fn objective(solution: &Solution) -> i64 {
    let total: f64 = solution
        .utilization
        .values()
        .map(|u| u.powi(OBJECTIVE_EXPONENT))
        .sum();
    (total * OBJECTIVE_SCALE).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    #[test]
    fn empty_items_short_circuit() {
        let containers = vec![Container::new("c", 4, 4)];
        let strategy = Strategy::default_order();
        let out = dispatch(&containers, &[], &strategy, true);
        assert!(out.solution.is_empty());
        assert!(out.unplaced.is_empty());
        assert_eq!(*out.solution.utilization.get("c").unwrap(), 0.0);
    }

    #[test]
    fn cascades_across_containers() {
        let containers = vec![Container::new("c1", 2, 2), Container::new("c2", 2, 2)];
        let items = vec![Item::new("a", 2, 2), Item::new("b", 2, 2)];
        let strategy = Strategy::default_order();
        let out = dispatch(&containers, &items, &strategy, true);
        assert!(out.unplaced.is_empty());
        assert_eq!(*out.solution.utilization.get("c1").unwrap(), 1.0);
        assert_eq!(*out.solution.utilization.get("c2").unwrap(), 1.0);
    }

    #[test]
    fn objective_grows_with_concentrated_fill() {
        let mut spread = Solution::empty();
        spread.utilization.insert("a".into(), 0.5);
        spread.utilization.insert("b".into(), 0.5);

        let mut concentrated = Solution::empty();
        concentrated.utilization.insert("a".into(), 1.0);
        concentrated.utilization.insert("b".into(), 0.0);

        assert!(objective(&concentrated) > objective(&spread));
    }
}
