//! Strip-pack adapter: a single imaginary container whose length shrinks
//! as better all-items-included solutions are found.

use crate::model::{Container, Item, Solution};
use crate::points::Strategy;
use crate::search::control::SearchControl;
use crate::search::local::{best_improving_neighbor, first_improving_neighbor};
use crate::search::neighborhood::{TwoOptNeighborhood, THROTTLE_ITEM_THRESHOLD};
use crate::search::permutation::PermutationState;

const STRIP_CONTAINER_ID: &str = "strip";

// Sum of each item's longest side: a safe upper bound on the strip height
// regardless of which way an item ends up rotated.
pub fn seed_height(items: &[Item]) -> u32 {
    items.iter().map(|i| i.w.max(i.l) as u64).sum::<u64>().min(u32::MAX as u64) as u32
}

fn tallest_placement_edge(solution: &Solution) -> u32 {
    solution
        .placements
        .values()
        .flat_map(|m| m.values())
        .map(|p| p.y + p.l)
        .max()
        .unwrap_or(0)
}

// Computes the next `H_current` given the latest node's solution. While
// `container_min_height` is unset, only a solution containing all items may
// shrink the height; once a floor is set, any solution may shrink height
// down to (but not below) that floor.
fn tighten(h_current: u32, container_min_height: Option<u32>, solution: &Solution, all_placed: bool) -> u32 {
    match container_min_height {
        None => {
            if !all_placed {
                return h_current;
            }
            let candidate = tallest_placement_edge(solution);
            if candidate > 0 && candidate < h_current {
                candidate
            } else {
                h_current
            }
        }
        Some(floor) => {
            let candidate = tallest_placement_edge(solution).max(floor);
            if candidate < h_current {
                candidate
            } else {
                h_current
            }
        }
    }
}

// Outcome of a strip-pack local-search run: the best permutation state
// found, and the final (possibly shrunk) strip height.
pub struct StripOutcome {
    pub state: PermutationState,
    pub h_current: u32,
}

// Runs the 2-opt hill climb against a single strip container whose height
// shrinks after every accepted node that places every item (or, once
// `container_min_height` is set, after every accepted node at all).
// `initial_h_current` lets a caller resume shrinking from a previously
// retained height instead of reseeding from scratch.
pub fn run(
    items: Vec<Item>,
    width: u32,
    strategy: &Strategy,
    rotation: bool,
    container_min_height: Option<u32>,
    initial_h_current: Option<u32>,
    control: &SearchControl,
) -> StripOutcome {
    let throttle = items.len() > THROTTLE_ITEM_THRESHOLD;
    let mut h_current = initial_h_current.unwrap_or_else(|| seed_height(&items));

    let mut containers = vec![Container::new(STRIP_CONTAINER_ID, width, h_current)];
    let mut current = PermutationState::evaluate(items, &containers, strategy, rotation);
    h_current = tighten(h_current, container_min_height, &current.solution, current.unplaced.is_empty());
    containers[0].l = h_current;

    loop {
        if current.is_perfect() {
            break;
        }
        if control.should_stop() {
            break;
        }

        let neighborhood = TwoOptNeighborhood {
            containers: containers.clone(),
            strategy: strategy.clone(),
            rotation,
        };

        let next = if throttle {
            first_improving_neighbor(&current, &neighborhood)
        } else {
            best_improving_neighbor(&current, &neighborhood)
        };

        match next {
            Some(candidate) => {
                current = candidate;
                h_current = tighten(h_current, container_min_height, &current.solution, current.unplaced.is_empty());
                containers[0].l = h_current;
            }
            None => break,
        }
    }

    StripOutcome { state: current, h_current }
}
