// 2-opt hill-climbing local search over item permutations.

use crate::algorithms::traits::Neighborhood;
use crate::model::{Container, Item};
use crate::points::Strategy;

use super::control::SearchControl;
use super::neighborhood::{TwoOptNeighborhood, THROTTLE_ITEM_THRESHOLD};
use super::permutation::PermutationState;

// Scans the full neighborhood and returns the strictly-best improving
// neighbor, or `None` if no neighbor improves on `current`. Ties are broken
// by canonical `(i, j)` order: the first one encountered with the maximal
// objective.
pub(crate) fn best_improving_neighbor(current: &PermutationState, neighborhood: &TwoOptNeighborhood) -> Option<PermutationState> {
    let current_obj = current.objective;
    neighborhood
        .neighbors(current)
        .filter(|n| n.objective > current_obj)
        .fold(None::<PermutationState>, |best, candidate| match best {
            Some(b) if b.objective >= candidate.objective => Some(b),
            _ => Some(candidate),
        })
}

// Scans the neighborhood in canonical order and returns the first improving
// neighbor found: the throttled variant's first-improvement rule, exposed
// as a single step so the outer loop in `run` can poll the deadline and
// shared-best cell between steps.
pub(crate) fn first_improving_neighbor(current: &PermutationState, neighborhood: &TwoOptNeighborhood) -> Option<PermutationState> {
    let current_obj = current.objective;
    neighborhood.neighbors(current).find(|n| n.objective > current_obj)
}

// Runs the hill climb to a local optimum, or until short-circuited by a
// perfect solution or the control's stop condition.
pub fn run(
    items: Vec<Item>,
    containers: &[Container],
    strategy: &Strategy,
    rotation: bool,
    control: &SearchControl,
) -> PermutationState {
    let throttle = items.len() > THROTTLE_ITEM_THRESHOLD;
    let mut current = PermutationState::evaluate(items, containers, strategy, rotation);

    loop {
        if current.is_perfect() {
            break;
        }
        if control.should_stop() {
            break;
        }

        let neighborhood = TwoOptNeighborhood {
            containers: containers.to_vec(),
            strategy: strategy.clone(),
            rotation,
        };

        let next = if throttle {
            first_improving_neighbor(&current, &neighborhood)
        } else {
            best_improving_neighbor(&current, &neighborhood)
        };

        match next {
            Some(candidate) => current = candidate,
            None => break,
        }
    }

    current
}
