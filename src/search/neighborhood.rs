use crate::algorithms::traits::Neighborhood;
use crate::model::Container;
use crate::points::Strategy;

use super::permutation::PermutationState;

// Item-count threshold above which `local::run` throttles to a
// first-improvement scan instead of evaluating the full neighborhood.
pub const THROTTLE_ITEM_THRESHOLD: usize = 71;

// All orders obtained from the current item order by swapping exactly two
// positions `i < j`, enumerated in ascending `(i, j)` order so that
// best-improvement search is deterministic given a fixed item order.
pub struct TwoOptNeighborhood {
    pub containers: Vec<Container>,
    pub strategy: Strategy,
    pub rotation: bool,
}

impl Neighborhood<PermutationState> for TwoOptNeighborhood {
    fn neighbors<'a>(&'a self, solution: &'a PermutationState) -> Box<dyn Iterator<Item = PermutationState> + 'a> {
        let n = solution.items.len();
        let iter = (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j))).map(move |(i, j)| {
            let mut items = solution.items.clone();
            items.swap(i, j);
            PermutationState::evaluate(items, &self.containers, &self.strategy, self.rotation)
        });
        Box::new(iter)
    }
}
