use crate::algorithms::traits::Solution as CostedSolution;
use crate::dispatch::{dispatch, objective};
use crate::model::{Container, Item, Solution};
use crate::points::Strategy;

// The local search's notion of "a candidate solution": an item order, the
// dispatcher's resulting packing, and the cached objective value. Cost is
// the negated scaled objective, since the generic search primitives in
// `algorithms` minimize cost.
#[derive(Clone, Debug)]
pub struct PermutationState {
    pub items: Vec<Item>,
    pub containers: Vec<Container>,
    pub strategy: Strategy,
    pub rotation: bool,
    pub solution: Solution,
    pub unplaced: Vec<Item>,
    pub objective: i64,
}

impl PermutationState {
    pub fn evaluate(items: Vec<Item>, containers: &[Container], strategy: &Strategy, rotation: bool) -> Self {
        let out = dispatch(containers, &items, strategy, rotation);
        let obj = objective(&out.solution);
        Self {
            items,
            containers: containers.to_vec(),
            strategy: strategy.clone(),
            rotation,
            solution: out.solution,
            unplaced: out.unplaced,
            objective: obj,
        }
    }

    // Every item placed, and every container at 100% utilization: the
    // short-circuit condition for the local search.
    pub fn is_perfect(&self) -> bool {
        self.unplaced.is_empty() && self.solution.utilization.values().all(|u| (*u - 1.0).abs() < 1e-9)
    }
}

impl CostedSolution for PermutationState {
    type Cost = i64;

    fn cost(&self) -> i64 {
        -self.objective
    }
}
