pub mod control;
pub mod local;
pub mod neighborhood;
pub mod permutation;

pub use control::{SearchControl, SharedBest};
pub use local::run as local_search;
pub use neighborhood::{TwoOptNeighborhood, THROTTLE_ITEM_THRESHOLD};
pub use permutation::PermutationState;
