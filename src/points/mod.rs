pub mod class;
pub mod pool;
pub mod spawn;

pub use class::{PointClass, Strategy, ALL_CLASSES};
pub use pool::PointsPool;
pub use spawn::spawn_points;
