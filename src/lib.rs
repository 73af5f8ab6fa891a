//! `hyperpack`: a point-generation construction heuristic, a 2-opt
//! hill-climbing local search over item orders, and a hyper-heuristic over
//! potential-point strategies for 2D rectangle bin/strip packing.
//!
//! Input validation, figure rendering, and CLI ergonomics are thin wrappers
//! around this core and are not implemented here.

pub mod algorithms;
pub mod construct;
pub mod dispatch;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod hyper;
pub mod model;
pub mod points;
pub mod preprocess;
pub mod search;
pub mod settings;
pub mod solver;
pub mod strip;

pub use error::{PackError, Result};
pub use model::{Container, ContainerId, ContainerSet, Item, ItemId, Placement, Solution};
pub use points::{PointClass, Strategy};
pub use settings::Settings;
pub use solver::Solver;
