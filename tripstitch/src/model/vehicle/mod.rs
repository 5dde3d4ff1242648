mod path_index;
mod path_traversal;
pub mod vehicle_ops;

pub use path_index::{PathMatch, VehiclePathIndex};
pub use path_traversal::PathTraversal;
