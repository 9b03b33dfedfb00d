pub mod traits;
pub mod adjacency;
pub mod matrix;
pub mod topological;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use adjacency::AdjacencyGraph;
pub use matrix::MatrixGraph;
pub use topological::{topological_order, validate_topological_order};
