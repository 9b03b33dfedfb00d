pub mod traits;
pub mod observer;
pub mod relax;
pub mod bellman_ford;
pub mod dijkstra;
pub mod dag;
pub mod floyd_warshall;

pub use traits::{RunStatus, ShortestPathAlgorithm, ShortestPathResult};
pub use observer::{LogObserver, NoopObserver, RecordingObserver, SolverEvent, SolverObserver};
