use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::observer::{LogObserver, SolverObserver};
use crate::graph::Graph;
use crate::Result;

/// Terminal state of a single-source run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// All distance estimates are final
    Converged,
    /// A negative cycle is reachable from the source; the edge `(from, to)`
    /// could still be relaxed after the last pass
    NegativeCycle { from: usize, to: usize },
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Distance estimate `d` for each vertex, infinity if unreachable
    pub distances: Vec<W>,

    /// Predecessor `pi` of each vertex in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,

    /// How the run ended
    pub status: RunStatus,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Returns true unless the run detected a negative cycle
    pub fn converged(&self) -> bool {
        self.status == RunStatus::Converged
    }

    /// Finite distance to `vertex`, `None` if it is unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|d| !(d.is_infinite() && *d > W::zero()))
    }

    /// Returns true if `vertex` was reached from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Vertices from `vertex` back along predecessor links, `vertex` first.
    ///
    /// The walk stops at a vertex without predecessor, or after visiting every
    /// vertex once when the links form a cycle.
    pub fn predecessor_chain(&self, vertex: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut current = Some(vertex);
        while let Some(v) = current {
            if v >= self.predecessors.len() || chain.len() > self.predecessors.len() {
                break;
            }
            chain.push(v);
            current = self.predecessors[v];
        }
        chain
    }

    /// Get the shortest path from source to target as a sequence of vertices
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = self.predecessor_chain(target);
        if path.last() != Some(&self.source) || path.len() > self.predecessors.len() {
            // Broken or cyclic predecessor links, only possible after a negative cycle
            return None;
        }
        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source vertex, reporting progress to `observer`
    fn compute_with_observer(
        &self,
        graph: &G,
        source: usize,
        observer: &mut dyn SolverObserver<W>,
    ) -> Result<ShortestPathResult<W>>;

    /// Compute shortest paths from a source vertex to all other vertices,
    /// tracing progress through the `log` facade
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.compute_with_observer(graph, source, &mut LogObserver)
    }

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}
