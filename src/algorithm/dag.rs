use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::observer::SolverObserver;
use crate::algorithm::relax::{initialize_single_source, relax};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{topological_order, validate_topological_order, Graph};
use crate::Result;

const NAME: &str = "DAG shortest path";

/// Single-source shortest paths on a DAG: one pass over the vertices in
/// topological order, relaxing each vertex's outgoing edges.
///
/// Negative weights are allowed. The order can be supplied with
/// [`with_order`](Self::with_order); otherwise it is computed with
/// [`topological_order`] at the start of each run.
#[derive(Debug, Clone)]
pub struct DagShortestPath {
    order: Option<Vec<usize>>,
    validate_order: bool,
}

impl Default for DagShortestPath {
    fn default() -> Self {
        Self::new()
    }
}

impl DagShortestPath {
    /// Creates a solver that derives the topological order itself
    pub fn new() -> Self {
        DagShortestPath {
            order: None,
            validate_order: true,
        }
    }

    /// Use `order` as the topological order of every graph this solver runs on
    pub fn with_order(mut self, order: Vec<usize>) -> Self {
        self.order = Some(order);
        self
    }

    /// Enable or disable checking a supplied order against the graph.
    ///
    /// Without the check, an order that is not topological gives unspecified
    /// distances.
    pub fn with_order_validation(mut self, enabled: bool) -> Self {
        self.validate_order = enabled;
        self
    }

    /// Runs from `source`, visiting vertices strictly in `order`
    pub fn run_with_order<W, G>(
        &self,
        graph: &G,
        source: usize,
        order: &[usize],
        observer: &mut dyn SolverObserver<W>,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Float + Debug + Copy,
        G: Graph<W>,
    {
        graph.check_vertex(source)?;
        if self.validate_order {
            validate_topological_order(graph, order)?;
        }

        observer.run_started(NAME, Some(source));
        let mut state = initialize_single_source(graph.vertex_count(), source)?;

        for &u in order {
            graph.check_vertex(u)?;
            observer.vertex_settled(u, state.distances[u]);
            for (v, weight) in graph.outgoing_edges(u) {
                relax(&mut state, u, v, weight, observer);
            }
        }

        Ok(state)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for DagShortestPath
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        NAME
    }

    fn compute_with_observer(
        &self,
        graph: &G,
        source: usize,
        observer: &mut dyn SolverObserver<W>,
    ) -> Result<ShortestPathResult<W>> {
        match &self.order {
            Some(order) => self.run_with_order(graph, source, order, observer),
            None => {
                let order = topological_order(graph)?;
                self.run_with_order(graph, source, &order, observer)
            }
        }
    }
}
