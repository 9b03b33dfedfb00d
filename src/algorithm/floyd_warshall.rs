use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::observer::{LogObserver, SolverObserver};
use crate::graph::{Graph, MatrixGraph};
use crate::{Error, Result};

const NAME: &str = "Floyd-Warshall";

/// Floyd-Warshall all-pairs shortest paths over the matrices of a [`MatrixGraph`].
///
/// The dynamic program runs in place: for each intermediate vertex `k` and each
/// pair `(i, j)`, if `W[i][k] + W[k][j] < W[i][j]` then
/// `Pi[i][j] = Pi[k][j]` and `W[i][j] = W[i][k] + W[k][j]`.
///
/// Negative cycles are not detected while the DP runs. Once it finishes, a
/// negative diagonal entry is reported as [`Error::NegativeCycle`]; the
/// matrices are left as computed.
#[derive(Debug, Default, Clone)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new Floyd-Warshall instance
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        NAME
    }

    /// Runs the DP on `graph`, tracing through the `log` facade
    pub fn run<W>(&self, graph: &mut MatrixGraph<W>) -> Result<()>
    where
        W: Float + Debug + Copy,
    {
        self.run_with_observer(graph, &mut LogObserver)
    }

    /// Runs the DP on `graph`, reporting every improved pair to `observer`
    pub fn run_with_observer<W>(
        &self,
        graph: &mut MatrixGraph<W>,
        observer: &mut dyn SolverObserver<W>,
    ) -> Result<()>
    where
        W: Float + Debug + Copy,
    {
        let n = graph.vertex_count();
        observer.run_started(NAME, None);

        for k in 0..n {
            for i in 0..n {
                let w_ik = graph.weight(i, k);
                if w_ik.is_infinite() && w_ik > W::zero() {
                    continue;
                }
                for j in 0..n {
                    let through_k = w_ik + graph.weight(k, j);
                    if through_k < graph.weight(i, j) {
                        let pred = graph.predecessor(k, j);
                        graph.set(i, j, through_k, pred);
                        observer.pair_improved(i, j, k, through_k);
                    }
                }
            }
            log::trace!("Floyd-Warshall: intermediate vertex {} done", k);
        }

        match graph.negative_cycle_vertex() {
            Some(vertex) => {
                log::warn!("Floyd-Warshall: negative cycle through vertex {}", vertex);
                Err(Error::NegativeCycle { vertex })
            }
            None => Ok(()),
        }
    }
}
