use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::observer::SolverObserver;
use crate::algorithm::relax::{initialize_single_source, relax};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{try_filled, IndexedMinHeap};
use crate::graph::Graph;
use crate::{Error, Result};

const NAME: &str = "Dijkstra";

/// Classic Dijkstra's algorithm over an indexed min-heap with decrease-key
///
/// Requires non-negative edge weights. By default the graph is scanned first
/// and a negative weight is rejected with [`Error::NegativeWeight`]; with
/// validation disabled the distances for such graphs are unspecified.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    validate_weights: bool,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            validate_weights: true,
        }
    }

    /// Enable or disable the negative weight check before each run
    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
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
        graph.check_vertex(source)?;

        if self.validate_weights {
            if let Some((from, to, weight)) = graph.edges().find(|(_, _, w)| *w < W::zero()) {
                return Err(Error::NegativeWeight {
                    from,
                    to,
                    weight: weight.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        let n = graph.vertex_count();
        observer.run_started(NAME, Some(source));

        let mut state = initialize_single_source(n, source)?;
        let mut queue = IndexedMinHeap::new(n)?;
        let mut settled = try_filled(n, false)?;
        queue.decrease_key(source, W::zero());

        // Main Dijkstra loop
        while let Some((u, dist_u)) = queue.extract_min() {
            settled[u] = true;
            observer.vertex_settled(u, dist_u);

            for (v, weight) in graph.outgoing_edges(u) {
                if settled[v] {
                    continue;
                }
                if relax(&mut state, u, v, weight, observer) {
                    queue.decrease_key(v, state.distances[v]);
                }
            }
        }

        log::debug!(
            "Dijkstra: {} of {} vertices reachable from {}",
            state.distances.iter().filter(|d| d.is_finite()).count(),
            n,
            source
        );

        Ok(state)
    }
}
