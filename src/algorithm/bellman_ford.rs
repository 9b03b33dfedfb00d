use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::observer::SolverObserver;
use crate::algorithm::relax::{can_relax, initialize_single_source, relax};
use crate::algorithm::{RunStatus, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::Result;

const NAME: &str = "Bellman-Ford";

/// Bellman-Ford: `|V| - 1` passes relaxing every edge, then one verification pass.
///
/// Handles negative weights. A negative cycle reachable from the source is not
/// an error: the run returns normally with
/// [`RunStatus::NegativeCycle`](crate::algorithm::RunStatus::NegativeCycle).
#[derive(Debug, Default, Clone)]
pub struct BellmanFord {
    /// Stop the relaxation passes after one that changed nothing
    early_exit: bool,
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance running all `|V| - 1` passes
    pub fn new() -> Self {
        BellmanFord { early_exit: false }
    }

    /// Stop relaxing once a whole pass makes no update. The verification pass
    /// still runs.
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
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
        let n = graph.vertex_count();
        observer.run_started(NAME, Some(source));

        let mut state = initialize_single_source(n, source)?;

        for pass in 1..n {
            let mut updated = false;
            for (u, v, weight) in graph.edges() {
                updated |= relax(&mut state, u, v, weight, observer);
            }
            if self.early_exit && !updated {
                log::debug!("Bellman-Ford: pass {} made no update, stopping early", pass);
                break;
            }
        }

        if let Some((u, v, weight)) = graph.edges().find(|&(u, v, w)| can_relax(&state, u, v, w)) {
            observer.negative_cycle_detected(u, v, weight);
            state.status = RunStatus::NegativeCycle { from: u, to: v };
        } else {
            log::debug!("Bellman-Ford: no negative cycle reachable from {}", source);
        }

        Ok(state)
    }
}
