//! The relaxation primitive shared by the single-source solvers.

use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::observer::SolverObserver;
use crate::algorithm::{RunStatus, ShortestPathResult};
use crate::data_structures::try_filled;
use crate::Result;

/// Fresh per-run state: `d = infinity` and no predecessor everywhere, except
/// `d(source) = 0`.
///
/// The caller has already checked that `source < n`.
pub fn initialize_single_source<W>(n: usize, source: usize) -> Result<ShortestPathResult<W>>
where
    W: Float + Debug + Copy,
{
    let mut distances = try_filled(n, W::infinity())?;
    let predecessors = try_filled(n, None)?;
    distances[source] = W::zero();

    Ok(ShortestPathResult {
        distances,
        predecessors,
        source,
        status: RunStatus::Converged,
    })
}

/// Returns true if `d(v) > d(u) + weight`
#[inline]
pub fn can_relax<W>(state: &ShortestPathResult<W>, u: usize, v: usize, weight: W) -> bool
where
    W: Float + Debug + Copy,
{
    state.distances[v] > state.distances[u] + weight
}

/// Relaxes edge `(u, v)`: if `d(v) > d(u) + weight`, sets `d(v) = d(u) + weight`
/// and `pi(v) = u`. Returns whether `d(v)` changed.
///
/// Never touches any queue; a solver that keeps one updates it itself.
pub fn relax<W>(
    state: &mut ShortestPathResult<W>,
    u: usize,
    v: usize,
    weight: W,
    observer: &mut dyn SolverObserver<W>,
) -> bool
where
    W: Float + Debug + Copy,
{
    if !can_relax(state, u, v, weight) {
        return false;
    }

    let old = state.distances[v];
    let new = state.distances[u] + weight;
    state.distances[v] = new;
    state.predecessors[v] = Some(u);
    observer.edge_relaxed(u, v, old, new);
    true
}
