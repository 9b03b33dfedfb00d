//! Hooks through which solvers report their progress.
//!
//! Solvers call a [`SolverObserver`] at fixed points of a run instead of
//! printing. [`LogObserver`] forwards the events to the `log` facade and is what
//! the plain `compute_*` entry points use.

use std::fmt::Debug;

/// Receives solver events. Every method defaults to doing nothing.
pub trait SolverObserver<W: Debug> {
    /// A run of `algorithm` begins; `source` is `None` for all-pairs runs
    fn run_started(&mut self, _algorithm: &'static str, _source: Option<usize>) {}

    /// `vertex` left the queue (Dijkstra) or was reached in topological order
    /// (DAG) with its final distance
    fn vertex_settled(&mut self, _vertex: usize, _distance: W) {}

    /// Relaxing `(from, to)` lowered `d(to)` from `old` to `new`
    fn edge_relaxed(&mut self, _from: usize, _to: usize, _old: W, _new: W) {}

    /// Edge `(from, to)` still relaxes after the last Bellman-Ford pass
    fn negative_cycle_detected(&mut self, _from: usize, _to: usize, _weight: W) {}

    /// Floyd-Warshall improved `W[i][j]` to `weight` by going through `via`
    fn pair_improved(&mut self, _i: usize, _j: usize, _via: usize, _weight: W) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<W: Debug> SolverObserver<W> for NoopObserver {}

/// Observer that writes events as `log` records
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl<W: Debug> SolverObserver<W> for LogObserver {
    fn run_started(&mut self, algorithm: &'static str, source: Option<usize>) {
        match source {
            Some(s) => log::debug!("{} starting from source {}", algorithm, s),
            None => log::debug!("{} starting", algorithm),
        }
    }

    fn vertex_settled(&mut self, vertex: usize, distance: W) {
        log::trace!("vertex {} settled with d = {:?}", vertex, distance);
    }

    fn edge_relaxed(&mut self, from: usize, to: usize, old: W, new: W) {
        log::trace!("edge ({}, {}) relaxed: d({}) {:?} -> {:?}", from, to, to, old, new);
    }

    fn negative_cycle_detected(&mut self, from: usize, to: usize, weight: W) {
        log::warn!(
            "negative cycle: edge ({}, {}) with weight {:?} still relaxes",
            from,
            to,
            weight
        );
    }

    fn pair_improved(&mut self, i: usize, j: usize, via: usize, weight: W) {
        log::trace!("W[{}][{}] = {:?} through {}", i, j, weight, via);
    }
}

/// A recorded solver event
#[derive(Debug, Clone, PartialEq)]
pub enum SolverEvent<W> {
    RunStarted { algorithm: &'static str, source: Option<usize> },
    VertexSettled { vertex: usize, distance: W },
    EdgeRelaxed { from: usize, to: usize, old: W, new: W },
    NegativeCycleDetected { from: usize, to: usize, weight: W },
    PairImproved { i: usize, j: usize, via: usize, weight: W },
}

/// Observer that keeps every event in order
#[derive(Debug, Clone)]
pub struct RecordingObserver<W> {
    pub events: Vec<SolverEvent<W>>,
}

impl<W> RecordingObserver<W> {
    pub fn new() -> Self {
        RecordingObserver { events: Vec::new() }
    }

    /// Vertices in the order they were settled
    pub fn settled_order(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SolverEvent::VertexSettled { vertex, .. } => Some(*vertex),
                _ => None,
            })
            .collect()
    }

    /// Number of successful relaxations
    pub fn relaxations(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SolverEvent::EdgeRelaxed { .. }))
            .count()
    }
}

impl<W> Default for RecordingObserver<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Debug> SolverObserver<W> for RecordingObserver<W> {
    fn run_started(&mut self, algorithm: &'static str, source: Option<usize>) {
        self.events.push(SolverEvent::RunStarted { algorithm, source });
    }

    fn vertex_settled(&mut self, vertex: usize, distance: W) {
        self.events.push(SolverEvent::VertexSettled { vertex, distance });
    }

    fn edge_relaxed(&mut self, from: usize, to: usize, old: W, new: W) {
        self.events.push(SolverEvent::EdgeRelaxed { from, to, old, new });
    }

    fn negative_cycle_detected(&mut self, from: usize, to: usize, weight: W) {
        self.events.push(SolverEvent::NegativeCycleDetected { from, to, weight });
    }

    fn pair_improved(&mut self, i: usize, j: usize, via: usize, weight: W) {
        self.events.push(SolverEvent::PairImproved { i, j, via, weight });
    }
}
