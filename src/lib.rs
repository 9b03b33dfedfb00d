//! Classic SSSP - textbook shortest path algorithms over weighted graphs
//!
//! This library implements the four classical shortest path algorithms:
//! Bellman-Ford, Dijkstra (over an indexed binary min-heap with decrease-key),
//! single-source shortest paths over a topologically ordered DAG, and the
//! Floyd-Warshall all-pairs dynamic program with predecessor-based path
//! reconstruction.
//!
//! The single-source solvers share one relaxation primitive and differ only in
//! the order in which they schedule relaxations.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::{
    bellman_ford::BellmanFord, dag::DagShortestPath, dijkstra::Dijkstra,
    floyd_warshall::FloydWarshall, RunStatus, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, MatrixGraph};

use std::collections::TryReserveError;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID {vertex} (graph has {vertex_count} vertices)")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("Allocation failed: {0}")]
    OutOfMemory(#[from] TryReserveError),

    #[error("Negative edge weight {weight} on edge ({from}, {to})")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    #[error("Invalid topological order: {0}")]
    InvalidTopologicalOrder(String),

    #[error("Graph is not acyclic: cycle through vertex {vertex}")]
    NotAcyclic { vertex: usize },

    #[error("Negative cycle through vertex {vertex}")]
    NegativeCycle { vertex: usize },

    #[error("Malformed input at record {record}: {message}")]
    Parse { record: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
