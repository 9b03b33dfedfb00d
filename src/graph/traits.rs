use std::fmt::Debug;
use num_traits::Float;

use crate::{Error, Result};

/// Trait representing a weighted graph with a fixed vertex count
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored (directed) edges in the graph.
    /// An undirected edge `{u, v}` with `u != v` counts twice.
    fn edge_count(&self) -> usize;

    /// Returns true if edges were inserted as directed edges
    fn is_directed(&self) -> bool;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    /// Returns `Error::InvalidVertex` unless `vertex < vertex_count()`
    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Iterates over every stored edge as `(from, to, weight)`, source vertices in
    /// increasing order
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = (usize, usize, W)> + 'a>
    where
        W: 'a,
    {
        Box::new((0..self.vertex_count()).flat_map(move |u| {
            self.outgoing_edges(u).map(move |(v, weight)| (u, v, weight))
        }))
    }
}

/// Trait for graphs that accept edges after construction
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug + Copy,
{
    /// Inserts an edge between two vertices with the given weight.
    ///
    /// Returns `Ok(true)` if the graph changed, `Ok(false)` if the edge was
    /// already present and the insertion was ignored.
    fn insert_edge(&mut self, from: usize, to: usize, weight: W) -> Result<bool>;
}
