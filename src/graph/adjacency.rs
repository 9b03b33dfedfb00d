use crate::data_structures::try_filled;
use crate::graph::traits::{Graph, MutableGraph};
use crate::Result;
use num_traits::Float;
use std::fmt::Debug;

/// A weighted graph stored as one adjacency list per vertex.
///
/// The vertex count is fixed at construction. Parallel edges are rejected: an
/// insertion of an ordered pair that already exists is ignored.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Whether insertions create a single directed edge or a mirrored pair
    directed: bool,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Number of stored directed edges
    edge_count: usize,
}

impl<W> AdjacencyGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a graph with `vertices` vertices and no edges.
    ///
    /// Fails with `Error::OutOfMemory` if the vertex storage cannot be reserved.
    pub fn new(vertices: usize, directed: bool) -> Result<Self> {
        Ok(AdjacencyGraph {
            directed,
            adjacency: try_filled(vertices, Vec::new())?,
            edge_count: 0,
        })
    }

    /// Creates a directed graph with the specified number of vertices
    pub fn directed(vertices: usize) -> Result<Self> {
        Self::new(vertices, true)
    }

    /// Creates an undirected graph with the specified number of vertices
    pub fn undirected(vertices: usize) -> Result<Self> {
        Self::new(vertices, false)
    }

    /// Builds a graph from an edge list, rejecting out-of-range endpoints
    pub fn from_edges(
        vertices: usize,
        directed: bool,
        edges: impl IntoIterator<Item = (usize, usize, W)>,
    ) -> Result<Self> {
        let mut graph = Self::new(vertices, directed)?;
        for (from, to, weight) in edges {
            graph.insert_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns the adjacency list of a vertex
    pub fn neighbors(&self, vertex: usize) -> &[(usize, W)] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Validate that the graph doesn't have negative weights.
    ///
    /// Returns the first offending edge, if any.
    pub fn find_negative_edge(&self) -> Option<(usize, usize, W)> {
        self.edges().find(|(_, _, weight)| *weight < W::zero())
    }

    fn push_edge(&mut self, from: usize, to: usize, weight: W) -> Result<bool> {
        let list = &mut self.adjacency[from];
        if list.iter().any(|(target, _)| *target == to) {
            return Ok(false);
        }
        list.try_reserve(1)?;
        list.push((to, weight));
        self.edge_count += 1;
        Ok(true)
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.neighbors(vertex).iter().copied())
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).iter().any(|(target, _)| *target == to)
    }
}

impl<W> MutableGraph<W> for AdjacencyGraph<W>
where
    W: Float + Debug + Copy,
{
    fn insert_edge(&mut self, from: usize, to: usize, weight: W) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        if !self.push_edge(from, to, weight)? {
            return Ok(false);
        }

        // Mirror edge; ignored if (to, from) was inserted earlier
        if !self.directed && from != to {
            self.push_edge(to, from, weight)?;
        }

        Ok(true)
    }
}
