use crate::data_structures::try_filled;
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// A dense graph stored as a weight matrix `W` and a predecessor matrix `Pi`.
///
/// Before Floyd-Warshall runs, `W[i][j]` is the weight of edge `(i, j)` (zero on
/// the diagonal, infinity where there is no edge) and `Pi[i][j] = Some(i)` for
/// every edge. Afterwards `W[i][j]` is the shortest path weight and `Pi[i][j]`
/// the predecessor of `j` on a shortest path from `i`.
#[derive(Debug, Clone)]
pub struct MatrixGraph<W>
where
    W: Float + Debug + Copy,
{
    vertex_count: usize,
    directed: bool,
    /// Row-major `n x n` weights
    weights: Vec<W>,
    /// Row-major `n x n` predecessors
    predecessors: Vec<Option<usize>>,
}

impl<W> MatrixGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Allocates both `n x n` matrices.
    ///
    /// Fails with `Error::OutOfMemory` (and allocates nothing) if either matrix
    /// cannot be reserved.
    pub fn new(vertices: usize, directed: bool) -> Result<Self> {
        // An overflowing cell count saturates and then fails to reserve
        let cells = vertices.checked_mul(vertices).unwrap_or(usize::MAX);

        let mut weights = try_filled(cells, W::infinity())?;
        let predecessors = try_filled(cells, None)?;
        for i in 0..vertices {
            weights[i * vertices + i] = W::zero();
        }

        Ok(MatrixGraph {
            vertex_count: vertices,
            directed,
            weights,
            predecessors,
        })
    }

    /// Builds the matrices from any adjacency-style graph
    pub fn from_graph<G: Graph<W>>(graph: &G) -> Result<Self> {
        let mut matrix = Self::new(graph.vertex_count(), graph.is_directed())?;
        // Edges are copied one direction at a time; the source graph already
        // stores both directions of an undirected edge.
        for (from, to, weight) in graph.edges() {
            matrix.set_edge(from, to, weight);
        }
        Ok(matrix)
    }

    /// Builds the matrices from an edge list, rejecting out-of-range endpoints
    pub fn from_edges(
        vertices: usize,
        directed: bool,
        edges: impl IntoIterator<Item = (usize, usize, W)>,
    ) -> Result<Self> {
        let mut matrix = Self::new(vertices, directed)?;
        for (from, to, weight) in edges {
            matrix.insert_edge(from, to, weight)?;
        }
        Ok(matrix)
    }

    #[inline]
    fn cell(&self, i: usize, j: usize) -> usize {
        i * self.vertex_count + j
    }

    /// Current value of `W[i][j]`
    pub fn weight(&self, i: usize, j: usize) -> W {
        self.weights[self.cell(i, j)]
    }

    /// Current value of `W[i][j]`, `None` if it is infinite
    pub fn distance(&self, i: usize, j: usize) -> Option<W> {
        let w = self.weight(i, j);
        if w.is_infinite() && w > W::zero() {
            None
        } else {
            Some(w)
        }
    }

    /// Current value of `Pi[i][j]`
    pub fn predecessor(&self, i: usize, j: usize) -> Option<usize> {
        self.predecessors[self.cell(i, j)]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, weight: W, predecessor: Option<usize>) {
        let cell = self.cell(i, j);
        self.weights[cell] = weight;
        self.predecessors[cell] = predecessor;
    }

    /// Row `i` of the weight matrix
    pub fn weight_row(&self, i: usize) -> &[W] {
        let n = self.vertex_count;
        &self.weights[i * n..(i + 1) * n]
    }

    /// Row `i` of the predecessor matrix
    pub fn predecessor_row(&self, i: usize) -> &[Option<usize>] {
        let n = self.vertex_count;
        &self.predecessors[i * n..(i + 1) * n]
    }

    /// First vertex whose diagonal entry is negative, i.e. that lies on a
    /// negative cycle once Floyd-Warshall has run
    pub fn negative_cycle_vertex(&self) -> Option<usize> {
        (0..self.vertex_count).find(|&v| self.weight(v, v) < W::zero())
    }

    /// Reconstructs the shortest path from `i` to `j` by following `Pi`.
    ///
    /// Returns `Ok(None)` if `j` is unreachable from `i`, and an error if either
    /// vertex is out of range or the matrices contain a negative cycle.
    pub fn reconstruct_path(&self, i: usize, j: usize) -> Result<Option<Vec<usize>>> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;
        if let Some(vertex) = self.negative_cycle_vertex() {
            return Err(Error::NegativeCycle { vertex });
        }

        let mut path = vec![j];
        let mut current = j;
        while current != i {
            match self.predecessor(i, current) {
                None => return Ok(None),
                Some(pred) => {
                    // A converged Pi never revisits a vertex
                    if path.len() >= self.vertex_count {
                        return Err(Error::NegativeCycle { vertex: pred });
                    }
                    path.push(pred);
                    current = pred;
                }
            }
        }

        path.reverse();
        Ok(Some(path))
    }

    /// Reconstructs the path for every ordered pair, row by row
    pub fn all_paths(&self) -> Result<Vec<((usize, usize), Option<Vec<usize>>)>> {
        let n = self.vertex_count;
        let mut paths = Vec::new();
        paths.try_reserve_exact(n * n)?;
        for i in 0..n {
            for j in 0..n {
                paths.push(((i, j), self.reconstruct_path(i, j)?));
            }
        }
        Ok(paths)
    }

    fn set_edge(&mut self, from: usize, to: usize, weight: W) {
        if from == to {
            // A self-loop can only lower the diagonal
            if weight < self.weight(from, from) {
                self.set(from, from, weight, Some(from));
            }
        } else {
            self.set(from, to, weight, Some(from));
        }
    }
}

impl<W> Graph<W> for MatrixGraph<W>
where
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of cells with a predecessor. After Floyd-Warshall this counts
    /// every reachable ordered pair rather than the inserted edges.
    fn edge_count(&self) -> usize {
        self.predecessors.iter().filter(|p| p.is_some()).count()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    /// Entries of row `vertex` with a predecessor set. The diagonal entry is
    /// included only for a negative self-loop. After Floyd-Warshall the row
    /// holds shortest path weights to every reachable vertex.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.weight_row(vertex)
                .iter()
                .zip(self.predecessor_row(vertex))
                .enumerate()
                .filter(|(_, (_, pred))| pred.is_some())
                .map(|(j, (w, _))| (j, *w)),
        )
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if self.has_vertex(from) && self.has_vertex(to) && self.predecessor(from, to).is_some() {
            Some(self.weight(from, to))
        } else {
            None
        }
    }
}

impl<W> MutableGraph<W> for MatrixGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Sets `W[from][to]` and `Pi[from][to] = from`; a later insertion of the
    /// same pair overwrites the earlier one. Undirected graphs also set
    /// `W[to][from]` and `Pi[to][from] = to`.
    fn insert_edge(&mut self, from: usize, to: usize, weight: W) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        self.set_edge(from, to, weight);
        if !self.directed {
            self.set_edge(to, from, weight);
        }
        Ok(true)
    }
}
