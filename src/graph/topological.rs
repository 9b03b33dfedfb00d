//! Topological ordering by depth-first search.
//!
//! The order is the reverse of the DFS finish order, with DFS roots tried in
//! increasing vertex order and neighbours in adjacency-list order. The walk
//! uses an explicit stack, so deep graphs do not grow the call stack.

use std::fmt::Debug;
use num_traits::Float;

use crate::data_structures::try_filled;
use crate::graph::Graph;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not discovered yet
    White,
    /// Discovered, still on the DFS stack
    Gray,
    /// Finished
    Black,
}

/// Returns every vertex of `graph` such that each edge `(u, v)` has `u` before `v`.
///
/// Fails with `Error::NotAcyclic` if the search meets a back edge.
pub fn topological_order<W, G>(graph: &G) -> Result<Vec<usize>>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    let mut color = try_filled(n, Color::White)?;
    let mut finished = Vec::new();
    finished.try_reserve_exact(n)?;
    let mut stack: Vec<(usize, Box<dyn Iterator<Item = (usize, W)> + '_>)> = Vec::new();

    for root in 0..n {
        if color[root] != Color::White {
            continue;
        }
        color[root] = Color::Gray;
        stack.push((root, graph.outgoing_edges(root)));

        while let Some((u, edges)) = stack.last_mut() {
            let u = *u;
            match edges.next() {
                Some((v, _)) => match color[v] {
                    Color::White => {
                        color[v] = Color::Gray;
                        stack.push((v, graph.outgoing_edges(v)));
                    }
                    Color::Gray => return Err(Error::NotAcyclic { vertex: v }),
                    Color::Black => {}
                },
                None => {
                    color[u] = Color::Black;
                    finished.push(u);
                    stack.pop();
                }
            }
        }
    }

    finished.reverse();
    log::debug!("Topological order: {:?}", finished);
    Ok(finished)
}

/// Checks that `order` is a permutation of the vertices of `graph` and that
/// every edge goes forward in it.
pub fn validate_topological_order<W, G>(graph: &G, order: &[usize]) -> Result<()>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    if order.len() != n {
        return Err(Error::InvalidTopologicalOrder(format!(
            "expected {} vertices, got {}",
            n,
            order.len()
        )));
    }

    let mut rank = try_filled(n, usize::MAX)?;
    for (i, &v) in order.iter().enumerate() {
        graph.check_vertex(v)?;
        if rank[v] != usize::MAX {
            return Err(Error::InvalidTopologicalOrder(format!(
                "vertex {} appears more than once",
                v
            )));
        }
        rank[v] = i;
    }

    match graph.edges().find(|&(u, v, _)| rank[u] >= rank[v]) {
        Some((u, v, _)) => Err(Error::InvalidTopologicalOrder(format!(
            "edge ({}, {}) goes against the order",
            u, v
        ))),
        None => Ok(()),
    }
}
