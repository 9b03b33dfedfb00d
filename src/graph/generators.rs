use crate::graph::{AdjacencyGraph, MutableGraph};
use crate::Result;
use num_traits::Float;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::fmt::Debug;
use std::ops::Range;

fn weight<W: Float>(rng: &mut StdRng, range: &Range<f64>) -> W {
    // Whole-number weights keep sums exact in f32 and f64 alike
    let w = rng.gen_range(range.clone()).round();
    num_traits::cast::<f64, W>(w).unwrap_or_else(W::zero)
}

/// Generates a random directed graph with `n` vertices and about
/// `edge_factor * n` edges whose weights are drawn from `weights`.
///
/// A random spanning arborescence rooted at vertex 0 is inserted first, so every
/// vertex is reachable from 0.
pub fn generate_random<W>(
    n: usize,
    edge_factor: f64,
    weights: Range<f64>,
    seed: u64,
) -> Result<AdjacencyGraph<W>>
where
    W: Float + Debug + Copy,
{
    let mut graph = AdjacencyGraph::directed(n)?;
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 1..n {
        let parent = rng.gen_range(0..v);
        graph.insert_edge(parent, v, weight(&mut rng, &weights))?;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in n.saturating_sub(1)..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.insert_edge(u, v, weight(&mut rng, &weights))?;
        }
    }

    Ok(graph)
}

/// Generates a random DAG: vertices are shuffled into a hidden order and every
/// edge points forward in it. Weights may be negative.
///
/// Returns the graph together with the hidden order, which is a valid
/// topological order.
pub fn generate_dag<W>(
    n: usize,
    edge_factor: f64,
    weights: Range<f64>,
    seed: u64,
) -> Result<(AdjacencyGraph<W>, Vec<usize>)>
where
    W: Float + Debug + Copy,
{
    let mut graph = AdjacencyGraph::directed(n)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);

    if n < 2 {
        return Ok((graph, order));
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let a = rng.gen_range(0..n - 1);
        let b = rng.gen_range(a + 1..n);
        graph.insert_edge(order[a], order[b], weight(&mut rng, &weights))?;
    }

    Ok((graph, order))
}

/// Generates an undirected `width x height` grid with random weights, vertex
/// `y * width + x` at column `x` and row `y`
pub fn generate_grid<W>(
    width: usize,
    height: usize,
    weights: Range<f64>,
    seed: u64,
) -> Result<AdjacencyGraph<W>>
where
    W: Float + Debug + Copy,
{
    let mut graph = AdjacencyGraph::undirected(width * height)?;
    let mut rng = StdRng::seed_from_u64(seed);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.insert_edge(vertex, vertex + 1, weight(&mut rng, &weights))?;
            }
            if y + 1 < height {
                graph.insert_edge(vertex, vertex + width, weight(&mut rng, &weights))?;
            }
        }
    }

    Ok(graph)
}
