//! Human readable and JSON renderings of graphs and results.

use std::fmt::{self, Debug, Display};
use num_traits::Float;
use serde::Serialize;

use crate::algorithm::{RunStatus, ShortestPathResult};
use crate::graph::{Graph, MatrixGraph};
use crate::Result;

fn is_unreachable<W: Float>(w: W) -> bool {
    w.is_infinite() && w > W::zero()
}

/// Adjacency lists, one line per vertex: `[u] ~> [v, w] ~> ...`
pub fn format_adjacency<W, G>(graph: &G) -> String
where
    W: Float + Debug + Copy + Display,
    G: Graph<W>,
{
    let mut out = String::new();
    for u in 0..graph.vertex_count() {
        out.push_str(&format!("[{}]", u));
        for (v, weight) in graph.outgoing_edges(u) {
            out.push_str(&format!(" ~> [{}, {}]", v, weight));
        }
        out.push('\n');
    }
    out
}

/// The weight matrix (`INF` for infinity) followed by the predecessor matrix
/// (`NULL` for none)
pub struct MatrixDump<'a, W: Float + Debug + Copy>(pub &'a MatrixGraph<W>);

impl<'a, W> Display for MatrixDump<'a, W>
where
    W: Float + Debug + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.0;
        let n = g.vertex_count();

        writeln!(f, "Weight matrix (W):")?;
        write!(f, "    ")?;
        for j in 0..n {
            write!(f, " {:>9} ", j)?;
        }
        writeln!(f)?;
        for i in 0..n {
            write!(f, "{:>2} |", i)?;
            for &w in g.weight_row(i) {
                if is_unreachable(w) {
                    write!(f, " {:>9} ", "INF")?;
                } else {
                    write!(f, " {:>9.3} ", w)?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Predecessor matrix (Pi):")?;
        write!(f, "    ")?;
        for j in 0..n {
            write!(f, " {:>4} ", j)?;
        }
        writeln!(f)?;
        for i in 0..n {
            write!(f, "{:>2} |", i)?;
            for pred in g.predecessor_row(i) {
                match pred {
                    Some(p) => write!(f, " {:>4} ", p)?,
                    None => write!(f, " {:>4} ", "NULL")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders the predecessor chain of `vertex`, e.g. `3 <~ 2 <~ 1 <~ 0`
pub fn format_chain<W>(result: &ShortestPathResult<W>, vertex: usize) -> String
where
    W: Float + Debug + Copy,
{
    result
        .predecessor_chain(vertex)
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" <~ ")
}

/// One row per vertex: distance estimate, predecessor and predecessor chain
pub struct ResultsTable<'a, W: Float + Debug + Copy>(pub &'a ShortestPathResult<W>);

impl<'a, W> Display for ResultsTable<'a, W>
where
    W: Float + Debug + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(
            f,
            "{:<10} | {:<20} | {:<10} | {}",
            "vertex", "distance (d)", "pred (pi)", "shortest path"
        )?;
        writeln!(f, "{:-<11}|{:-<22}|{:-<12}|{:-<30}", "", "", "", "")?;

        for (v, &d) in result.distances.iter().enumerate() {
            let distance = if is_unreachable(d) {
                "INF".to_string()
            } else {
                format!("{:.3}", d)
            };
            let pred = result.predecessors[v]
                .map(|p| p.to_string())
                .unwrap_or_else(|| "NULL".to_string());
            writeln!(
                f,
                "{:<10} | {:<20} | {:<10} | {}",
                v,
                distance,
                pred,
                format_chain(result, v)
            )?;
        }

        if let RunStatus::NegativeCycle { from, to } = result.status {
            writeln!(f, "negative cycle detected: edge ({}, {}) still relaxes", from, to)?;
        }
        Ok(())
    }
}

/// Reconstructed path for every ordered pair of a solved [`MatrixGraph`]
pub struct AllPairsListing<'a, W: Float + Debug + Copy>(pub &'a MatrixGraph<W>);

impl<'a, W> Display for AllPairsListing<'a, W>
where
    W: Float + Debug + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.vertex_count();
        let pairs = (0..n).flat_map(|i| (0..n).map(move |j| (i, j)));
        format_pairs(self.0, pairs, f)
    }
}

/// Writes `from  to  distance  path` lines for the given pairs
pub fn format_pairs<W>(
    graph: &MatrixGraph<W>,
    pairs: impl IntoIterator<Item = (usize, usize)>,
    f: &mut dyn fmt::Write,
) -> fmt::Result
where
    W: Float + Debug + Copy + Display,
{
    writeln!(f, "{:>6} {:>6} {:>12}   path", "from", "to", "distance")?;
    for (i, j) in pairs {
        let distance = match graph.distance(i, j) {
            Some(d) => format!("{:.3}", d),
            None => "INF".to_string(),
        };
        let path = match graph.reconstruct_path(i, j) {
            Ok(Some(path)) => path
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ~> "),
            Ok(None) => format!("no path from {} to {}", i, j),
            Err(e) => e.to_string(),
        };
        writeln!(f, "{:>6} {:>6} {:>12}   {}", i, j, distance, path)?;
    }
    Ok(())
}

/// Serializable view of one vertex of a single-source result
#[derive(Debug, Clone, Serialize)]
pub struct VertexReport {
    pub vertex: usize,
    /// `None` when unreachable
    pub distance: Option<f64>,
    pub predecessor: Option<usize>,
    pub path: Option<Vec<usize>>,
}

/// Serializable view of a single-source result
#[derive(Debug, Clone, Serialize)]
pub struct SingleSourceReport {
    pub algorithm: String,
    pub source: usize,
    pub converged: bool,
    /// Edge that still relaxed after the last Bellman-Ford pass
    pub negative_cycle_edge: Option<(usize, usize)>,
    pub vertices: Vec<VertexReport>,
}

impl SingleSourceReport {
    pub fn new<W>(algorithm: &str, result: &ShortestPathResult<W>) -> Self
    where
        W: Float + Debug + Copy,
    {
        let vertices = (0..result.distances.len())
            .map(|v| VertexReport {
                vertex: v,
                distance: result.distance(v).and_then(|d| d.to_f64()),
                predecessor: result.predecessors[v],
                path: result.path_to(v),
            })
            .collect();

        SingleSourceReport {
            algorithm: algorithm.to_string(),
            source: result.source,
            converged: result.converged(),
            negative_cycle_edge: match result.status {
                RunStatus::NegativeCycle { from, to } => Some((from, to)),
                RunStatus::Converged => None,
            },
            vertices,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Serializable view of one ordered pair after Floyd-Warshall
#[derive(Debug, Clone, Serialize)]
pub struct PairReport {
    pub from: usize,
    pub to: usize,
    pub distance: Option<f64>,
    pub path: Option<Vec<usize>>,
}

/// Serializable view of the requested pairs of a solved [`MatrixGraph`]
#[derive(Debug, Clone, Serialize)]
pub struct AllPairsReport {
    pub vertex_count: usize,
    pub pairs: Vec<PairReport>,
}

impl AllPairsReport {
    /// Fails if a path cannot be reconstructed (negative cycle or bad vertex)
    pub fn new<W>(
        graph: &MatrixGraph<W>,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self>
    where
        W: Float + Debug + Copy,
    {
        let mut rows = Vec::new();
        for (i, j) in pairs {
            let path = graph.reconstruct_path(i, j)?;
            rows.push(PairReport {
                from: i,
                to: j,
                distance: graph.distance(i, j).and_then(|d| d.to_f64()),
                path,
            });
        }
        Ok(AllPairsReport {
            vertex_count: graph.vertex_count(),
            pairs: rows,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
