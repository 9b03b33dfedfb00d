//! Whitespace-delimited text input.
//!
//! The first record is `directed vertex_count` (`directed` is `0` or `1`). Every following record is an edge `u v weight` until the
//! end of input. Records are token based, so line breaks are not significant.

use std::fmt::Debug;
use std::io::Read;
use std::str::FromStr;
use num_traits::Float;

use crate::graph::{AdjacencyGraph, MatrixGraph, MutableGraph};
use crate::{Error, Result};

/// A parsed input: header plus raw edge records
#[derive(Debug, Clone, PartialEq)]
pub struct GraphInput {
    pub directed: bool,
    pub vertex_count: usize,
    /// Edge records `(u, v, weight)` in input order, not yet range checked.
    /// Endpoints stay signed so that negative identities reach the graph builders.
    pub edges: Vec<(i64, i64, f64)>,
}

fn parse_token<T: FromStr>(token: &str, record: usize, what: &str) -> Result<T> {
    token.parse().map_err(|_| Error::Parse {
        record,
        message: format!("expected {} but found {:?}", what, token),
    })
}

/// Resolves a raw endpoint to a vertex of a graph with `vertex_count` vertices
fn vertex_id(raw: i64, vertex_count: usize) -> Option<usize> {
    usize::try_from(raw).ok().filter(|&v| v < vertex_count)
}

fn cast_weight<W: Float>(weight: f64, record: usize) -> Result<W> {
    num_traits::cast::<f64, W>(weight).ok_or_else(|| Error::Parse {
        record,
        message: format!("weight {} is not representable", weight),
    })
}

impl GraphInput {
    /// Parses the full text of an input.
    ///
    /// Record 0 is the header; edge records are numbered from 1.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();

        let directed_token = tokens.next().ok_or_else(|| Error::Parse {
            record: 0,
            message: "missing header".to_string(),
        })?;
        let directed = match parse_token::<i64>(directed_token, 0, "directed flag")? {
            0 => false,
            1 => true,
            other => {
                return Err(Error::Parse {
                    record: 0,
                    message: format!("directed flag must be 0 or 1, found {}", other),
                })
            }
        };
        let count_token = tokens.next().ok_or_else(|| Error::Parse {
            record: 0,
            message: "missing vertex count".to_string(),
        })?;
        let vertex_count: usize = parse_token(count_token, 0, "vertex count")?;

        let mut edges = Vec::new();
        let mut record = 1;
        while let Some(u) = tokens.next() {
            let (v, weight) = match (tokens.next(), tokens.next()) {
                (Some(v), Some(weight)) => (v, weight),
                _ => {
                    return Err(Error::Parse {
                        record,
                        message: "incomplete edge record".to_string(),
                    })
                }
            };
            edges.push((
                parse_token(u, record, "source vertex")?,
                parse_token(v, record, "target vertex")?,
                parse_token(weight, record, "weight")?,
            ));
            record += 1;
        }

        log::debug!(
            "Parsed {} graph with {} vertices and {} edge records",
            if directed { "directed" } else { "undirected" },
            vertex_count,
            edges.len()
        );

        Ok(GraphInput {
            directed,
            vertex_count,
            edges,
        })
    }

    /// Reads everything from `reader` and parses it
    pub fn read<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Builds the adjacency-list graph. An out-of-range vertex identity, negative
    /// or too large, is an `Error::InvalidVertex`.
    pub fn to_adjacency<W>(&self) -> Result<AdjacencyGraph<W>>
    where
        W: Float + Debug + Copy,
    {
        let mut graph = AdjacencyGraph::new(self.vertex_count, self.directed)?;
        for (i, &(raw_u, raw_v, weight)) in self.edges.iter().enumerate() {
            let u = self.require_vertex(raw_u)?;
            let v = self.require_vertex(raw_v)?;
            let inserted = graph.insert_edge(u, v, cast_weight(weight, i + 1)?)?;
            if !inserted {
                log::debug!("Edge ({}, {}) already present, record {} ignored", u, v, i + 1);
            }
        }
        Ok(graph)
    }

    /// Builds the weight and predecessor matrices. Records with an out-of-range
    /// vertex identity are skipped with a warning.
    pub fn to_matrix<W>(&self) -> Result<MatrixGraph<W>>
    where
        W: Float + Debug + Copy,
    {
        let mut graph = MatrixGraph::new(self.vertex_count, self.directed)?;
        for (i, &(raw_u, raw_v, weight)) in self.edges.iter().enumerate() {
            let (u, v) = match (
                vertex_id(raw_u, self.vertex_count),
                vertex_id(raw_v, self.vertex_count),
            ) {
                (Some(u), Some(v)) => (u, v),
                _ => {
                    log::warn!(
                        "Skipping edge ({}, {}) at record {}: vertex out of range",
                        raw_u,
                        raw_v,
                        i + 1
                    );
                    continue;
                }
            };
            graph.insert_edge(u, v, cast_weight(weight, i + 1)?)?;
        }
        Ok(graph)
    }

    fn require_vertex(&self, raw: i64) -> Result<usize> {
        vertex_id(raw, self.vertex_count).ok_or(Error::InvalidVertex {
            // Negative identities saturate to usize::MAX
            vertex: usize::try_from(raw).unwrap_or(usize::MAX),
            vertex_count: self.vertex_count,
        })
    }
}
