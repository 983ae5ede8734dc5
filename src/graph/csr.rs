// src/graph/csr.rs
//! Compressed sparse row adjacency for a directed, weighted graph.
//!
//! Built once from an edge list, immutable afterwards. Node `i`'s out-edges
//! occupy the contiguous range `row_ptr[i]..row_ptr[i + 1]` of
//! `col_idx`/`weights`, sorted by destination.

use crate::error::{DimrankError, Result};

/// A directed edge with 0-based endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub src: usize,
    pub dst: usize,
    pub weight: i64,
}

/// A directed graph in compressed sparse row form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    num_nodes: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    weights: Vec<i64>,
}

// Indexing is safe here: every node id reaching row_ptr/col_idx is < num_nodes,
// checked at construction.
#[allow(clippy::indexing_slicing)]
impl CsrGraph {
    /// Builds the adjacency structure from an edge list with 0-based
    /// endpoints.
    ///
    /// `declared_edges` is the edge count the source format announced and
    /// must match the number of edges actually supplied.
    ///
    /// # Errors
    /// Returns `Malformed` if the declared count disagrees with the edge
    /// list or any endpoint is outside `0..node_count`.
    pub fn build(node_count: usize, declared_edges: usize, mut edges: Vec<Edge>) -> Result<Self> {
        if edges.len() != declared_edges {
            return Err(DimrankError::Malformed(format!(
                "declared {declared_edges} edges, got {}",
                edges.len()
            )));
        }
        for edge in &edges {
            if edge.src >= node_count || edge.dst >= node_count {
                return Err(DimrankError::Malformed(format!(
                    "edge ({}, {}) references a node outside 0..{node_count}",
                    edge.src, edge.dst
                )));
            }
        }

        // The global triple sort fixes both the per-node destination order
        // and the exact layout of the arrays, so identical edge sets always
        // produce identical structures.
        edges.sort_unstable_by_key(|e| (e.src, e.dst, e.weight));

        let mut row_ptr = vec![0usize; node_count + 1];
        for edge in &edges {
            row_ptr[edge.src + 1] += 1;
        }
        for i in 1..=node_count {
            row_ptr[i] += row_ptr[i - 1];
        }

        let mut col_idx = Vec::with_capacity(edges.len());
        let mut weights = Vec::with_capacity(edges.len());
        for edge in &edges {
            col_idx.push(edge.dst);
            weights.push(edge.weight);
        }

        Ok(Self {
            num_nodes: node_count,
            row_ptr,
            col_idx,
            weights,
        })
    }

    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Out-degree of `node`.
    #[must_use]
    pub fn out_degree(&self, node: usize) -> usize {
        self.row_ptr[node + 1] - self.row_ptr[node]
    }

    /// Iterates `node`'s out-edges as `(destination, weight)` pairs, in
    /// ascending destination order.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        let start = self.row_ptr[node];
        let end = self.row_ptr[node + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// The offsets array; entry `i` is where node `i`'s edges begin.
    #[must_use]
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }
}
