// src/histogram.rs
//! Out-degree distribution of a CSR graph.

use std::collections::BTreeMap;

use crate::graph::CsrGraph;

/// How out-degrees are grouped into histogram keys.
///
/// The mode is decided by the orchestrator (config or CLI flag), never
/// inferred from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketMode {
    /// One bin per exact out-degree.
    Degree,
    /// Power-of-two bins: degrees 0 and 1 share bucket 0, and any other
    /// degree `k` lands in bucket `floor(log2 k)`.
    Log2,
}

/// Tallies out-degrees into a frequency table keyed per `mode`.
#[must_use]
pub fn out_degree_histogram(graph: &CsrGraph, mode: BucketMode) -> BTreeMap<usize, u64> {
    let mut table: BTreeMap<usize, u64> = BTreeMap::new();
    for node in 0..graph.num_nodes() {
        let degree = graph.out_degree(node);
        let key = match mode {
            BucketMode::Degree => degree,
            BucketMode::Log2 if degree == 0 => 0,
            BucketMode::Log2 => degree.ilog2() as usize,
        };
        *table.entry(key).or_insert(0) += 1;
    }
    table
}

/// The inclusive degree range a `Log2` bucket covers.
#[must_use]
pub fn bucket_range(bucket: usize) -> (usize, usize) {
    if bucket == 0 {
        (0, 1)
    } else {
        (1 << bucket, (1 << (bucket + 1)) - 1)
    }
}
