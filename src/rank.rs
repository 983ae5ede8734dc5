// src/rank.rs
//! Push-style PageRank over a CSR graph.
//!
//! Each round every node spreads its current rank equally across its
//! out-edges, then damping mixes in the uniform jump probability. Nodes
//! with no out-edges drop their mass; the final normalization restores a
//! proper distribution.

use rayon::prelude::*;

use crate::error::{DimrankError, Result};
use crate::graph::CsrGraph;

/// Iterative PageRank solver.
#[derive(Debug, Clone)]
pub struct RankSolver {
    /// Probability mass kept by the random walk (vs. a uniform jump).
    pub damping: f64,
    /// Convergence threshold on the max per-node change between rounds.
    pub epsilon: f64,
    /// Safety bound on the round count.
    pub max_rounds: usize,
}

impl Default for RankSolver {
    fn default() -> Self {
        Self {
            damping: 0.85,
            epsilon: 1e-4,
            max_rounds: 1000,
        }
    }
}

/// A converged (or best-effort) rank distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// One non-negative rank per node, summing to 1.
    pub ranks: Vec<f64>,
    /// Rounds actually executed.
    pub rounds: usize,
    /// False when the solver hit `max_rounds` before the threshold.
    pub converged: bool,
}

// Indexing is safe here: the solver only indexes rank buffers with node ids
// below the graph's node count.
#[allow(clippy::indexing_slicing, clippy::cast_precision_loss)]
impl RankSolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the iteration until the max per-node change falls to `epsilon`
    /// or the round bound is hit. Hitting the bound is not an error; the
    /// best-effort vector comes back with `converged = false`.
    ///
    /// Sources and their adjacency ranges are walked in index order, so
    /// identical inputs and parameters give bit-identical output.
    ///
    /// # Errors
    /// `InvalidParameter` on an empty graph, a damping factor outside
    /// (0, 1), a non-positive threshold, or a zero round bound.
    pub fn solve(&self, graph: &CsrGraph) -> Result<Solution> {
        self.validate(graph)?;

        let n = graph.num_nodes();
        let n_f = n as f64;
        let teleport = (1.0 - self.damping) / n_f;

        let mut current = vec![1.0 / n_f; n];
        let mut next = vec![0.0; n];

        let mut rounds = 0;
        let mut converged = false;

        while rounds < self.max_rounds {
            rounds += 1;

            // Push: each source spreads its mass across its out-edges.
            // Sinks contribute nothing.
            for src in 0..n {
                let degree = graph.out_degree(src);
                if degree == 0 {
                    continue;
                }
                let share = current[src] / degree as f64;
                for (dst, _) in graph.neighbors(src) {
                    next[dst] += share;
                }
            }

            // Element-wise, so the parallel pass cannot change any value.
            next.par_iter_mut()
                .for_each(|r| *r = teleport + self.damping * *r);

            let delta = current
                .par_iter()
                .zip(next.par_iter())
                .map(|(old, new)| (old - new).abs())
                .reduce(|| 0.0, f64::max);

            std::mem::swap(&mut current, &mut next);
            next.fill(0.0);

            if delta <= self.epsilon {
                converged = true;
                break;
            }
        }

        // Guard against drift accumulated over many rounds. Every entry is
        // at least the teleport term, so the total is strictly positive.
        let total: f64 = current.iter().sum();
        for rank in &mut current {
            *rank /= total;
        }

        Ok(Solution {
            ranks: current,
            rounds,
            converged,
        })
    }

    fn validate(&self, graph: &CsrGraph) -> Result<()> {
        if graph.is_empty() {
            return Err(DimrankError::InvalidParameter(
                "graph has no nodes, rank distribution is undefined".into(),
            ));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(DimrankError::InvalidParameter(format!(
                "damping factor {} outside (0, 1)",
                self.damping
            )));
        }
        if !(self.epsilon > 0.0) {
            return Err(DimrankError::InvalidParameter(format!(
                "convergence threshold {} must be positive",
                self.epsilon
            )));
        }
        if self.max_rounds == 0 {
            return Err(DimrankError::InvalidParameter(
                "round bound must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
