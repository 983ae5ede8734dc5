// tests/unit_pagerank.rs
//! Behavior of the push-style rank solver on small fixture graphs.

use dimrank_core::error::DimrankError;
use dimrank_core::graph::{CsrGraph, Edge};
use dimrank_core::rank::RankSolver;

fn graph(node_count: usize, edges: &[(usize, usize)]) -> CsrGraph {
    let edges: Vec<Edge> = edges
        .iter()
        .map(|&(src, dst)| Edge { src, dst, weight: 1 })
        .collect();
    CsrGraph::build(node_count, edges.len(), edges).unwrap()
}

fn cycle3() -> CsrGraph {
    graph(3, &[(0, 1), (1, 2), (2, 0)])
}

#[test]
fn test_three_node_cycle_is_uniform() {
    let solution = RankSolver::default().solve(&cycle3()).unwrap();

    assert!(solution.converged);
    for rank in &solution.ranks {
        assert!((rank - 1.0 / 3.0).abs() < 1e-3);
    }
}

#[test]
fn test_two_node_chain_favors_the_target() {
    // 1 -> 2 and nothing back: node 1 keeps only the teleport share
    // (1-d)/2, node 2 adds the pushed mass on top.
    let solution = RankSolver::default().solve(&graph(2, &[(0, 1)])).unwrap();

    assert!(solution.converged);
    assert!(solution.ranks[1] > solution.ranks[0]);
    let expected_first = 0.075 / 0.213_75;
    assert!((solution.ranks[0] - expected_first).abs() < 1e-3);
}

#[test]
fn test_ranks_sum_to_one_with_sinks() {
    // Nodes 1 and 2 are sinks; their mass is dropped each round, so the
    // final normalization has real work to do.
    let solution = RankSolver::default()
        .solve(&graph(3, &[(0, 1), (0, 2)]))
        .unwrap();

    let total: f64 = solution.ranks.iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_single_node_gets_everything() {
    let solution = RankSolver::default().solve(&graph(1, &[])).unwrap();
    assert_eq!(solution.ranks, vec![1.0]);
}

#[test]
fn test_disconnected_graph_is_uniform() {
    let solution = RankSolver::default().solve(&graph(4, &[])).unwrap();

    assert!(solution.converged);
    for rank in &solution.ranks {
        assert!((rank - 0.25).abs() < 1e-12);
    }
}

#[test]
fn test_identical_runs_are_bit_identical() {
    let graph = graph(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 3)]);
    let solver = RankSolver::default();

    let first = solver.solve(&graph).unwrap();
    let second = solver.solve(&graph).unwrap();
    assert_eq!(first.ranks, second.ranks);
    assert_eq!(first.rounds, second.rounds);
}

#[test]
fn test_converged_vector_is_a_fixed_point() {
    // One more hand-run round over the result must move nothing by more
    // than the threshold. The cycle has no sinks, so normalization does
    // not disturb the comparison.
    let graph = cycle3();
    let solver = RankSolver::default();
    let solution = solver.solve(&graph).unwrap();
    assert!(solution.converged);

    let n = graph.num_nodes();
    let teleport = (1.0 - solver.damping) / n as f64;
    let mut next = vec![0.0; n];
    for src in 0..n {
        let degree = graph.out_degree(src);
        if degree == 0 {
            continue;
        }
        let share = solution.ranks[src] / degree as f64;
        for (dst, _) in graph.neighbors(src) {
            next[dst] += share;
        }
    }
    let max_change = (0..n)
        .map(|i| (teleport + solver.damping * next[i] - solution.ranks[i]).abs())
        .fold(0.0_f64, f64::max);
    assert!(max_change <= 2.0 * solver.epsilon);
}

#[test]
fn test_round_bound_returns_best_effort() {
    let solver = RankSolver {
        epsilon: 1e-12,
        max_rounds: 2,
        ..RankSolver::default()
    };
    let solution = solver.solve(&graph(2, &[(0, 1)])).unwrap();

    assert!(!solution.converged);
    assert_eq!(solution.rounds, 2);
    assert_eq!(solution.ranks.len(), 2);
    let total: f64 = solution.ranks.iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_empty_graph_is_rejected() {
    let empty = CsrGraph::build(0, 0, Vec::new()).unwrap();
    let err = RankSolver::default().solve(&empty).unwrap_err();
    assert!(matches!(err, DimrankError::InvalidParameter(_)));
}

#[test]
fn test_out_of_range_damping_is_rejected() {
    for damping in [0.0, 1.0, 1.5, -0.2] {
        let solver = RankSolver {
            damping,
            ..RankSolver::default()
        };
        let err = solver.solve(&cycle3()).unwrap_err();
        assert!(matches!(err, DimrankError::InvalidParameter(_)));
    }
}

#[test]
fn test_non_positive_epsilon_is_rejected() {
    for epsilon in [0.0, -1e-4] {
        let solver = RankSolver {
            epsilon,
            ..RankSolver::default()
        };
        let err = solver.solve(&cycle3()).unwrap_err();
        assert!(matches!(err, DimrankError::InvalidParameter(_)));
    }
}

#[test]
fn test_zero_round_bound_is_rejected() {
    let solver = RankSolver {
        max_rounds: 0,
        ..RankSolver::default()
    };
    let err = solver.solve(&cycle3()).unwrap_err();
    assert!(matches!(err, DimrankError::InvalidParameter(_)));
}
