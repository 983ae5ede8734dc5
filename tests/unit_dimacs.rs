// tests/unit_dimacs.rs
//! DIMACS decoding, validation, and round-trip encoding.

use dimrank_core::error::DimrankError;
use dimrank_core::graph::dimacs;

const BASIC: &str = "\
c tiny test graph
p sp 3 3
a 1 2 5
a 2 3 1
a 3 1 2
";

#[test]
fn test_decode_basic() {
    let list = dimacs::decode(BASIC.as_bytes()).unwrap();
    assert_eq!(list.node_count, 3);
    assert_eq!(list.edge_count, 3);
    assert_eq!(list.edges.len(), 3);
}

#[test]
fn test_decode_converts_to_zero_based() {
    let graph = dimacs::decode(BASIC.as_bytes()).unwrap().into_csr().unwrap();
    let n0: Vec<(usize, i64)> = graph.neighbors(0).collect();
    assert_eq!(n0, vec![(1, 5)]);
    let n2: Vec<(usize, i64)> = graph.neighbors(2).collect();
    assert_eq!(n2, vec![(0, 2)]);
}

#[test]
fn test_decode_skips_blank_comment_and_unknown_lines() {
    let input = "\
c a comment

n 1 0
p sp 2 1
c another comment
a 1 2 4
";
    let list = dimacs::decode(input.as_bytes()).unwrap();
    assert_eq!(list.node_count, 2);
    assert_eq!(list.edges.len(), 1);
}

#[test]
fn test_missing_problem_line_is_rejected() {
    let err = dimacs::decode("c nothing else\n".as_bytes()).unwrap_err();
    assert!(matches!(err, DimrankError::Malformed(_)));
}

#[test]
fn test_duplicate_problem_line_is_rejected() {
    let input = "p sp 2 0\np sp 3 0\n";
    let err = dimacs::decode(input.as_bytes()).unwrap_err();
    assert!(matches!(err, DimrankError::Malformed(_)));
}

#[test]
fn test_arc_before_problem_line_is_rejected() {
    let input = "a 1 2 3\np sp 2 1\n";
    let err = dimacs::decode(input.as_bytes()).unwrap_err();
    assert!(matches!(err, DimrankError::Malformed(_)));
}

#[test]
fn test_unparsable_counts_are_rejected() {
    let err = dimacs::decode("p sp many 3\n".as_bytes()).unwrap_err();
    assert!(matches!(err, DimrankError::Malformed(_)));
}

#[test]
fn test_short_arc_line_is_rejected() {
    let input = "p sp 2 1\na 1 2\n";
    let err = dimacs::decode(input.as_bytes()).unwrap_err();
    assert!(matches!(err, DimrankError::Malformed(_)));
}

#[test]
fn test_zero_endpoint_is_rejected() {
    let input = "p sp 2 1\na 0 2 1\n";
    let err = dimacs::decode(input.as_bytes()).unwrap_err();
    assert!(matches!(err, DimrankError::Malformed(_)));
}

#[test]
fn test_endpoint_above_node_count_is_rejected() {
    let input = "p sp 2 1\na 1 3 1\n";
    let err = dimacs::decode(input.as_bytes()).unwrap_err();
    assert!(matches!(err, DimrankError::Malformed(_)));
}

#[test]
fn test_arc_count_mismatch_is_rejected() {
    let input = "p sp 3 2\na 1 2 1\n";
    let err = dimacs::decode(input.as_bytes()).unwrap_err();
    assert!(matches!(err, DimrankError::Malformed(_)));
}

#[test]
fn test_encode_round_trip_preserves_the_graph() {
    let graph = dimacs::decode(BASIC.as_bytes()).unwrap().into_csr().unwrap();

    let mut encoded = Vec::new();
    dimacs::encode(&graph, &mut encoded).unwrap();
    let reparsed = dimacs::decode(encoded.as_slice()).unwrap().into_csr().unwrap();

    assert_eq!(graph, reparsed);
}

#[test]
fn test_encode_emits_one_based_endpoints() {
    let graph = dimacs::decode(BASIC.as_bytes()).unwrap().into_csr().unwrap();

    let mut encoded = Vec::new();
    dimacs::encode(&graph, &mut encoded).unwrap();
    let text = String::from_utf8(encoded).unwrap();

    assert!(text.starts_with("p sp 3 3\n"));
    assert!(text.contains("a 1 2 5"));
    assert!(text.contains("a 3 1 2"));
}

#[test]
fn test_label_table_is_one_based() {
    let graph = dimacs::decode(BASIC.as_bytes()).unwrap().into_csr().unwrap();

    let mut out = Vec::new();
    dimacs::write_labels(&graph, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text, "node\tlabel\n1\t1\n2\t2\n3\t3\n");
}
