// src/graph/dimacs.rs
//! DIMACS shortest-path format decoding and encoding.
//!
//! Line-oriented records: `c` comments, one `p <format> <nodes> <edges>`
//! size declaration, and `a <src> <dst> <weight>` arcs with 1-based
//! endpoints. Other record types carry no adjacency information and are
//! skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{DimrankError, Result};
use crate::graph::csr::{CsrGraph, Edge};

/// The raw contents of a DIMACS file: declared sizes plus 0-based edges.
#[derive(Debug, Clone)]
pub struct EdgeList {
    pub node_count: usize,
    pub edge_count: usize,
    pub edges: Vec<Edge>,
}

impl EdgeList {
    /// Converts the decoded list into its adjacency form.
    ///
    /// # Errors
    /// See [`CsrGraph::build`].
    pub fn into_csr(self) -> Result<CsrGraph> {
        CsrGraph::build(self.node_count, self.edge_count, self.edges)
    }
}

/// Reads and decodes a DIMACS file from disk.
///
/// # Errors
/// `Io` if the file cannot be opened or read, `Malformed` on structural
/// problems (see [`decode`]).
pub fn read_file(path: &Path) -> Result<EdgeList> {
    let file = File::open(path).map_err(|e| DimrankError::io(e, path))?;
    decode(BufReader::new(file))
}

/// Decodes DIMACS records from a buffered reader.
///
/// Endpoints are converted to 0-based on the way in.
///
/// # Errors
/// `Malformed` when the `p` record is missing, duplicated, or short, when an
/// arc appears before the `p` record or fails to parse, when an endpoint
/// falls outside `1..=nodes`, or when the arc count disagrees with the
/// declaration.
pub fn decode<R: BufRead>(reader: R) -> Result<EdgeList> {
    let mut sizes: Option<(usize, usize)> = None;
    let mut edges: Vec<Edge> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let mut fields = line.split_whitespace();

        match fields.next() {
            None | Some("c") => {}
            Some("p") => {
                if sizes.is_some() {
                    return Err(malformed(line_no, "duplicate problem line"));
                }
                let _format = fields
                    .next()
                    .ok_or_else(|| malformed(line_no, "problem line missing format"))?;
                let nodes: usize = parse_field(line_no, fields.next(), "node count")?;
                let declared: usize = parse_field(line_no, fields.next(), "edge count")?;
                edges.reserve(declared);
                sizes = Some((nodes, declared));
            }
            Some("a") => {
                let Some((node_count, _)) = sizes else {
                    return Err(malformed(line_no, "arc before problem line"));
                };
                let src = parse_endpoint(line_no, fields.next(), node_count, "source")?;
                let dst = parse_endpoint(line_no, fields.next(), node_count, "destination")?;
                let weight: i64 = parse_field(line_no, fields.next(), "weight")?;
                edges.push(Edge { src, dst, weight });
            }
            Some(_) => {}
        }
    }

    let Some((node_count, edge_count)) = sizes else {
        return Err(DimrankError::Malformed("missing problem line".into()));
    };
    if edges.len() != edge_count {
        return Err(DimrankError::Malformed(format!(
            "problem line declared {edge_count} arcs, file contains {}",
            edges.len()
        )));
    }

    Ok(EdgeList {
        node_count,
        edge_count,
        edges,
    })
}

/// Writes the graph back out in DIMACS form, endpoints re-incremented to
/// 1-based and weights unchanged.
///
/// # Errors
/// Propagates write failures.
pub fn encode<W: Write>(graph: &CsrGraph, mut out: W) -> std::io::Result<()> {
    writeln!(out, "p sp {} {}", graph.num_nodes(), graph.num_edges())?;
    for src in 0..graph.num_nodes() {
        for (dst, weight) in graph.neighbors(src) {
            writeln!(out, "a {} {} {weight}", src + 1, dst + 1)?;
        }
    }
    Ok(())
}

/// Encodes the graph to a file on disk.
///
/// # Errors
/// `Io` with the offending path on any write failure.
pub fn write_file(graph: &CsrGraph, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| DimrankError::io(e, path))?;
    let mut out = BufWriter::new(file);
    encode(graph, &mut out).map_err(|e| DimrankError::io(e, path))?;
    out.flush().map_err(|e| DimrankError::io(e, path))
}

/// Writes the node-number/label table. Labels are the 1-based node numbers.
///
/// # Errors
/// Propagates write failures.
pub fn write_labels<W: Write>(graph: &CsrGraph, mut out: W) -> std::io::Result<()> {
    writeln!(out, "node\tlabel")?;
    for node in 1..=graph.num_nodes() {
        writeln!(out, "{node}\t{node}")?;
    }
    Ok(())
}

/// Writes the label table to a file on disk.
///
/// # Errors
/// `Io` with the offending path on any write failure.
pub fn write_labels_file(graph: &CsrGraph, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| DimrankError::io(e, path))?;
    let mut out = BufWriter::new(file);
    write_labels(graph, &mut out).map_err(|e| DimrankError::io(e, path))?;
    out.flush().map_err(|e| DimrankError::io(e, path))
}

fn malformed(line: usize, reason: impl std::fmt::Display) -> DimrankError {
    DimrankError::Malformed(format!("line {line}: {reason}"))
}

fn parse_field<T: std::str::FromStr>(line: usize, field: Option<&str>, what: &str) -> Result<T> {
    field
        .ok_or_else(|| malformed(line, format!("missing {what}")))?
        .parse()
        .map_err(|_| malformed(line, format!("unparsable {what}")))
}

fn parse_endpoint(
    line: usize,
    field: Option<&str>,
    node_count: usize,
    what: &str,
) -> Result<usize> {
    let id: usize = parse_field(line, field, what)?;
    if id == 0 || id > node_count {
        return Err(malformed(
            line,
            format!("{what} {id} outside 1..={node_count}"),
        ));
    }
    Ok(id - 1)
}
