//! Edge-list text format.
//!
//! ```text
//! # optional comments
//! 4          vertex count
//! 3          edge count
//! 0 1
//! 1 2
//! 2 3
//! ```
//!
//! Tokens are whitespace separated and may be spread over lines freely;
//! anything after `#` on a line is ignored. Edges are inserted in file order,
//! which fixes adjacency order and therefore traversal order.

use std::collections::VecDeque;
use std::io::{BufRead, Lines};

use tracing::{debug, trace, warn};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Vertex, MAX_VERTEX_COUNT};

struct Tokens<R> {
    lines: Lines<R>,
    line_no: usize,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            let line = line?;
            self.line_no += 1;
            let content = line.split('#').next().unwrap_or_default();
            self.pending
                .extend(content.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn next_int(&mut self, what: &str) -> Result<i64> {
        let token = self.next_token()?.ok_or_else(|| self.error(format!(
            "unexpected end of input, expected {what}"
        )))?;
        token
            .parse::<i64>()
            .map_err(|_| self.error(format!("expected {what}, found '{token}'")))
    }

    fn next_vertex(&mut self) -> Result<Vertex> {
        let raw = self.next_int("edge endpoint")?;
        Vertex::try_from(raw)
            .map_err(|_| self.error(format!("vertex id cannot be negative, got {raw}")))
    }

    fn error(&self, message: String) -> GraphError {
        GraphError::Parse {
            line: self.line_no,
            message,
        }
    }
}

/// Build a graph from an edge list.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<Graph> {
    let mut tokens = Tokens::new(reader);

    let vertex_count = tokens.next_int("vertex count")?;
    if usize::try_from(vertex_count).is_ok_and(|n| n > MAX_VERTEX_COUNT) {
        return Err(tokens.error(format!(
            "vertex count {vertex_count} exceeds the supported maximum of {MAX_VERTEX_COUNT}"
        )));
    }
    let mut graph = Graph::try_new(vertex_count)?;

    let edge_count = tokens.next_int("edge count")?;
    if edge_count < 0 {
        return Err(tokens.error(format!("edge count cannot be negative, got {edge_count}")));
    }

    for _ in 0..edge_count {
        let v = tokens.next_vertex()?;
        let w = tokens.next_vertex()?;
        trace!(v, w, line = tokens.line_no, "edge");
        graph.add_edge(v, w)?;
    }

    if tokens.next_token()?.is_some() {
        warn!(
            line = tokens.line_no,
            "ignoring trailing tokens after {} declared edges", edge_count
        );
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge list loaded"
    );
    Ok(graph)
}

/// [`read_edge_list`] over an in-memory string.
pub fn parse_edge_list(text: &str) -> Result<Graph> {
    read_edge_list(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let g = parse_edge_list("4\n4\n0 1\n1 2\n2 3\n3 0\n").unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);
        let targets: Vec<Vertex> = g.neighbors(0).unwrap().iter().map(|e| e.w).collect();
        assert_eq!(targets, vec![1, 3]);
    }

    #[test]
    fn test_parse_free_layout_and_comments() {
        let text = "# a path\n3 2  # header\n0 1 1\n2\n";
        let g = parse_edge_list(text).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.degree(1).unwrap(), 2);
    }

    #[test]
    fn test_parse_no_edges() {
        let g = parse_edge_list("5 0").unwrap();
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_parse_truncated() {
        let err = parse_edge_list("3\n2\n0 1\n1\n").unwrap_err();
        match err {
            GraphError::Parse { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("unexpected end of input"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_empty_input() {
        let err = parse_edge_list("").unwrap_err();
        assert!(matches!(err, GraphError::Parse { .. }));
    }

    #[test]
    fn test_parse_not_a_number() {
        let err = parse_edge_list("3\n1\n0 x\n").unwrap_err();
        match err {
            GraphError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("'x'"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_negative_vertex_count() {
        let err = parse_edge_list("-2\n0\n").unwrap_err();
        assert!(matches!(err, GraphError::NegativeVertexCount(-2)));
    }

    #[test]
    fn test_parse_vertex_count_too_large() {
        for text in ["9223372036854775807 0", "100000000000 0", "# big\n268435457\n0\n"] {
            match parse_edge_list(text).unwrap_err() {
                GraphError::Parse { message, .. } => {
                    assert!(message.contains("exceeds the supported maximum"));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
        let err = parse_edge_list("# big\n268435457\n0\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_parse_negative_edge_count() {
        let err = parse_edge_list("2\n-1\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_parse_negative_vertex() {
        let err = parse_edge_list("2\n1\n0 -1\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_parse_vertex_out_of_range() {
        let err = parse_edge_list("2\n1\n0 2\n").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, GraphError::VertexOutOfRange { vertex: 2, vertex_count: 2 }));
    }

    #[test]
    fn test_parse_trailing_tokens_ignored() {
        let g = parse_edge_list("3 1 0 1 1 2").unwrap();
        assert_eq!(g.edge_count(), 1);
    }
}
