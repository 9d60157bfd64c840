//! DOT subset parser
//!
//! Accepts undirected single-character graphs of the form
//!
//! ```text
//! // optional comments
//! graph name {
//!         a -- b -- c;
//!         b -- d; e;
//! }
//! ```
//!
//! The whole document is validated into a [`DotDocument`] before the graph
//! is touched, so a rejected document never leaves a half-built graph.

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};
use unicode_width::UnicodeWidthChar;

use super::chumsky_parser::{ChumskyDotParser, Header};
use crate::core::{Graph, GraphError, Parser, VertexIndex};

/// Validated content of a DOT document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotDocument {
    pub name: Option<String>,
    /// Vertices in order of first appearance
    pub vertices: Vec<char>,
    /// Index pairs in statement order, one per `--`
    pub links: Vec<(VertexIndex, VertexIndex)>,
}

impl DotDocument {
    /// Populate `graph` with this document's vertices and links
    pub fn apply(&self, graph: &mut Graph) -> Result<(), GraphError> {
        let offset = graph.vertex_count();
        for &vertex in &self.vertices {
            graph.create_vertex(vertex);
        }
        for &(a, b) in &self.links {
            graph.link(offset + a, offset + b)?;
        }
        Ok(())
    }

    fn index_of(&mut self, vertex: char) -> VertexIndex {
        match self.vertices.iter().position(|&v| v == vertex) {
            Some(index) => index,
            None => {
                self.vertices.push(vertex);
                self.vertices.len() - 1
            }
        }
    }
}

enum Section {
    Header,
    Body,
    Closed,
}

/// DOT subset parser
pub struct DotParser {
    syntax: ChumskyDotParser,
}

impl DotParser {
    pub fn new() -> Self {
        Self {
            syntax: ChumskyDotParser::new(),
        }
    }

    /// Validate `input` without touching any graph
    pub fn parse_document(&self, input: &str) -> Result<DotDocument, GraphError> {
        let mut document = DotDocument::default();
        let mut section = Section::Header;
        let mut last_line = 0;

        for (index, line) in input.lines().enumerate() {
            let line_no = index + 1;
            last_line = line_no;
            let trimmed = line.trim();
            if trimmed.is_empty() || self.syntax.is_comment(line) {
                continue;
            }

            match section {
                Section::Header => {
                    let header = self.parse_header(line, line_no)?;
                    document.name = header.name;
                    section = Section::Body;
                }
                Section::Body => {
                    if trimmed == "}" {
                        section = Section::Closed;
                        break;
                    }
                    self.parse_body_line(line, line_no, &mut document)?;
                }
                Section::Closed => break,
            }
        }

        match section {
            Section::Header => {
                return Err(GraphError::parse_error(
                    "missing graph header, expected `graph [name] {`",
                    1,
                    1,
                ))
            }
            Section::Body => {
                return Err(GraphError::parse_error(
                    "missing closing '}'",
                    last_line.max(1),
                    1,
                ))
            }
            Section::Closed => {}
        }

        if document.vertices.is_empty() {
            return Err(GraphError::parse_error(
                "graph declares no vertices, use single characters",
                last_line,
                1,
            ));
        }
        if document.links.is_empty() {
            return Err(GraphError::parse_error(
                "graph declares no links",
                last_line,
                1,
            ));
        }

        debug!(
            vertex_count = document.vertices.len(),
            link_count = document.links.len(),
            "Validated DOT document"
        );
        Ok(document)
    }

    fn parse_header(&self, line: &str, line_no: usize) -> Result<Header, GraphError> {
        let header = self.syntax.parse_header(line).map_err(|e| {
            GraphError::parse_error(
                format!("invalid graph header: {}", e.message),
                line_no,
                column_at(line, e.offset),
            )
        })?;
        if header.directed {
            return Err(GraphError::parse_error(
                "directed graphs are not supported, use `graph`",
                line_no,
                column_at(line, line.len() - line.trim_start().len()),
            ));
        }
        trace!(name = ?header.name, "Parsed header");
        Ok(header)
    }

    fn parse_body_line(
        &self,
        line: &str,
        line_no: usize,
        document: &mut DotDocument,
    ) -> Result<(), GraphError> {
        let content = line.trim_end();
        let Some(content) = content.strip_suffix(';') else {
            return Err(GraphError::parse_error(
                "statement must end with ';'",
                line_no,
                column_at(line, content.len()),
            ));
        };

        let mut offset = 0;
        for segment in content.split(';') {
            let segment_offset = offset;
            offset += segment.len() + 1;
            if segment.trim().is_empty() {
                continue;
            }

            let statement = self.syntax.parse_statement(segment).map_err(|e| {
                GraphError::parse_error(
                    e.message,
                    line_no,
                    column_at(line, segment_offset + e.offset),
                )
            })?;

            let statement_column =
                column_at(line, segment_offset + segment.len() - segment.trim_start().len());
            for &vertex in &statement.vertices {
                if vertex.width() != Some(1) {
                    return Err(GraphError::parse_error(
                        format!("vertex '{}' is not one column wide", vertex),
                        line_no,
                        statement_column,
                    ));
                }
                document.index_of(vertex);
            }
            for (a, b) in statement.links() {
                if a == b {
                    return Err(GraphError::parse_error(
                        format!("self-link '{} -- {}' is not allowed", a, b),
                        line_no,
                        statement_column,
                    ));
                }
                let link = (document.index_of(a), document.index_of(b));
                document.links.push(link);
            }
        }
        Ok(())
    }
}

/// 1-based character column of a byte offset in `line`
fn column_at(line: &str, byte_offset: usize) -> usize {
    let end = byte_offset.min(line.len());
    line.get(..end)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(end)
        + 1
}

impl Default for DotParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for DotParser {
    fn parse(&self, input: &str, graph: &mut Graph) -> Result<()> {
        let parse_span = span!(Level::INFO, "parse_dot", input_len = input.len());
        let _enter = parse_span.enter();

        let document = self.parse_document(input)?;
        document.apply(graph)?;

        info!(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            "DOT parsing completed"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "dot"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        input.contains("graph") && input.contains('{') && input.contains("--")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error(input: &str) -> (String, usize, usize) {
        match DotParser::new().parse_document(input).unwrap_err() {
            GraphError::ParseError {
                message,
                line,
                column,
            } => (message, line, column),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_chain_document() {
        let input = "// test comment\ngraph test {\n        a -- b -- c;\n        b -- c;\n}\n";
        let parser = DotParser::new();
        let mut graph = Graph::new();
        parser.parse(input, &mut graph).unwrap();

        assert_eq!(graph.vertices(), &['a', 'b', 'c']);
        assert!(graph.is_linked(0, 1));
        assert!(graph.is_linked(1, 2));
        assert!(!graph.is_linked(0, 2));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_document_records_links_in_order() {
        let input = "graph {\n\tc -- a;\n\ta -- b; d;\n}";
        let document = DotParser::new().parse_document(input).unwrap();
        assert_eq!(document.name, None);
        assert_eq!(document.vertices, vec!['c', 'a', 'b', 'd']);
        assert_eq!(document.links, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_dangling_link_rejected_without_mutation() {
        let input = "graph test {\n        a -- b --;\n        b -- c\n}\n";
        let mut graph = Graph::new();
        assert!(DotParser::new().parse(input, &mut graph).is_err());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_missing_semicolon() {
        let (message, line, column) = parse_error("graph g {\n  a -- b\n}");
        assert!(message.contains("';'"));
        assert_eq!(line, 2);
        assert_eq!(column, 9);
    }

    #[test]
    fn test_missing_closing_brace() {
        let (message, line, _) = parse_error("graph g {\n  a -- b;\n");
        assert!(message.contains("'}'"));
        assert_eq!(line, 2);
    }

    #[test]
    fn test_bad_header() {
        let (message, line, _) = parse_error("// c\nnot a graph\n}");
        assert!(message.contains("header"));
        assert_eq!(line, 2);
    }

    #[test]
    fn test_digraph_rejected() {
        let (message, line, column) = parse_error("digraph g {\n  a -- b;\n}");
        assert!(message.contains("directed"));
        assert_eq!((line, column), (1, 1));
    }

    #[test]
    fn test_multi_character_vertex_column() {
        let (_, line, column) = parse_error("graph g {\n  ab -- c;\n}");
        assert_eq!(line, 2);
        assert_eq!(column, 4);
    }

    #[test]
    fn test_self_link_rejected() {
        let (message, _, _) = parse_error("graph g {\n  a -- a;\n}");
        assert!(message.contains("self-link"));
    }

    #[test]
    fn test_no_links_rejected() {
        let (message, _, _) = parse_error("graph g {\n  a; b;\n}");
        assert!(message.contains("no links"));
    }

    #[test]
    fn test_empty_input_rejected() {
        let (message, line, column) = parse_error("");
        assert!(message.contains("header"));
        assert_eq!((line, column), (1, 1));
    }

    #[test]
    fn test_wide_vertex_rejected() {
        let (message, _, _) = parse_error("graph g {\n  中 -- a;\n}");
        assert!(message.contains("one column"));
    }

    #[test]
    fn test_apply_appends_to_existing_graph() {
        let mut graph = Graph::new();
        graph.create_vertex('z');
        let document = DotParser::new()
            .parse_document("graph {\n a -- b;\n}")
            .unwrap();
        document.apply(&mut graph).unwrap();
        assert_eq!(graph.vertices(), &['z', 'a', 'b']);
        assert!(graph.is_linked(1, 2));
        assert!(!graph.is_linked(0, 1));
    }

    #[test]
    fn test_parser_metadata() {
        let parser = DotParser::new();
        assert_eq!(parser.name(), "dot");
        assert!(parser.can_parse("graph g {\n a -- b;\n}"));
        assert!(!parser.can_parse("hello"));
    }
}
