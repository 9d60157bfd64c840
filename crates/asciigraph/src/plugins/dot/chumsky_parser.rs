//! DOT subset parser using chumsky
//!
//! Parses a single header line or a single statement (without its trailing
//! `;`) into AST values. Line splitting and validation live in the
//! [`DotParser`](super::DotParser).

use chumsky::prelude::*;

use crate::core::chumsky_utils::{
    inline_whitespace, inline_whitespace_required, line_comment, vertex_name, ParseExtra,
};

/// Graph declaration line, e.g. `graph name {`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub directed: bool,
    pub name: Option<String>,
}

/// A chain of vertices joined by `--`; a lone vertex is a chain of one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub vertices: Vec<char>,
}

impl Statement {
    /// Consecutive vertex pairs of the chain
    pub fn links(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// First syntax error found, with its byte offset into the parsed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub offset: usize,
    pub message: String,
}

/// Chumsky-based DOT parser
pub struct ChumskyDotParser;

impl ChumskyDotParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a graph declaration header
    pub fn parse_header(&self, input: &str) -> Result<Header, SyntaxError> {
        Self::header_parser()
            .then_ignore(end())
            .parse(input)
            .into_result()
            .map_err(Self::first_error)
    }

    /// Parse one statement
    pub fn parse_statement(&self, input: &str) -> Result<Statement, SyntaxError> {
        Self::statement_parser()
            .then_ignore(end())
            .parse(input)
            .into_result()
            .map_err(Self::first_error)
    }

    /// True for a `//` comment line (leading whitespace allowed)
    pub fn is_comment(&self, input: &str) -> bool {
        inline_whitespace()
            .ignore_then(line_comment())
            .then_ignore(end())
            .parse(input)
            .into_result()
            .is_ok()
    }

    fn first_error(errors: Vec<Rich<'_, char>>) -> SyntaxError {
        match errors.into_iter().next() {
            Some(error) => SyntaxError {
                offset: error.span().start,
                message: error.to_string(),
            },
            None => SyntaxError {
                offset: 0,
                message: "invalid syntax".to_string(),
            },
        }
    }

    fn header_parser<'src>() -> impl Parser<'src, &'src str, Header, ParseExtra<'src>> + Clone {
        let keyword = just("digraph").to(true).or(just("graph").to(false));
        let name = vertex_name().repeated().at_least(1).collect::<String>();

        inline_whitespace()
            .ignore_then(keyword)
            .then_ignore(inline_whitespace_required())
            .then(name.then_ignore(inline_whitespace()).or_not())
            .then_ignore(just('{'))
            .then_ignore(inline_whitespace())
            .map(|(directed, name)| Header { directed, name })
    }

    fn statement_parser<'src>() -> impl Parser<'src, &'src str, Statement, ParseExtra<'src>> + Clone
    {
        let link = just("--")
            .padded_by(inline_whitespace())
            .ignore_then(vertex_name());

        inline_whitespace()
            .ignore_then(vertex_name())
            .then(link.repeated().collect::<Vec<char>>())
            .then_ignore(inline_whitespace())
            .map(|(first, rest)| {
                let mut vertices = Vec::with_capacity(rest.len() + 1);
                vertices.push(first);
                vertices.extend(rest);
                Statement { vertices }
            })
    }
}

impl Default for ChumskyDotParser {
    fn default() -> Self {
        Self::new()
    }
}
