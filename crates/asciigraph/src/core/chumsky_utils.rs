//! Shared chumsky parser utilities for graph descriptions

use chumsky::prelude::*;

/// Parser extra carrying rich errors with source spans
pub type ParseExtra<'src> = extra::Err<Rich<'src, char>>;

/// Parse inline whitespace only (spaces and tabs, no newlines).
pub fn inline_whitespace<'src>() -> impl Parser<'src, &'src str, (), ParseExtra<'src>> + Clone {
    one_of(" \t").repeated().ignored()
}

/// Parse required inline whitespace (at least one space or tab).
pub fn inline_whitespace_required<'src>() -> impl Parser<'src, &'src str, (), ParseExtra<'src>> + Clone {
    one_of(" \t").repeated().at_least(1).ignored()
}

/// Parse a `//` line comment up to the end of the line.
pub fn line_comment<'src>() -> impl Parser<'src, &'src str, (), ParseExtra<'src>> + Clone {
    just("//").ignore_then(none_of('\n').repeated()).ignored()
}

/// Parse a single-character vertex name (alphanumeric or `_`).
pub fn vertex_name<'src>() -> impl Parser<'src, &'src str, char, ParseExtra<'src>> + Clone {
    any().filter(|c: &char| c.is_alphanumeric() || *c == '_')
}
