//! DOT format detector

use tracing::trace;

use super::chumsky_parser::ChumskyDotParser;
use crate::core::Detector;

/// Recognizes undirected DOT documents by their `graph ... {` header
pub struct DotDetector {
    parser: ChumskyDotParser,
}

impl DotDetector {
    pub fn new() -> Self {
        Self {
            parser: ChumskyDotParser::new(),
        }
    }

    /// First line that is neither blank nor a comment
    fn first_content_line<'a>(&self, input: &'a str) -> Option<&'a str> {
        input
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !self.parser.is_comment(line))
    }
}

impl Default for DotDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for DotDetector {
    fn detect(&self, input: &str) -> bool {
        self.confidence(input) >= 0.5
    }

    fn confidence(&self, input: &str) -> f64 {
        let header = self
            .first_content_line(input)
            .and_then(|line| self.parser.parse_header(line).ok());

        let mut score = match header {
            Some(header) if !header.directed => 0.6,
            Some(_) => 0.2,
            None => 0.0,
        };
        if input.contains("--") {
            score += 0.2;
        }
        if input.lines().any(|line| line.trim() == "}") {
            score += 0.2;
        }

        trace!(score, "DOT detection confidence");
        f64::min(score, 1.0)
    }

    fn format_name(&self) -> &'static str {
        "dot"
    }

    fn patterns(&self) -> Vec<&'static str> {
        vec!["graph", "{", "--", "}"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_undirected_graph() {
        let detector = DotDetector::new();
        let input = "// demo\ngraph test {\n  a -- b;\n}\n";
        assert!(detector.detect(input));
        assert!((detector.confidence(input) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_header_alone_is_enough() {
        let detector = DotDetector::new();
        assert!(detector.detect("graph g {"));
    }

    #[test]
    fn test_rejects_digraph_and_text() {
        let detector = DotDetector::new();
        assert!(!detector.detect("digraph g {\n a -> b;\n}"));
        assert!(!detector.detect("just some text"));
        assert_eq!(detector.confidence(""), 0.0);
    }

    #[test]
    fn test_metadata() {
        let detector = DotDetector::new();
        assert_eq!(detector.format_name(), "dot");
        assert!(detector.patterns().contains(&"--"));
    }
}
