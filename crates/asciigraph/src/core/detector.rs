//! Core detector trait for input format identification

/// Core trait for input format detectors
///
/// # Example
/// ```
/// use asciigraph::core::Detector;
/// use asciigraph::plugins::dot::DotDetector;
///
/// let detector = DotDetector::new();
/// assert!(detector.detect("graph g {\n a -- b;\n}"));
/// ```
pub trait Detector: Send + Sync {
    /// Detect if the input matches this format
    fn detect(&self, input: &str) -> bool;

    /// Get the confidence level of the detection (0.0 to 1.0)
    fn confidence(&self, input: &str) -> f64;

    /// Get the format name
    fn format_name(&self) -> &'static str;

    /// Get key patterns that this detector looks for
    fn patterns(&self) -> Vec<&'static str>;
}
