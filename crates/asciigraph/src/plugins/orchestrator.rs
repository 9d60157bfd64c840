//! Plugin orchestrator for coordinating the processing pipeline
//!
//! The orchestrator manages the flow of data through all plugins:
//! Detector → Parser → Graph → Layout → Renderer

use anyhow::Result;
use std::collections::HashMap;
use tracing::{debug, info, span, trace, warn, Level};

use crate::core::{CharacterSet, Detector, Graph, GraphError, Parser, Renderer};
use crate::plugins::ascii::{DiagramRenderer, MatrixRenderer};
use crate::plugins::dot::{DotDetector, DotParser};

/// Plugin orchestrator that coordinates the entire pipeline
///
/// The orchestrator wires detectors, the parser and the renderers together
/// so callers can run a full pipeline without handling each trait manually.
pub struct Orchestrator {
    detectors: HashMap<String, Box<dyn Detector>>,
    dot_parser: Option<DotParser>,
    diagram_renderer: Option<DiagramRenderer>,
    matrix_renderer: Option<MatrixRenderer>,
}

impl Orchestrator {
    /// Create a new empty orchestrator
    pub fn new() -> Self {
        Self {
            detectors: HashMap::new(),
            dot_parser: None,
            diagram_renderer: None,
            matrix_renderer: None,
        }
    }

    /// Create an orchestrator with the DOT parser and both renderers
    pub fn with_dot_plugins() -> Self {
        Self::with_dot_plugins_and_style(CharacterSet::default())
    }

    /// Create an orchestrator with the DOT plugins and a diagram style
    pub fn with_dot_plugins_and_style(style: CharacterSet) -> Self {
        Self {
            detectors: HashMap::new(),
            dot_parser: Some(DotParser::new()),
            diagram_renderer: Some(DiagramRenderer::with_style(style)),
            matrix_renderer: Some(MatrixRenderer::new()),
        }
    }

    /// Register a detector plugin
    pub fn register_detector(&mut self, name: String, detector: Box<dyn Detector>) {
        self.detectors.insert(name, detector);
    }

    /// Register every built-in detector
    pub fn register_default_detectors(&mut self) {
        self.register_detector("dot".to_string(), Box::new(DotDetector::new()));
    }

    /// Registered detector names, sorted
    pub fn get_detectors(&self) -> Vec<String> {
        let mut names: Vec<String> = self.detectors.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if the parser and renderers are available
    pub fn has_dot_plugins(&self) -> bool {
        self.dot_parser.is_some()
            && self.diagram_renderer.is_some()
            && self.matrix_renderer.is_some()
    }

    /// Detect the input format
    ///
    /// Among the detectors that accept the input, the most confident one
    /// wins; ties go to the alphabetically first name.
    pub fn detect_format(&self, input: &str) -> Result<String> {
        let detect_span = span!(Level::INFO, "detect_format", input_len = input.len());
        let _enter = detect_span.enter();

        trace!("Starting format detection");

        let mut best: Option<(&str, f64)> = None;
        for name in self.get_detectors() {
            let Some((name, detector)) = self.detectors.get_key_value(&name) else {
                continue;
            };
            let confidence = detector.confidence(input);
            trace!(detector = %name, confidence, "Checking detector");
            if !detector.detect(input) {
                continue;
            }
            if best.map_or(true, |(_, current)| confidence > current) {
                best = Some((name.as_str(), confidence));
            }
        }

        match best {
            Some((name, confidence)) => {
                info!(detector = name, confidence, "Detected input format");
                Ok(name.to_string())
            }
            None => {
                warn!("No suitable detector found for input");
                Err(GraphError::detection_error("No suitable detector found for input").into())
            }
        }
    }

    /// Parse DOT input into a new graph (skip detection)
    pub fn parse(&self, input: &str) -> Result<Graph> {
        let parse_span = span!(Level::DEBUG, "pipeline_parse");
        let _enter = parse_span.enter();

        let parser = self
            .dot_parser
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No DOT parser available"))?;

        let mut graph = Graph::new();
        parser.parse(input, &mut graph)?;
        debug!(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            "Parsing completed"
        );
        Ok(graph)
    }

    /// Detect, parse and draw the diagram
    pub fn process(&self, input: &str) -> Result<String> {
        let process_span = span!(Level::INFO, "process_diagram", input_len = input.len());
        let _enter = process_span.enter();

        info!("Starting diagram pipeline");
        let graph = self.parse_detected(input)?;
        let output = self.render_diagram(&graph)?;
        info!("Pipeline completed successfully");
        Ok(output)
    }

    /// Detect, parse and dump the adjacency matrix
    pub fn process_matrix(&self, input: &str) -> Result<String> {
        let process_span = span!(Level::INFO, "process_matrix", input_len = input.len());
        let _enter = process_span.enter();

        info!("Starting matrix pipeline");
        let graph = self.parse_detected(input)?;
        let output = self.render_matrix(&graph)?;
        info!("Pipeline completed successfully");
        Ok(output)
    }

    /// Draw an already built graph
    pub fn render_diagram(&self, graph: &Graph) -> Result<String> {
        let render_span = span!(Level::DEBUG, "pipeline_render");
        let _enter = render_span.enter();

        let renderer = self
            .diagram_renderer
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No diagram renderer available"))?;
        let lines = renderer.render(graph)?;
        debug!(line_count = lines.len(), "Rendering completed");
        Ok(lines.join("\n"))
    }

    /// Dump an already built graph as a matrix
    pub fn render_matrix(&self, graph: &Graph) -> Result<String> {
        let renderer = self
            .matrix_renderer
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No matrix renderer available"))?;
        Ok(renderer.render(graph)?.join("\n"))
    }

    fn parse_detected(&self, input: &str) -> Result<Graph> {
        let format = self.detect_format(input)?;
        debug!(format = %format, "Input format detected");
        if format != "dot" {
            warn!(format = %format, "Unsupported input format");
            return Err(anyhow::anyhow!("Only DOT input is currently supported"));
        }
        self.parse(input)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
