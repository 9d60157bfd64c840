//! Command-line interface for the asciigraph utility
//!
//! Loads a graph from DOT text or the built-in sample, then draws it, dumps
//! its matrix, answers shortest-path queries or runs the interactive loop.

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::colorizer::colorize_diagram;
use crate::interactive::InteractiveSession;
use asciigraph::core::logging::init_logging;
use asciigraph::plugins::ascii::DiagramRenderer;
use asciigraph::plugins::Orchestrator;
use asciigraph::{sample_graph, CharacterSet, Graph, PathOutcome};

/// asciigraph - Draw undirected graphs as ASCII lane diagrams
#[derive(Parser)]
#[command(name = "asciigraph")]
#[command(about = "Draw undirected graphs as ASCII diagrams and find shortest paths")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Where the graph comes from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphSource {
    /// DOT file to read (use - for stdin)
    #[arg(short, long, conflicts_with = "dummy")]
    pub input: Option<PathBuf>,

    /// Use the built-in ten-vertex sample graph
    #[arg(short, long)]
    pub dummy: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw the graph as a lane diagram
    Ascii {
        #[command(flatten)]
        source: GraphSource,

        /// Output file for the diagram (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Character set to use for rendering output
        #[arg(long, value_enum, default_value_t = StyleChoice::Ascii)]
        style: StyleChoice,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Print the adjacency matrix
    Matrix {
        #[command(flatten)]
        source: GraphSource,

        /// Output file for the matrix (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Find the shortest path between two vertices
    Path {
        #[command(flatten)]
        source: GraphSource,

        /// Start vertex
        #[arg(long)]
        from: char,

        /// Goal vertex
        #[arg(long)]
        to: char,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read commands from stdin against the loaded graph
    Interactive {
        #[command(flatten)]
        source: GraphSource,

        /// Character set for print_ascii
        #[arg(long, value_enum, default_value_t = StyleChoice::Ascii)]
        style: StyleChoice,
    },

    /// Check that the input is a valid graph
    Validate {
        #[command(flatten)]
        source: GraphSource,
    },
}

/// Supported output character sets
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StyleChoice {
    Ascii,
    Unicode,
}

impl From<StyleChoice> for CharacterSet {
    fn from(value: StyleChoice) -> Self {
        match value {
            StyleChoice::Ascii => CharacterSet::Ascii,
            StyleChoice::Unicode => CharacterSet::Unicode,
        }
    }
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// JSON body of `path --json`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PathReport {
    pub from: char,
    pub to: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<char>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PathReport {
    pub fn new(from: char, to: char, outcome: &PathOutcome) -> Self {
        match outcome {
            PathOutcome::Found(path) => Self {
                from,
                to,
                path: Some(path.clone()),
                error: None,
            },
            _ => Self {
                from,
                to,
                path: None,
                error: Some(outcome.to_string()),
            },
        }
    }
}

/// Main CLI application
pub struct AsciiGraphApp {
    orchestrator: Orchestrator,
}

impl AsciiGraphApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_style(CharacterSet::default())
    }

    /// Create a new application instance drawing with `style`
    pub fn with_style(style: CharacterSet) -> Self {
        let mut orchestrator = Orchestrator::with_dot_plugins_and_style(style);
        orchestrator.register_default_detectors();
        Self { orchestrator }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over the flags
        let log_level_str = std::env::var("ASCIIGRAPH_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("ASCIIGRAPH_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("asciigraph v{}", env!("CARGO_PKG_VERSION"));
        }

        let mut stdout = io::stdout();
        match cli.command {
            Commands::Ascii {
                source,
                output,
                style,
                color,
            } => self.ascii_command(&source, output, style, color, cli.verbose),
            Commands::Matrix { source, output } => {
                self.matrix_command(&source, output, cli.verbose)
            }
            Commands::Path {
                source,
                from,
                to,
                json,
            } => self.path_command(&source, from, to, json, &mut stdout),
            Commands::Interactive { source, style } => {
                let graph = self.load_graph(&source, cli.verbose)?;
                let renderer = DiagramRenderer::with_style(style.into());
                InteractiveSession::new(&graph, renderer).run(io::stdin().lock(), &mut stdout)
            }
            Commands::Validate { source } => {
                self.validate_command(&source, cli.verbose, &mut stdout)
            }
        }
    }

    /// Build the graph named by `source`
    pub fn load_graph(&self, source: &GraphSource, verbose: bool) -> Result<Graph> {
        if source.dummy {
            debug!("Using sample graph");
            return Ok(sample_graph());
        }

        let content = self.read_input(source.input.clone())?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }
        let graph = self.orchestrator.parse(&content)?;
        info!(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            "Graph loaded"
        );
        Ok(graph)
    }

    /// Handle the ascii command
    fn ascii_command(
        &mut self,
        source: &GraphSource,
        output: Option<PathBuf>,
        style: StyleChoice,
        color: ColorChoice,
        verbose: bool,
    ) -> Result<()> {
        *self = Self::with_style(style.into());

        let graph = self.load_graph(source, verbose)?;
        if graph.is_empty() {
            return Ok(());
        }

        let diagram = self.orchestrator.render_diagram(&graph)?;
        if verbose {
            eprintln!("Rendered {} vertices", graph.vertex_count());
        }

        let final_output = if self.should_colorize(&output, color) {
            colorize_diagram(&diagram)
        } else {
            diagram
        };
        self.write_output(output, &final_output)
    }

    /// Handle the matrix command
    fn matrix_command(
        &self,
        source: &GraphSource,
        output: Option<PathBuf>,
        verbose: bool,
    ) -> Result<()> {
        let graph = self.load_graph(source, verbose)?;
        if graph.is_empty() {
            return Ok(());
        }
        let matrix = self.orchestrator.render_matrix(&graph)?;
        self.write_output(output, &matrix)
    }

    /// Handle the path command
    fn path_command<W: Write>(
        &self,
        source: &GraphSource,
        from: char,
        to: char,
        json: bool,
        out: &mut W,
    ) -> Result<()> {
        let graph = self.load_graph(source, false)?;
        let outcome = graph.shortest_path(from, to);
        debug!(found = outcome.is_found(), "Path query answered");

        if json {
            let report = PathReport::new(from, to, &outcome);
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(out, "Shortest path from {} to {}:", from, to)?;
            writeln!(out, "{}", outcome)?;
        }
        Ok(())
    }

    /// Handle the validate command
    fn validate_command<W: Write>(
        &self,
        source: &GraphSource,
        verbose: bool,
        out: &mut W,
    ) -> Result<()> {
        match self.load_graph(source, verbose) {
            Ok(graph) => {
                writeln!(
                    out,
                    "✓ Valid graph: {} vertices, {} edges",
                    graph.vertex_count(),
                    graph.edge_count()
                )?;
                Ok(())
            }
            Err(e) => {
                writeln!(out, "✗ Invalid graph: {}", e)?;
                Err(e)
            }
        }
    }

    /// Determine if we should colorize the output based on color choice and output destination
    fn should_colorize(&self, output: &Option<PathBuf>, color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                match output {
                    None => crossterm::tty::IsTty::is_tty(&std::io::stdout()),
                    Some(ref p) if p.to_str() == Some("-") => {
                        crossterm::tty::IsTty::is_tty(&std::io::stdout())
                    }
                    Some(_) => false,
                }
            }
        }
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, &stdout_content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", stdout_content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}

impl Default for AsciiGraphApp {
    fn default() -> Self {
        Self::new()
    }
}
