//! Interactive command loop
//!
//! Reads whitespace separated tokens and dispatches them against one graph.
//! Generic over the reader and writer so tests can drive it with byte
//! buffers.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, span, Level};

use asciigraph::core::{Graph, Renderer};
use asciigraph::plugins::ascii::{DiagramRenderer, MatrixRenderer};

const PROMPT: &str = "Enter command: (l for list of commands)";

const COMMAND_TABLE: &str = "shortest_path (sp)\t\t|\tprint_ascii (p)\n\
                             print_matrix (m)\t\t|\tlist (l)\n\
                             quit (q)";

/// Commands understood by the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    ShortestPath,
    PrintAscii,
    PrintMatrix,
    Quit,
}

impl Command {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "list" | "l" => Some(Command::List),
            "shortest_path" | "sp" => Some(Command::ShortestPath),
            "print_ascii" | "p" => Some(Command::PrintAscii),
            "print_matrix" | "m" => Some(Command::PrintMatrix),
            "quit" | "q" | "end" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Splits a reader into whitespace separated tokens across lines
struct Tokens<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    /// Next token, or `None` at end of input
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line.split_whitespace().rev().map(str::to_string).collect();
        }
    }
}

/// Interactive session over one graph
pub struct InteractiveSession<'g> {
    graph: &'g Graph,
    diagram: DiagramRenderer,
    matrix: MatrixRenderer,
}

impl<'g> InteractiveSession<'g> {
    pub fn new(graph: &'g Graph, diagram: DiagramRenderer) -> Self {
        Self {
            graph,
            diagram,
            matrix: MatrixRenderer::new(),
        }
    }

    /// Run until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<()> {
        let session_span = span!(
            Level::INFO,
            "interactive",
            vertex_count = self.graph.vertex_count()
        );
        let _enter = session_span.enter();

        let mut tokens = Tokens::new(input);
        loop {
            writeln!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(token) = tokens.next_token()? else {
                debug!("End of input");
                break;
            };
            debug!(command = %token, "Read command");

            match Command::from_token(&token) {
                Some(Command::Quit) => break,
                Some(Command::List) => writeln!(output, "{}", COMMAND_TABLE)?,
                Some(Command::ShortestPath) => {
                    if !self.shortest_path(&mut tokens, output)? {
                        break;
                    }
                }
                Some(Command::PrintAscii) => {
                    Self::print_lines(self.diagram.render(self.graph)?, output)?
                }
                Some(Command::PrintMatrix) => {
                    Self::print_lines(self.matrix.render(self.graph)?, output)?
                }
                None => writeln!(output, "Unknown command '{}', try 'l'", token)?,
            }
        }

        info!("Interactive session finished");
        Ok(())
    }

    /// Prompt for both endpoints and print the path
    ///
    /// Returns false if input ended before both were read.
    fn shortest_path<R: BufRead, W: Write>(
        &self,
        tokens: &mut Tokens<R>,
        output: &mut W,
    ) -> Result<bool> {
        let Some(from) = Self::prompt_vertex("From: ", tokens, output)? else {
            return Ok(false);
        };
        let Some(to) = Self::prompt_vertex("To: ", tokens, output)? else {
            return Ok(false);
        };

        let outcome = self.graph.shortest_path(from, to);
        writeln!(output, "Shortest path from {} to {}:", from, to)?;
        writeln!(output, "{}", outcome)?;
        Ok(true)
    }

    /// First character of the next token
    fn prompt_vertex<R: BufRead, W: Write>(
        prompt: &str,
        tokens: &mut Tokens<R>,
        output: &mut W,
    ) -> Result<Option<char>> {
        write!(output, "{}", prompt)?;
        output.flush()?;
        Ok(tokens.next_token()?.and_then(|token| token.chars().next()))
    }

    fn print_lines<W: Write>(lines: Vec<String>, output: &mut W) -> Result<()> {
        for line in lines {
            writeln!(output, "{}", line)?;
        }
        Ok(())
    }
}
