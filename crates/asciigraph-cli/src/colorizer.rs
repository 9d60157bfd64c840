//! Terminal colorization for diagram output
//!
//! Applies ANSI escape codes to diagram elements using crossterm.

use crossterm::style::{Color, Stylize};

/// Colorize a rendered diagram
///
/// The first line is the vertex row: letters are bold, connectors cyan.
/// Below it:
/// - Terminals (`O`, `●`): Green
/// - Junctions (`+`, `┼`): Yellow
/// - Strokes (`-`, `|`, `─`, `│`): Cyan
pub fn colorize_diagram(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 2);

    for (index, line) in input.lines().enumerate() {
        for c in line.chars() {
            let colored = if index == 0 {
                match c {
                    '-' | '─' => format!("{}", c.to_string().with(Color::Cyan)),
                    ' ' => c.to_string(),
                    _ => format!("{}", c.to_string().bold()),
                }
            } else {
                match c {
                    'O' | '●' => format!("{}", c.to_string().with(Color::Green)),
                    '+' | '┼' => format!("{}", c.to_string().with(Color::Yellow)),
                    '-' | '|' | '─' | '│' => format!("{}", c.to_string().with(Color::Cyan)),
                    _ => c.to_string(),
                }
            };
            result.push_str(&colored);
        }
        result.push('\n');
    }

    // Remove trailing newline to match input format
    if !input.ends_with('\n') && result.ends_with('\n') {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(input: &str) -> String {
        let mut out = String::new();
        let mut chars = input.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for next in chars.by_ref() {
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_colorize_preserves_content() {
        let input = "A----B    C\n|         |\nO---------O";
        let output = colorize_diagram(input);
        assert!(output.contains("\x1b["));
        assert_eq!(strip_ansi(&output), input);
    }

    #[test]
    fn test_vertex_letters_are_bold() {
        let output = colorize_diagram("O");
        assert_eq!(output, format!("{}", "O".bold()));
    }

    #[test]
    fn test_terminal_below_header_is_green() {
        let output = colorize_diagram("O\nO");
        assert!(output.ends_with(&format!("{}", "O".with(Color::Green))));
    }

    #[test]
    fn test_no_trailing_newline() {
        let output = colorize_diagram("A    B");
        assert!(!output.ends_with('\n'));
    }
}
