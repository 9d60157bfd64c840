//! asciigraph CLI - Draw undirected graphs as ASCII lane diagrams

mod cli;
mod colorizer;
mod interactive;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    // Logging is initialized inside run() from the flags and environment
    let mut app = cli::AsciiGraphApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
