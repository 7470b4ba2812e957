//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed rule or update line (1-based)
    #[error("Input error on line {line}: {message}")]
    Input { line: usize, message: String },

    /// Graph query failed
    #[error("Graph error: {0}")]
    Graph(#[from] aoc_graph::GraphError),

    /// Validation found a cycle among the rules
    #[error("Rules contain at least one cycle")]
    Cyclic,
}
