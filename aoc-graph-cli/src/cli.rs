//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// What to do with the loaded precedence rules
#[derive(Debug, Clone, Copy, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Print the rules as a Graphviz digraph
    Dot,
    /// Print the rules as a Mermaid flowchart
    Mermaid,
    /// Fail if the rules contain a cycle
    Validate,
    /// Print every page in topological order
    Topo,
    /// Check each update against the rules and repair the ones out of order
    Check,
}

/// Inspect Advent of Code page-ordering rules
#[derive(Parser, Debug)]
#[command(name = "aoc-graph-cli", about = "Inspect Advent of Code precedence graphs", version)]
pub struct Args {
    /// Read input from a file instead of stdin
    #[arg(short, long, global = true)]
    pub input_file: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommand_with_global_flags() {
        let args = Args::try_parse_from(["aoc-graph-cli", "check", "-v", "-i", "rules.txt"]).unwrap();
        assert_eq!(args.command, Command::Check);
        assert!(args.verbose);
        assert_eq!(args.input_file, Some(PathBuf::from("rules.txt")));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Args::try_parse_from(["aoc-graph-cli"]).is_err());
    }
}
