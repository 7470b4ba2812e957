//! Loading and parsing page-ordering input
//!
//! The format is the 2024 day 5 puzzle input: `before|after` rule lines, one
//! blank line, then comma-separated updates. The update section is optional.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{anyhow, bail};
use aoc_graph::Dag;
use tracing::debug;

use crate::error::CliError;

/// Parsed rules plus the updates to check against them
#[derive(Debug, Default)]
pub struct Manual {
    pub rules: Dag<String>,
    pub updates: Vec<Vec<String>>,
}

/// Read the whole input from `path`, or from stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => {
            debug!(file = %path.display(), "reading input from file");
            Ok(fs::read_to_string(path)?)
        }
        None => {
            debug!("no input file provided, reading stdin");
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Parse rules and updates, reporting the first malformed line
pub fn parse(input: &str) -> Result<Manual, CliError> {
    let mut manual = Manual::default();
    let mut in_rules = true;
    let mut seen_content = false;

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        let parsed = if line.is_empty() {
            if seen_content {
                in_rules = false;
            }
            Ok(())
        } else if in_rules {
            parse_rule(line).map(|(before, after)| manual.rules.add_edge(before, after))
        } else {
            parse_update(line).map(|update| manual.updates.push(update))
        };
        seen_content |= !line.is_empty();

        parsed.map_err(|e| CliError::Input {
            line: idx + 1,
            message: e.to_string(),
        })?;
    }

    debug!(
        rules = manual.rules.edge_count(),
        pages = manual.rules.node_count(),
        updates = manual.updates.len(),
        "parsed input"
    );
    Ok(manual)
}

fn parse_rule(line: &str) -> anyhow::Result<(String, String)> {
    let (before, after) = line
        .split_once('|')
        .ok_or_else(|| anyhow!("rule must look like `before|after`, got {line:?}"))?;
    Ok((page(before)?, page(after)?))
}

fn parse_update(line: &str) -> anyhow::Result<Vec<String>> {
    line.split(',').map(page).collect()
}

fn page(text: &str) -> anyhow::Result<String> {
    let label = text.trim();
    if label.is_empty() {
        bail!("page label must not be empty");
    }
    Ok(label.to_string())
}
