//! Subcommand execution and output formatting

use std::io::Write;

use itertools::Itertools;
use tracing::{debug, info};

use crate::cli::Command;
use crate::error::CliError;
use crate::input::Manual;

/// Outcome of checking one update against the rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Already in an order the rules allow
    Valid(Vec<String>),
    /// Reordered to satisfy the rules
    Amended(Vec<String>),
}

impl Verdict {
    pub fn pages(&self) -> &[String] {
        match self {
            Verdict::Valid(pages) | Verdict::Amended(pages) => pages,
        }
    }
}

/// Sum of middle pages over valid and amended updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksums {
    pub valid: i64,
    pub amended: i64,
}

/// Run `command` against the parsed input, writing results to `out`
pub fn execute<W: Write>(command: Command, manual: &Manual, out: &mut W) -> Result<(), CliError> {
    debug!(?command, "executing");
    match command {
        Command::Dot => writeln!(out, "{}", manual.rules.dot())?,
        Command::Mermaid => writeln!(out, "{}", manual.rules.mermaid())?,
        Command::Validate => {
            if manual.rules.has_cycle() {
                return Err(CliError::Cyclic);
            }
            writeln!(out, "rules are acyclic")?;
        }
        Command::Topo => writeln!(out, "{}", manual.rules.topo()?.iter().join(" "))?,
        Command::Check => {
            let verdicts = check(manual)?;
            for verdict in &verdicts {
                let kind = match verdict {
                    Verdict::Valid(_) => "valid",
                    Verdict::Amended(_) => "amended",
                };
                writeln!(out, "{} {}", kind, verdict.pages().iter().join(","))?;
            }
            if let Some(sums) = checksums(&verdicts) {
                writeln!(out, "valid checksum: {}", sums.valid)?;
                writeln!(out, "amended checksum: {}", sums.amended)?;
            }
        }
    }
    Ok(())
}

/// Classify every update, repairing the ones that break a rule
pub fn check(manual: &Manual) -> Result<Vec<Verdict>, CliError> {
    let verdicts = manual
        .updates
        .iter()
        .map(|update| {
            if manual.rules.is_sorted_dumb(update) {
                Ok(Verdict::Valid(update.clone()))
            } else {
                manual.rules.sort_dumb(update).map(Verdict::Amended)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let amended = verdicts
        .iter()
        .filter(|v| matches!(v, Verdict::Amended(_)))
        .count();
    info!(updates = verdicts.len(), amended, "checked updates");
    Ok(verdicts)
}

/// Day 5 answers; `None` when some middle page is not an integer or a sum
/// leaves `i64` range
pub fn checksums(verdicts: &[Verdict]) -> Option<Checksums> {
    let mut sums = Checksums {
        valid: 0,
        amended: 0,
    };
    for verdict in verdicts {
        let pages = verdict.pages();
        let Some(middle) = pages.get(pages.len() / 2) else {
            continue;
        };
        let value: i64 = middle.parse().ok()?;
        let sum = match verdict {
            Verdict::Valid(_) => &mut sums.valid,
            Verdict::Amended(_) => &mut sums.amended,
        };
        *sum = sum.checked_add(value)?;
    }
    Some(sums)
}
