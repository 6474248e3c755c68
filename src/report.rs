use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::common::Plan;
use crate::stat::Stats;

/// Stdout contract: the plan (or the failure line), then one line each
/// for the generated and expanded counters. The wording is parsed
/// downstream, so it stays byte-for-byte stable.
pub fn print_outcome(plan: Option<&Plan>, stats: &Stats) {
    match plan {
        None => println!("No plan found"),
        Some(plan) => {
            for action in plan {
                println!("{action}");
            }
        }
    }
    println!("{} our nodes generated...", stats.generated);
    println!("{} our nodes expanded...", stats.expanded);
}

/// Machine-readable result for the optional `--output` file.
#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub mode: String,
    pub solved: bool,
    pub plan: Vec<String>,
    pub cost: usize,
    pub generated: usize,
    pub expanded: usize,
}

impl RunRecord {
    pub fn new(mode: &str, plan: Option<&Plan>, stats: &Stats) -> Self {
        let actions: Vec<String> = plan
            .map(|p| p.iter().map(|a| a.label().to_string()).collect())
            .unwrap_or_default();
        RunRecord {
            mode: mode.to_string(),
            solved: plan.is_some(),
            cost: actions.len(),
            plan: actions,
            generated: stats.generated,
            expanded: stats.expanded,
        }
    }
}

pub fn write_record(path: &str, record: &RunRecord) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create output file {path:?}"))?;
    serde_json::to_writer_pretty(BufWriter::new(file), record)?;
    Ok(())
}
