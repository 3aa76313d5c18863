//! Batch command implementation.

use super::config::resolve_config;
use crate::core::batch;
use crate::core::renamer::Renamer;
use crate::services::ffprobe;
use crate::utils::fs::FsProbe;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Execute the batch command.
pub fn run(
    input: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
    probe: bool,
) -> Result<()> {
    println!("{}", "Proposing names...".bold().cyan());
    println!();

    let renamer = Renamer::new(resolve_config(config_path)?);
    let requests = batch::load_requests(input)?;

    let probe_streams = probe && ffprobe::is_installed();
    if probe && !probe_streams {
        tracing::warn!("ffprobe not found, stream languages unavailable");
    }

    let report = batch::run_batch(&renamer, requests, &FsProbe, probe_streams)?;

    println!("{}", "Batch Summary".bold().green());
    println!("  {} {}", "Proposed:".bold(), report.proposed_count());
    println!("  {} {}", "Skipped:".bold(), report.skipped_count());
    println!();

    let output_path = match output {
        Some(o) => o.to_path_buf(),
        None => batch::default_report_path(input),
    };
    batch::save_report(&report, &output_path)?;
    println!("{} {}", "Report saved to:".bold().green(), output_path.display());

    let skipped: Vec<_> = report
        .results
        .iter()
        .filter(|r| r.outcome.proposal().is_none())
        .collect();
    if !skipped.is_empty() {
        println!();
        println!("{}", "Skipped Files:".bold().yellow());
        for entry in skipped {
            println!("  {} - {}", entry.source.red(), entry.outcome.message());
        }
    }

    Ok(())
}
