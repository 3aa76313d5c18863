//! Rename command implementation.
//!
//! Proposes a filename and destination for one request. Nothing on disk
//! is renamed or moved.

use super::config::resolve_config;
use crate::core::batch;
use crate::core::renamer::Renamer;
use crate::models::proposal::RenameOutcome;
use crate::services::ffprobe;
use crate::utils::fs::FsProbe;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Execute the rename command.
pub fn rename(
    request_path: &Path,
    config_path: Option<&Path>,
    json: bool,
    probe: bool,
) -> Result<()> {
    let renamer = Renamer::new(resolve_config(config_path)?);
    let mut request = batch::load_request(request_path)?;

    if probe {
        if ffprobe::is_installed() {
            batch::fill_streams(&mut request);
        } else {
            tracing::warn!("ffprobe not found, stream languages unavailable");
        }
    }

    let outcome = renamer.outcome(&request, &FsProbe);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("  {} {}", "Source:".bold(), request.file.path.display());
    match &outcome {
        RenameOutcome::Proposed(proposal) => {
            println!("  {} {}", "Filename:".bold(), proposal.filename.green());
            println!("  {} {}", "Bucket:".bold(), proposal.destination.bucket);
            match &proposal.destination.root {
                Some(root) => println!("  {} {}", "Root:".bold(), root.location.cyan()),
                None => println!(
                    "  {} {} {}",
                    "Root:".bold(),
                    "none".yellow(),
                    format!("(no configured root for {})", proposal.destination.bucket_path)
                        .dimmed()
                ),
            }
            println!("  {} {}", "Folder:".bold(), proposal.destination.sub_path);
            for (lang, flags) in &proposal.languages {
                println!(
                    "  {} dub={} sub={}",
                    format!("[{}]", lang).bold(),
                    flags.has_dub,
                    flags.has_sub
                );
            }
        }
        RenameOutcome::Skipped { reason } => {
            println!("  {} {}", "Skipped:".bold().yellow(), reason.red());
        }
    }

    Ok(())
}
