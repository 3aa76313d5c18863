//! Series Renamer CLI
//!
//! A command-line tool that proposes filenames and library folders for cataloged anime files.

use clap::Parser;
use series_renamer::cli::{
    args::{Cli, Commands},
    commands::{batch, config, rename},
};

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Rename {
            request,
            json,
            probe,
        } => {
            rename::rename(&request, config_path, json, probe)?;
        }

        Commands::Batch {
            path,
            output,
            probe,
        } => {
            batch::run(&path, output.as_deref(), config_path, probe)?;
        }

        Commands::Config => {
            config::show_config(config_path)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("series_renamer=debug")
    } else {
        EnvFilter::new("series_renamer=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
