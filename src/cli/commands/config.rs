//! Config command implementation.

use crate::models::config::{self, RenamerConfig};
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Load the explicit config file, or the default one when none is given.
pub fn resolve_config(path: Option<&Path>) -> Result<RenamerConfig> {
    match path {
        Some(p) => config::load_config_from(p),
        None => Ok(config::load_config()),
    }
}

/// Print the effective configuration as TOML.
pub fn show_config(path: Option<&Path>) -> Result<()> {
    let config = resolve_config(path)?;

    let source = match path {
        Some(p) => p.display().to_string(),
        None => {
            let default = config::default_config_path();
            if default.exists() {
                default.display().to_string()
            } else {
                "built-in defaults".to_string()
            }
        }
    };

    println!("{} {}", "# Source:".bold(), source);
    let rendered = toml::to_string_pretty(&config)
        .map_err(|e| crate::Error::ConfigError(e.to_string()))?;
    println!("{}", rendered);

    Ok(())
}
