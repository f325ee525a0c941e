//! `talentrank config` commands

use crate::cli::{Cli, OutputFormat};
use talentrank_core::config::AppConfig;
use talentrank_core::error::{RankError, Result};

/// Write a config file with default values
pub fn init(cli: &Cli, force: bool) -> Result<()> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => AppConfig::default_path()?,
    };

    if path.exists() && !force {
        return Err(RankError::UsageError(format!(
            "config file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    AppConfig::default().save(&path)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "path": path.display().to_string() });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human | OutputFormat::Records => {
            if !cli.quiet {
                println!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}

/// Print the effective configuration
pub fn show(cli: &Cli, config: &AppConfig) -> Result<()> {
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Human | OutputFormat::Records => {
            let content = toml::to_string_pretty(config)
                .map_err(|e| RankError::Other(format!("failed to serialize config: {}", e)))?;
            print!("{}", content);
        }
    }
    Ok(())
}
