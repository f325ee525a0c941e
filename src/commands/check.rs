//! `talentrank check` command - semantic fit oracle connectivity

use crate::cli::{Cli, OutputFormat};
use talentrank_core::bail_usage;
use talentrank_core::config::AppConfig;
use talentrank_core::error::Result;
use talentrank_core::oracle::GeminiOracle;

/// Execute the check command
pub fn execute(cli: &Cli, config: &AppConfig) -> Result<()> {
    if cli.offline {
        bail_usage!("--offline disables the semantic fit oracle; nothing to check");
    }

    let oracle_config = config.oracle.clone().with_env_overrides();
    let oracle = GeminiOracle::from_config(&oracle_config)?;
    oracle.check_connection()?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "url": oracle_config.url,
                "enabled": oracle_config.enabled,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Semantic fit oracle connection successful");
            if !oracle_config.enabled && !cli.quiet {
                println!("Note: the oracle is disabled in config; ranking will not use it");
            }
        }
        OutputFormat::Records => {
            println!("C status=ok url={}", oracle_config.url);
        }
    }

    Ok(())
}
