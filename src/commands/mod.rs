//! CLI commands for talentrank

pub mod check;
pub mod config;
pub mod dispatch;
pub mod jobs;
pub mod profiles;
pub mod rank;
pub mod score;

use talentrank_core::config::AppConfig;
use talentrank_core::oracle::{GeminiOracle, NoopOracle, SemanticFitOracle};

use crate::cli::Cli;

/// Pick the oracle for this run.
///
/// Offline mode, a disabled oracle, or missing credentials all fall back
/// to [`NoopOracle`], which always answers 0.
pub fn build_oracle(cli: &Cli, config: &AppConfig) -> Box<dyn SemanticFitOracle> {
    if cli.offline || !config.oracle.enabled {
        tracing::debug!("semantic fit oracle disabled");
        return Box::new(NoopOracle);
    }

    match GeminiOracle::from_config(&config.oracle.clone().with_env_overrides()) {
        Ok(oracle) => Box::new(oracle),
        Err(e) => {
            tracing::warn!(error = %e, "semantic fit oracle unavailable, scoring without it");
            Box::new(NoopOracle)
        }
    }
}
