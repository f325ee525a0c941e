//! Configuration for talentrank
//!
//! Weights, thresholds, oracle settings and extra job templates live in a
//! TOML file. Every field has a default, so a missing or partial file is
//! fine. Resolution order: an explicit path, then
//! `$TALENTRANK_CONFIG_DIR/config.toml`, then `<config dir>/talentrank/config.toml`.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{RankError, Result};
use crate::requirement::JobCatalog;

pub use types::{AppConfig, OracleConfig, RankingConfig, ScoringConfig, ScoringWeights};

const CONFIG_DIR: &str = "talentrank";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "TALENTRANK_CONFIG_DIR";

impl AppConfig {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RankError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RankError::io_operation("read config", path.display(), e))?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), jobs = config.jobs.len(), "config_loaded");
        Ok(config)
    }

    /// Load from an explicit path, or from the default location if it exists.
    ///
    /// A missing explicit file is an error; a missing default file yields defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(RankError::not_found("config file", path.display()));
            }
            return Self::load(path);
        }

        let path = Self::default_path()?;
        if path.exists() {
            Self::load(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    RankError::io_operation("create config directory", parent.display(), e)
                })?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| RankError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| RankError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Reject values that would make a ranking pass meaningless
    pub fn validate(&self) -> Result<()> {
        if self.ranking.top_n == 0 {
            bail_invalid!("ranking.top_n", self.ranking.top_n);
        }
        if self.ranking.progress_interval == 0 {
            bail_invalid!("ranking.progress_interval", self.ranking.progress_interval);
        }
        let tolerance = self.scoring.budget_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            bail_invalid!("scoring.budget_tolerance", tolerance);
        }
        if self.oracle.timeout_seconds == 0 {
            bail_invalid!("oracle.timeout_seconds", self.oracle.timeout_seconds);
        }
        Ok(())
    }

    /// Built-in templates merged with the configured ones
    pub fn job_catalog(&self) -> JobCatalog {
        JobCatalog::new(&self.jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::DEFAULT_GEMINI_URL;
    use crate::requirement::JobRequirement;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.scoring.weights.skill, 15);
        assert_eq!(config.scoring.weights.location, 25);
        assert_eq!(config.scoring.weights.budget, 20);
        assert_eq!(config.scoring.weights.content, 15);
        assert_eq!(config.scoring.weights.software, 10);
        assert_eq!(config.scoring.weights.ai, 2);
        assert_eq!(config.scoring.min_score_for_ai, 30);
        assert_eq!(config.scoring.budget_tolerance, 1.3);
        assert_eq!(config.scoring.description_prefix_chars, 300);
        assert_eq!(config.ranking.top_n, 10);
        assert_eq!(config.ranking.progress_interval, 100);
        assert!(config.oracle.enabled);
        assert_eq!(config.oracle.timeout_seconds, 10);
        assert!(config.jobs.is_empty());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [scoring.weights]
            location = 40

            [ranking]
            top_n = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.scoring.weights.location, 40);
        assert_eq!(config.scoring.weights.skill, 15);
        assert_eq!(config.ranking.top_n, 3);
        assert_eq!(config.ranking.progress_interval, 100);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.ranking.top_n = 5;
        config.jobs.insert(
            "4".to_string(),
            JobRequirement {
                title: "Shorts Editor".to_string(),
                skills: "CapCut".to_string(),
                budget: 800.into(),
                ..Default::default()
            },
        );
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.job_catalog().get("4").unwrap().title, "Shorts Editor");
    }

    #[test]
    fn test_validate_rejects_zero_top_n() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ranking]\ntop_n = 0\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, RankError::InvalidValue { .. }));
    }

    #[test]
    fn test_validate_rejects_negative_tolerance() {
        let mut config = AppConfig::default();
        config.scoring.budget_tolerance = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let err = AppConfig::resolve(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, RankError::NotFound { .. }));
    }

    #[test]
    fn test_oracle_overrides() {
        let oracle = OracleConfig::default()
            .with_overrides(Some("http://localhost:8080/fit"), Some("1000"));
        assert_eq!(oracle.url, "http://localhost:8080/fit");
        assert_eq!(oracle.timeout_seconds, 300);

        let oracle = OracleConfig::default().with_overrides(Some(""), Some("0"));
        assert_eq!(oracle.url, DEFAULT_GEMINI_URL);
        assert_eq!(oracle.timeout_seconds, 1);

        let oracle = OracleConfig::default().with_overrides(None, Some("soon"));
        assert_eq!(oracle.timeout_seconds, 10);
    }
}
