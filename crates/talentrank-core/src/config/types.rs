//! Configuration type definitions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::oracle::DEFAULT_GEMINI_URL;
use crate::requirement::JobRequirement;

/// Application configuration (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Criterion weights and the oracle gate
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Ranking pass parameters
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Semantic fit oracle connection
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Extra or overriding job templates, keyed by id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub jobs: BTreeMap<String, JobRequirement>,
}

/// Points awarded per satisfied criterion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Per matched skill token
    #[serde(default = "default_skill_weight")]
    pub skill: u32,

    #[serde(default = "default_location_weight")]
    pub location: u32,

    #[serde(default = "default_budget_weight")]
    pub budget: u32,

    #[serde(default = "default_content_weight")]
    pub content: u32,

    /// Per matched software token
    #[serde(default = "default_software_weight")]
    pub software: u32,

    /// Multiplier applied to the oracle's 0-10 answer
    #[serde(default = "default_ai_weight")]
    pub ai: u32,
}

/// Scoring engine parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: ScoringWeights,

    /// The oracle is consulted only when the base score exceeds this
    #[serde(default = "default_min_score_for_ai")]
    pub min_score_for_ai: u32,

    /// Rates up to `budget * budget_tolerance` still count as within budget
    #[serde(default = "default_budget_tolerance")]
    pub budget_tolerance: f64,

    /// Characters of the profile description sent to the oracle
    #[serde(default = "default_description_prefix_chars")]
    pub description_prefix_chars: usize,
}

/// Ranking pass parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Maximum number of results kept
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Profiles between progress reports
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

/// Semantic fit oracle connection settings.
///
/// The API key is never stored here; it comes from `GEMINI_API_KEY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Disable to score offline
    #[serde(default = "default_oracle_enabled")]
    pub enabled: bool,

    #[serde(default = "default_oracle_url")]
    pub url: String,

    /// Per-request timeout
    #[serde(default = "default_oracle_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_skill_weight() -> u32 {
    15
}

fn default_location_weight() -> u32 {
    25
}

fn default_budget_weight() -> u32 {
    20
}

fn default_content_weight() -> u32 {
    15
}

fn default_software_weight() -> u32 {
    10
}

fn default_ai_weight() -> u32 {
    2
}

fn default_min_score_for_ai() -> u32 {
    30
}

fn default_budget_tolerance() -> f64 {
    1.3
}

fn default_description_prefix_chars() -> usize {
    300
}

fn default_top_n() -> usize {
    10
}

fn default_progress_interval() -> usize {
    100
}

fn default_oracle_enabled() -> bool {
    true
}

fn default_oracle_url() -> String {
    DEFAULT_GEMINI_URL.to_string()
}

fn default_oracle_timeout_seconds() -> u64 {
    10
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            location: default_location_weight(),
            budget: default_budget_weight(),
            content: default_content_weight(),
            software: default_software_weight(),
            ai: default_ai_weight(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            min_score_for_ai: default_min_score_for_ai(),
            budget_tolerance: default_budget_tolerance(),
            description_prefix_chars: default_description_prefix_chars(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            progress_interval: default_progress_interval(),
        }
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            enabled: default_oracle_enabled(),
            url: default_oracle_url(),
            timeout_seconds: default_oracle_timeout_seconds(),
        }
    }
}

impl OracleConfig {
    /// Apply `TALENTRANK_ORACLE_URL` and `TALENTRANK_ORACLE_TIMEOUT` overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var("TALENTRANK_ORACLE_URL").ok().as_deref(),
            std::env::var("TALENTRANK_ORACLE_TIMEOUT").ok().as_deref(),
        )
    }

    /// Apply raw override values; the timeout is clamped to 1..=300 seconds
    pub fn with_overrides(mut self, url: Option<&str>, timeout: Option<&str>) -> Self {
        if let Some(url) = url.filter(|url| !url.is_empty()) {
            self.url = url.to_string();
        }

        if let Some(seconds) = timeout.and_then(|t| t.trim().parse::<u64>().ok()) {
            self.timeout_seconds = seconds.clamp(1, 300);
        }

        self
    }
}
