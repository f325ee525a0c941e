//! Weighted multi-criterion scoring of one profile against one job
//!
//! Criteria run in a fixed order and are independent and additive:
//! skills, location, budget, content vertical, software. When the sum of
//! those exceeds `min_score_for_ai`, the semantic fit oracle is consulted
//! and its 0-10 answer is added times the AI weight. An oracle failure
//! contributes nothing and never disturbs the deterministic part. Points
//! saturate at `u32::MAX` instead of overflowing, so large configured weights
//! keep scores monotonic.

use serde::Serialize;

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::matching::{
    contains_ci, count_token_matches, locations_overlap, truncate_chars, within_budget,
};
use crate::oracle::{OracleError, SemanticFitOracle, MAX_FIT};
use crate::profile::TalentProfile;
use crate::requirement::JobRequirement;

/// Outcome of the oracle step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SemanticFit {
    /// Base score did not pass the gate; the oracle was not called
    Skipped,
    /// Raw 0-10 answer from the oracle
    Scored { fit: u8 },
    /// The oracle failed; counted as 0
    Failed { reason: String },
}

/// Per-criterion points for one (profile, requirement) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub location: u32,
    pub budget: u32,
    pub content: u32,
    pub software: u32,
    pub semantic: SemanticFit,
    /// Points from the oracle step (fit times the AI weight)
    pub semantic_points: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    /// Sum of the deterministic criteria
    pub fn base(&self) -> u32 {
        [self.location, self.budget, self.content, self.software]
            .iter()
            .fold(self.skills, |sum, points| sum.saturating_add(*points))
    }
}

/// Scores profiles against a requirement using injected weights and oracle
pub struct ScoringEngine<'a> {
    config: ScoringConfig,
    oracle: &'a dyn SemanticFitOracle,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(config: ScoringConfig, oracle: &'a dyn SemanticFitOracle) -> Self {
        Self { config, oracle }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Deterministic criteria only; never calls the oracle
    pub fn base_score(&self, profile: &TalentProfile, requirement: &JobRequirement) -> ScoreBreakdown {
        let weights = &self.config.weights;

        let skills =
            count_token_matches(&requirement.skills, &profile.skills).saturating_mul(weights.skill);

        let location = if locations_overlap(&requirement.location, &profile.country) {
            weights.location
        } else {
            0
        };

        let budget = match (requirement.budget.value(), profile.monthly_rate.value()) {
            (Some(budget), Some(rate)) if within_budget(rate, budget, self.config.budget_tolerance) => {
                weights.budget
            }
            (Some(_), Some(_)) => 0,
            _ => {
                tracing::trace!(
                    budget = requirement.budget.raw(),
                    rate = profile.monthly_rate.raw(),
                    "budget not numeric, criterion skipped"
                );
                0
            }
        };

        let content = if contains_ci(&profile.content_verticals, &requirement.content_type) {
            weights.content
        } else {
            0
        };

        let software = count_token_matches(&requirement.software, &profile.software)
            .saturating_mul(weights.software);

        let mut breakdown = ScoreBreakdown {
            skills,
            location,
            budget,
            content,
            software,
            semantic: SemanticFit::Skipped,
            semantic_points: 0,
            total: 0,
        };
        breakdown.total = breakdown.base();
        breakdown
    }

    /// Full score including the gated oracle bonus.
    ///
    /// Fails only when the profile lacks a required field.
    pub fn score(&self, profile: &TalentProfile, requirement: &JobRequirement) -> Result<ScoreBreakdown> {
        profile.validate()?;

        let mut breakdown = self.base_score(profile, requirement);
        if breakdown.total <= self.config.min_score_for_ai {
            return Ok(breakdown);
        }

        let snippet = truncate_chars(
            &profile.profile_description,
            self.config.description_prefix_chars,
        );
        let outcome = self
            .oracle
            .evaluate(snippet, &requirement.skills)
            .and_then(|fit| {
                if fit > MAX_FIT {
                    Err(OracleError::Malformed(format!(
                        "fit {} is above {}",
                        fit, MAX_FIT
                    )))
                } else {
                    Ok(fit)
                }
            });
        match outcome {
            Ok(fit) => {
                breakdown.semantic_points = u32::from(fit).saturating_mul(self.config.weights.ai);
                breakdown.semantic = SemanticFit::Scored { fit };
            }
            Err(e) => {
                tracing::debug!(
                    oracle = self.oracle.name(),
                    profile = %profile.name(),
                    error = %e,
                    "semantic fit unavailable, bonus is 0"
                );
                breakdown.semantic = SemanticFit::Failed {
                    reason: e.to_string(),
                };
            }
        }

        breakdown.total = breakdown.total.saturating_add(breakdown.semantic_points);
        Ok(breakdown)
    }
}
