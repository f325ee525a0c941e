//! Talent profile records
//!
//! Profiles are read-only to the scoring core. They are usually exported
//! from a spreadsheet, so deserialization accepts both snake_case keys and
//! the original column headers ("First Name", "Monthly Rate", ...).

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::{RankError, Result};

/// A single talent profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TalentProfile {
    #[serde(default, alias = "First Name")]
    pub first_name: String,

    #[serde(default, alias = "Last Name")]
    pub last_name: String,

    #[serde(default, alias = "City")]
    pub city: String,

    #[serde(default, alias = "Country")]
    pub country: String,

    /// Free-text, comma-delimited skill list
    #[serde(default, alias = "Skills")]
    pub skills: String,

    /// Free-text, comma-delimited software list
    #[serde(default, alias = "Software")]
    pub software: String,

    #[serde(default, alias = "Job Types")]
    pub job_types: String,

    #[serde(default, alias = "Monthly Rate")]
    pub monthly_rate: Amount,

    #[serde(default, alias = "Content Verticals")]
    pub content_verticals: String,

    #[serde(default, alias = "Profile Description")]
    pub profile_description: String,
}

impl TalentProfile {
    /// Full display name
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// "City, Country", omitting whichever part is blank
    pub fn display_location(&self) -> String {
        [self.city.trim(), self.country.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Check the fields the ranker cannot do without
    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().is_empty() {
            let label = if self.last_name.trim().is_empty() {
                "<unnamed>".to_string()
            } else {
                self.last_name.trim().to_string()
            };
            return Err(RankError::profile_field_missing("first_name", label));
        }
        Ok(())
    }
}
