//! Job requirement templates
//!
//! A ranking pass takes exactly one [`JobRequirement`]. Templates are
//! configuration data: three are built in and more can be declared (or the
//! built-ins overridden) under `[jobs.<id>]` in the config file.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::{RankError, Result};

/// What a job asks of a candidate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub title: String,

    /// Comma-delimited required skills
    #[serde(default)]
    pub skills: String,

    /// Comma-delimited required software
    #[serde(default)]
    pub software: String,

    #[serde(default)]
    pub location: String,

    /// Monthly budget ceiling
    #[serde(default)]
    pub budget: Amount,

    #[serde(default)]
    pub content_type: String,
}

/// Built-in templates, keyed by id
pub fn builtin_templates() -> Vec<(String, JobRequirement)> {
    vec![
        (
            "1".to_string(),
            JobRequirement {
                title: "Video Editor for Entertainment/Lifestyle Creator".to_string(),
                skills: "Adobe Premiere Pro, Splice & Dice, Rough Cut & Sequencing, 2D Animation"
                    .to_string(),
                software: "Adobe Premiere Pro, Adobe After Effects".to_string(),
                location: "Asia".to_string(),
                budget: Amount::from(2500),
                content_type: "Entertainment/Lifestyle & Vlogs".to_string(),
            },
        ),
        (
            "2".to_string(),
            JobRequirement {
                title: "Producer/Video Editor for Education/Food Creator".to_string(),
                skills: "Storyboarding, Sound Designing, Rough Cut & Sequencing, Filming"
                    .to_string(),
                software: "Adobe Premiere Pro, Adobe After Effects, Final Cut Pro".to_string(),
                location: "New York, US".to_string(),
                budget: Amount::from(150),
                content_type: "Entertainment/Education/Food & Cooking".to_string(),
            },
        ),
        (
            "3".to_string(),
            JobRequirement {
                title: "Chief Operation Officer for Productivity Channel".to_string(),
                skills: "Strategy & Consulting, Business operations, Development".to_string(),
                software: "Excel, Notion, Slack".to_string(),
                location: "Remote".to_string(),
                budget: Amount::from(10000),
                content_type: "Productivity".to_string(),
            },
        ),
    ]
}

/// Numeric ids sort numerically and before any non-numeric id
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// The set of templates a ranking pass can be run against
#[derive(Debug, Clone)]
pub struct JobCatalog {
    templates: Vec<(String, JobRequirement)>,
}

impl Default for JobCatalog {
    fn default() -> Self {
        Self::new(&BTreeMap::new())
    }
}

impl JobCatalog {
    /// Built-in templates merged with configured ones (configured ids win)
    pub fn new(configured: &BTreeMap<String, JobRequirement>) -> Self {
        let mut merged: BTreeMap<String, JobRequirement> = builtin_templates().into_iter().collect();
        for (id, requirement) in configured {
            merged.insert(id.trim().to_string(), requirement.clone());
        }

        let mut templates: Vec<_> = merged.into_iter().collect();
        templates.sort_by(|(a, _), (b, _)| compare_ids(a, b));
        Self { templates }
    }

    /// Look up a template by id
    pub fn get(&self, id: &str) -> Result<&JobRequirement> {
        let id = id.trim();
        self.templates
            .iter()
            .find(|(template_id, _)| template_id == id)
            .map(|(_, requirement)| requirement)
            .ok_or_else(|| RankError::not_found("job template", id))
    }

    /// All templates in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JobRequirement)> {
        self.templates.iter().map(|(id, req)| (id.as_str(), req))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = JobCatalog::default();
        assert_eq!(catalog.len(), 3);

        let editor = catalog.get("1").unwrap();
        assert_eq!(editor.location, "Asia");
        assert_eq!(editor.budget.value(), Some(2500.0));

        let coo = catalog.get(" 3 ").unwrap();
        assert_eq!(coo.software, "Excel, Notion, Slack");
    }

    #[test]
    fn test_unknown_template() {
        let catalog = JobCatalog::default();
        let err = catalog.get("7").unwrap_err();
        assert_eq!(err.to_string(), "job template not found: 7");
    }

    #[test]
    fn test_configured_templates_override_and_extend() {
        let mut configured = BTreeMap::new();
        configured.insert(
            "2".to_string(),
            JobRequirement {
                title: "Remote Producer".to_string(),
                location: "Remote".to_string(),
                ..Default::default()
            },
        );
        configured.insert(
            "10".to_string(),
            JobRequirement {
                title: "Thumbnail Designer".to_string(),
                ..Default::default()
            },
        );
        configured.insert(
            "motion".to_string(),
            JobRequirement {
                title: "Motion Designer".to_string(),
                ..Default::default()
            },
        );

        let catalog = JobCatalog::new(&configured);
        assert_eq!(catalog.get("2").unwrap().title, "Remote Producer");

        let ids: Vec<_> = catalog.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "10", "motion"]);
    }
}
