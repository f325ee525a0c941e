//! Profile file loading
//!
//! Accepts a JSON array of profile objects, or an object with a `profiles`
//! array. Entries that fail to deserialize are skipped with a warning so a
//! single bad row never blocks the rest of the file.

use std::fs;
use std::path::Path;

use serde_json::Value;

use talentrank_core::error::{RankError, Result};
use talentrank_core::profile::TalentProfile;

pub fn load_profiles(path: &Path) -> Result<Vec<TalentProfile>> {
    let content = fs::read_to_string(path)
        .map_err(|e| RankError::io_operation("read profiles", path.display(), e))?;

    let invalid = |reason: String| RankError::InvalidProfiles {
        path: path.to_path_buf(),
        reason,
    };

    let value: Value = serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut obj) => match obj.remove("profiles") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(invalid("expected a `profiles` array".to_string())),
        },
        _ => return Err(invalid("expected a JSON array of profiles".to_string())),
    };

    let total = entries.len();
    let profiles: Vec<TalentProfile> = entries
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, entry)| match serde_json::from_value::<TalentProfile>(entry) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping unreadable profile");
                    None
                }
            },
        )
        .collect();

    tracing::debug!(
        path = %path.display(),
        loaded = profiles.len(),
        total,
        "profiles_loaded"
    );
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_array_skips_bad_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("talent.json");
        fs::write(
            &path,
            r#"[
                {"First Name": "Ana", "Skills": "Filming"},
                {"First Name": ["not", "a", "string"]},
                {"first_name": "Ben", "monthly_rate": 1200}
            ]"#,
        )
        .unwrap();

        let profiles = load_profiles(&path).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].first_name, "Ana");
        assert_eq!(profiles[1].monthly_rate.value(), Some(1200.0));
    }

    #[test]
    fn test_load_wrapped_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("talent.json");
        fs::write(&path, r#"{"profiles": [{"first_name": "Cy"}]}"#).unwrap();

        let profiles = load_profiles(&path).unwrap();
        assert_eq!(profiles.len(), 1);
    }

    #[test]
    fn test_load_rejects_non_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("talent.json");
        fs::write(&path, "42").unwrap();

        let err = load_profiles(&path).unwrap_err();
        assert!(matches!(err, RankError::InvalidProfiles { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_profiles(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("read profiles"));
    }
}
