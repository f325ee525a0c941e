//! Gemini-backed semantic fit oracle
//!
//! One synchronous `generateContent` call per evaluation, no retries. The
//! model is asked to answer with a bare 0-10 number; anything else is a
//! malformed reply.

use std::time::Duration;

use serde_json::Value;

use super::{parse_fit_reply, OracleError, SemanticFitOracle};
use crate::config::OracleConfig;

/// Default generateContent endpoint
pub const DEFAULT_GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Environment variable holding the API key
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// HTTP client for the Gemini generateContent API
pub struct GeminiOracle {
    url: String,
    api_key: String,
    agent: ureq::Agent,
    user_agent: String,
}

impl GeminiOracle {
    /// Create an oracle for an explicit endpoint and key
    pub fn new(url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            url: url.into(),
            api_key: api_key.into(),
            agent,
            user_agent: format!(
                "talentrank/{} ({})",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            ),
        }
    }

    /// Build from config, reading the key from `GEMINI_API_KEY`
    pub fn from_config(config: &OracleConfig) -> Result<Self, OracleError> {
        Self::with_key(config, std::env::var(API_KEY_ENV_VAR).ok())
    }

    /// Build from config with an explicit key; a blank or missing key is unavailable
    pub fn with_key(config: &OracleConfig, api_key: Option<String>) -> Result<Self, OracleError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| OracleError::Unavailable(format!("{} is not set", API_KEY_ENV_VAR)))?;

        Ok(Self::new(
            config.url.clone(),
            api_key,
            Duration::from_secs(config.timeout_seconds),
        ))
    }

    /// Ask the endpoint to echo a known number.
    ///
    /// Succeeds only when the reply parses to exactly 5.
    pub fn check_connection(&self) -> Result<(), OracleError> {
        let reply = self.generate("Return the number 5")?;
        match parse_fit_reply(&reply)? {
            5 => Ok(()),
            other => Err(OracleError::Malformed(format!(
                "expected 5, got {}",
                other
            ))),
        }
    }

    /// Send a prompt and return the first candidate's text
    fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        let payload = request_body(prompt).to_string();

        let response = self
            .agent
            .post(&self.url)
            .header("Content-Type", "application/json")
            .header("User-Agent", &self.user_agent)
            .header("x-goog-api-key", &self.api_key)
            .send(payload.as_str());

        let body = match response {
            Ok(mut res) => res
                .body_mut()
                .read_to_string()
                .map_err(|e| OracleError::Unavailable(format!("failed to read body: {}", e)))?,
            Err(ureq::Error::StatusCode(code)) => {
                return Err(OracleError::Unavailable(format!("HTTP {}", code)));
            }
            Err(ureq::Error::Timeout(_)) => {
                return Err(OracleError::Unavailable("request timed out".to_string()));
            }
            Err(e) => return Err(OracleError::Unavailable(format!("transport error: {}", e))),
        };

        extract_reply_text(&body)
    }
}

impl SemanticFitOracle for GeminiOracle {
    fn evaluate(&self, text_a: &str, text_b: &str) -> Result<u8, OracleError> {
        let reply = self.generate(&fit_prompt(text_a, text_b))?;
        parse_fit_reply(&reply)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

fn fit_prompt(talent_description: &str, job_requirements: &str) -> String {
    format!(
        "Analyze if this talent profile fits the job requirements.\n\n\
         Talent Description: {}...\n\
         Job Requirements: {}\n\n\
         Consider:\n\
         1. Skills alignment\n\
         2. Experience relevance\n\
         3. Personality traits\n\
         4. Work style compatibility\n\n\
         Return only a number between 0-10 representing the fit score.",
        talent_description, job_requirements
    )
}

fn request_body(prompt: &str) -> Value {
    serde_json::json!({
        "contents": [{
            "parts": [{ "text": prompt }]
        }]
    })
}

/// Pull `candidates[0].content.parts[0].text` out of a response body
fn extract_reply_text(body: &str) -> Result<String, OracleError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| OracleError::Malformed(format!("invalid JSON: {}", e)))?;

    value
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(|text| text.trim().to_string())
        .ok_or_else(|| OracleError::Malformed("response has no candidate text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_reply_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":" 8\n"}]}}]}"#;
        assert_eq!(extract_reply_text(body).unwrap(), "8");
    }

    #[test]
    fn test_extract_reply_text_missing_candidates() {
        let result = extract_reply_text(r#"{"candidates":[]}"#);
        assert!(matches!(result, Err(OracleError::Malformed(_))));

        let result = extract_reply_text("not json");
        assert!(matches!(result, Err(OracleError::Malformed(_))));
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_fit_prompt_includes_both_texts() {
        let prompt = fit_prompt("Editor with 5 years of vlog work", "Adobe Premiere Pro");
        assert!(prompt.contains("Talent Description: Editor with 5 years of vlog work..."));
        assert!(prompt.contains("Job Requirements: Adobe Premiere Pro"));
        assert!(prompt.contains("between 0-10"));
    }

    #[test]
    fn test_missing_or_blank_key_is_unavailable() {
        let config = OracleConfig::default();
        for key in [None, Some(String::new()), Some("   ".to_string())] {
            let result = GeminiOracle::with_key(&config, key);
            assert!(matches!(result, Err(OracleError::Unavailable(_))));
        }
        assert!(GeminiOracle::with_key(&config, Some("test-key".to_string())).is_ok());
    }

    #[test]
    fn test_unreachable_endpoint_is_unavailable() {
        let oracle = GeminiOracle::new(
            "http://127.0.0.1:9/v1beta/models/test:generateContent",
            "test-key",
            Duration::from_secs(2),
        );
        let result = oracle.evaluate("description", "skills");
        assert!(matches!(result, Err(OracleError::Unavailable(_))));
        assert_eq!(oracle.name(), "gemini");
    }
}
