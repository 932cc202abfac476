//! # Pipeline Configuration
//!
//! Environment-driven configuration for the three handlers and their
//! capability clients. Required values fail loudly at construction time
//! rather than falling back silently; only values with a sensible universal
//! default (`LOCATION`, `TARGET_LANGUAGES`) have one.

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Default target language set when `TARGET_LANGUAGES` is unset.
const DEFAULT_TARGET_LANGUAGES: &str = "es";

/// Configuration shared by the pipeline handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Project identifier handed to capability clients
    pub project_id: String,

    /// Region/location identifier for capability clients
    pub location: String,

    /// Destination bucket for saved translation results
    pub result_bucket: String,

    /// Queue for the OCR -> translate handoff
    pub translate_topic: String,

    /// Queue for the translate -> save handoff
    pub result_topic: String,

    /// Languages the OCR stage fans out to, one publish per language
    pub target_languages: Vec<String>,
}

impl PipelineConfig {
    /// Load configuration from environment variables.
    ///
    /// Required: `PROJECT_ID`, `RESULT_BUCKET`, `TRANSLATE_TOPIC`,
    /// `RESULT_TOPIC`. Optional: `LOCATION` (default `global`),
    /// `TARGET_LANGUAGES` (comma-separated, default `es`).
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            project_id: required_env("PROJECT_ID")?,
            location: std::env::var("LOCATION").unwrap_or_else(|_| "global".to_string()),
            result_bucket: required_env("RESULT_BUCKET")?,
            translate_topic: required_env("TRANSLATE_TOPIC")?,
            result_topic: required_env("RESULT_TOPIC")?,
            target_languages: parse_target_languages(
                &std::env::var("TARGET_LANGUAGES")
                    .unwrap_or_else(|_| DEFAULT_TARGET_LANGUAGES.to_string()),
            )?,
        })
    }
}

fn required_env(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(PipelineError::configuration(
            key,
            "environment variable not set",
        )),
    }
}

/// Parse a comma-separated language list, trimming whitespace and dropping
/// empty entries. An entirely empty list is a configuration error: the OCR
/// stage would silently publish nothing.
pub fn parse_target_languages(raw: &str) -> Result<Vec<String>> {
    let languages: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if languages.is_empty() {
        return Err(PipelineError::configuration(
            "TARGET_LANGUAGES",
            "no target languages configured",
        ));
    }

    Ok(languages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_languages() {
        assert_eq!(parse_target_languages("es").unwrap(), vec!["es"]);
        assert_eq!(
            parse_target_languages("es, en ,fr").unwrap(),
            vec!["es", "en", "fr"]
        );
        assert_eq!(parse_target_languages("es,,en").unwrap(), vec!["es", "en"]);
    }

    #[test]
    fn test_empty_target_languages_is_error() {
        let err = parse_target_languages("  , ,").unwrap_err();
        assert!(matches!(err, PipelineError::Configuration { .. }));
    }

    #[test]
    fn test_required_env_missing() {
        std::env::remove_var("OCR_PIPELINE_TEST_MISSING");
        let err = required_env("OCR_PIPELINE_TEST_MISSING").unwrap_err();
        let display_str = format!("{err}");
        assert!(display_str.contains("OCR_PIPELINE_TEST_MISSING"));
    }

    #[test]
    fn test_required_env_present() {
        std::env::set_var("OCR_PIPELINE_TEST_PRESENT", "value");
        assert_eq!(
            required_env("OCR_PIPELINE_TEST_PRESENT").unwrap(),
            "value"
        );
        std::env::remove_var("OCR_PIPELINE_TEST_PRESENT");
    }
}
