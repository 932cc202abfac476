//! # Envelope Codec
//!
//! The three-field record passed between stages and its transport framing.
//! Wire form is base64(UTF-8 JSON `{"text":…,"filename":…,"lang":…}`); the
//! decode path validates the fields in a fixed order so the first missing
//! field determines the error reported, matching the behavior of the
//! existing pipeline this crate interoperates with.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Message passed between pipeline stages.
///
/// `lang` carries the detected source language when emitted by the OCR stage
/// and the requested target language as consumed by the translate and save
/// stages. A stage never mutates an envelope it received; it constructs a
/// fresh one for the next hop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    /// Payload text at this stage (raw OCR output or translated output)
    pub text: String,
    /// Name of the originating source object, carried unchanged end to end
    pub filename: String,
    /// Language code; target language from the consumer's point of view
    pub lang: String,
}

/// Deserialization half with every field optional, so validation can report
/// the first missing field in a fixed order instead of whatever serde would
/// reject first.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    text: Option<String>,
    filename: Option<String>,
    lang: Option<String>,
}

impl Envelope {
    /// Create a new envelope.
    pub fn new(text: impl Into<String>, filename: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filename: filename.into(),
            lang: lang.into(),
        }
    }

    /// Decode a queue message payload: base64 to UTF-8 JSON, then parse and
    /// validate. Fields are checked in the order text, filename, lang; a
    /// missing, null or empty field fails with a distinct message naming it.
    pub fn decode(payload: &[u8]) -> Result<Self> {
        let json_bytes = STANDARD
            .decode(payload)
            .map_err(|e| PipelineError::validation(format!("Invalid base64 payload: {e}")))?;

        let raw: RawEnvelope = serde_json::from_slice(&json_bytes)?;

        let text = require_field(raw.text, "text")?;
        let filename = require_field(raw.filename, "filename")?;
        let lang = require_field(raw.lang, "lang")?;

        Ok(Self {
            text,
            filename,
            lang,
        })
    }

    /// Encode for the wire: serialize to UTF-8 JSON and base64 the result.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(self)
            .map_err(|e| PipelineError::serialization(e.to_string()))?;
        Ok(STANDARD.encode(json).into_bytes())
    }

    /// Name of the result object for this envelope's terminal write:
    /// `"{filename}_to_{lang}.txt"`, exact formatting, no escaping or
    /// normalization of `filename`.
    pub fn result_object_name(&self) -> String {
        format!("{}_to_{}.txt", self.filename, self.lang)
    }
}

fn require_field(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(PipelineError::validation(format!(
            "Missing {name} parameter"
        ))),
    }
}
