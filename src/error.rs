//! # Pipeline Error Types
//!
//! Structured error handling for the pipeline using thiserror. Every failure
//! in a handler is either a rejected delivery (`Validation`), a propagated
//! capability failure (`Capability`), or a construction-time configuration
//! problem (`Configuration`) — there is no local recovery anywhere.

use crate::capabilities::CapabilityError;
use thiserror::Error;

/// Top-level error type for pipeline handlers and the envelope codec.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Malformed or incomplete envelope/event. Surfaces as a rejected
    /// delivery; redelivery policy belongs to the transport.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// An outbound OCR/translate/storage/queue call failed.
    #[error("Capability error: {0}")]
    Capability(#[from] CapabilityError),

    /// Missing or invalid environment configuration.
    #[error("Configuration error: {key}: {message}")]
    Configuration { key: String, message: String },

    /// Envelope could not be serialized for the wire.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl PipelineError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Whether this error rejects the delivery outright (as opposed to a
    /// transient capability failure the transport may redeliver).
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Serialization { .. })
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            PipelineError::serialization(err.to_string())
        } else {
            PipelineError::validation(err.to_string())
        }
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
