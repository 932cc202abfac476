//! # Storage Trigger Event
//!
//! The "object created" notification that starts the pipeline. Only `bucket`
//! and `name` matter to the OCR stage; any other attributes the hosting
//! runtime attaches are ignored.

use serde::Deserialize;

use crate::error::{PipelineError, Result};

/// Object-created event delivered to the OCR stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageObjectEvent {
    /// Bucket the object was uploaded to
    pub bucket: String,
    /// Object name within the bucket
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct RawStorageEvent {
    bucket: Option<String>,
    name: Option<String>,
}

impl StorageObjectEvent {
    pub fn new(bucket: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            name: name.into(),
        }
    }

    /// Parse and validate a trigger event from its JSON form. Missing, null
    /// or empty `bucket`/`name` is a validation failure.
    pub fn from_json(raw: &[u8]) -> Result<Self> {
        let event: RawStorageEvent = serde_json::from_slice(raw)?;

        let bucket = match event.bucket {
            Some(b) if !b.is_empty() => b,
            _ => return Err(PipelineError::validation("Missing bucket parameter")),
        };
        let name = match event.name {
            Some(n) if !n.is_empty() => n,
            _ => return Err(PipelineError::validation("Missing name parameter")),
        };

        Ok(Self { bucket, name })
    }
}
