//! # Capability Interfaces
//!
//! External service boundaries consumed by the pipeline: OCR, translation,
//! object storage, and queue publishing. Each is an opaque async trait so
//! handlers stay testable and the concrete clients (cloud SDKs, local disk,
//! in-memory queues) remain swappable adapters outside the core logic.
//!
//! All capability handles are immutable after construction and shared across
//! concurrent handler invocations behind `Arc`.

pub mod local;

use async_trait::async_trait;
use thiserror::Error;

pub use local::LocalObjectStore;

/// Errors surfaced by capability adapters.
#[derive(Error, Debug)]
pub enum CapabilityError {
    #[error("OCR detection failed: {message}")]
    Ocr { message: String },

    #[error("Translation call failed: {message}")]
    Translate { message: String },

    #[error("Object storage operation failed: {bucket}/{name}: {message}")]
    Storage {
        bucket: String,
        name: String,
        message: String,
    },

    #[error("Queue publish failed: {queue_name}: {message}")]
    QueuePublish { queue_name: String, message: String },
}

impl CapabilityError {
    /// Create an OCR error
    pub fn ocr(message: impl Into<String>) -> Self {
        Self::Ocr {
            message: message.into(),
        }
    }

    /// Create a translation error
    pub fn translate(message: impl Into<String>) -> Self {
        Self::Translate {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(
        bucket: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Storage {
            bucket: bucket.into(),
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a queue publish error
    pub fn queue_publish(queue_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::QueuePublish {
            queue_name: queue_name.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for capability operations
pub type CapabilityResult<T> = Result<T, CapabilityError>;

/// Text extracted from an image along with the language the OCR engine
/// detected it to be written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDetection {
    /// Full extracted text
    pub text: String,
    /// BCP-47 language code of the detected source language
    pub language_code: String,
}

/// OCR engine boundary.
#[async_trait]
pub trait OcrCapability: Send + Sync {
    /// Run text detection over raw image bytes. `Ok(None)` means the engine
    /// found no text (not an error).
    async fn detect_text(&self, image: &[u8]) -> CapabilityResult<Option<TextDetection>>;
}

/// Translation service boundary.
#[async_trait]
pub trait TranslateCapability: Send + Sync {
    /// Translate `text` into `target_lang`. `Ok(None)` means the service
    /// returned zero translations — downstream treats that as a silent no-op.
    async fn translate(&self, text: &str, target_lang: &str) -> CapabilityResult<Option<String>>;
}

/// Object storage boundary.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the raw bytes of an object.
    async fn fetch(&self, bucket: &str, name: &str) -> CapabilityResult<Vec<u8>>;

    /// Write `bytes` to `bucket/name`, unconditionally overwriting any
    /// existing object (last-write-wins, which keeps duplicate deliveries
    /// idempotent).
    async fn write(&self, bucket: &str, name: &str, bytes: &[u8]) -> CapabilityResult<()>;
}

/// Queue transport boundary. One publisher handle is bound to one destination
/// queue at construction time.
#[async_trait]
pub trait QueuePublisher: Send + Sync {
    /// Publish an already-framed payload to the bound queue. Delivery to the
    /// next stage is asynchronous and at-least-once.
    async fn publish(&self, payload: &[u8]) -> CapabilityResult<()>;

    /// Name of the queue this handle publishes to, for logging.
    fn queue_name(&self) -> &str;
}
