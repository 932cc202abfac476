#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # OCR Translation Pipeline
//!
//! Event-driven three-stage pipeline: an uploaded image is OCR'd, the
//! extracted text is translated into a configured set of target languages,
//! and each translation is saved to object storage.
//!
//! ## Architecture
//!
//! Three independent, stateless handlers connected only through the message
//! envelope they produce and consume:
//!
//! ```text
//! storage event -> ImageProcessor -> translate queue
//!                                 -> TextTranslator -> results queue
//!                                                   -> ResultSaver -> storage
//! ```
//!
//! Each handler is invoked once per delivery by an external event-delivery
//! adapter and never calls another handler directly. The OCR, translation,
//! storage and queue services are reached through the capability traits in
//! [`capabilities`], injected at construction.
//!
//! ## Wire contract
//!
//! Queue payloads are the base64 encoding of a UTF-8 JSON object with
//! exactly the keys `text`, `filename` and `lang` (see
//! [`messaging::Envelope`]); results are saved as
//! `"{filename}_to_{lang}.txt"`. Both are compatibility-critical and
//! preserved bit-for-bit.
//!
//! ## Module Organization
//!
//! - [`messaging`] - Envelope codec and trigger event parsing
//! - [`handlers`] - The three pipeline stages
//! - [`capabilities`] - External service boundaries (OCR, translate, storage, queue)
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup

pub mod capabilities;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod messaging;

pub use capabilities::{
    CapabilityError, CapabilityResult, LocalObjectStore, ObjectStore, OcrCapability,
    QueuePublisher, TextDetection, TranslateCapability,
};
pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use handlers::{ImageProcessor, ResultSaver, TextTranslator};
pub use messaging::{Envelope, StorageObjectEvent};
