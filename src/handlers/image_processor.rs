//! # OCR Stage
//!
//! Entry point of the pipeline. Consumes a storage "object created" event,
//! runs text detection over the uploaded object, and publishes one envelope
//! per configured target language to the translation queue.
//!
//! Detection problems (non-image uploads, OCR backend failures, images with
//! no text) end the invocation quietly: the stage logs and emits nothing.
//! A malformed trigger event, by contrast, is a rejected delivery.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{info, warn};
use uuid::Uuid;

use crate::capabilities::{ObjectStore, OcrCapability, QueuePublisher};
use crate::error::Result;
use crate::messaging::{Envelope, StorageObjectEvent};

/// Handler for the image-upload trigger.
pub struct ImageProcessor {
    store: Arc<dyn ObjectStore>,
    ocr: Arc<dyn OcrCapability>,
    publisher: Arc<dyn QueuePublisher>,
    target_languages: Vec<String>,
}

impl ImageProcessor {
    /// Create a new OCR stage handler. `publisher` must be bound to the
    /// translation queue; `target_languages` controls the fan-out.
    pub fn new(
        store: Arc<dyn ObjectStore>,
        ocr: Arc<dyn OcrCapability>,
        publisher: Arc<dyn QueuePublisher>,
        target_languages: Vec<String>,
    ) -> Self {
        Self {
            store,
            ocr,
            publisher,
            target_languages,
        }
    }

    /// Process one storage trigger delivery, given as the raw JSON event.
    pub async fn handle(&self, raw_event: &[u8]) -> Result<()> {
        let event = StorageObjectEvent::from_json(raw_event)?;
        self.process(&event).await
    }

    /// Process an already-parsed trigger event.
    pub async fn process(&self, event: &StorageObjectEvent) -> Result<()> {
        let delivery_id = Uuid::new_v4();
        info!(
            delivery_id = %delivery_id,
            bucket = %event.bucket,
            name = %event.name,
            "Looking for text in image"
        );

        let image = match self.store.fetch(&event.bucket, &event.name).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(
                    delivery_id = %delivery_id,
                    name = %event.name,
                    error = %e,
                    "Could not fetch uploaded object, skipping"
                );
                return Ok(());
            }
        };

        let detection = match self.ocr.detect_text(&image).await {
            Ok(Some(detection)) => detection,
            Ok(None) => {
                info!(delivery_id = %delivery_id, name = %event.name, "No text detected in image");
                return Ok(());
            }
            Err(e) => {
                warn!(
                    delivery_id = %delivery_id,
                    name = %event.name,
                    error = %e,
                    "Text detection failed, skipping"
                );
                return Ok(());
            }
        };

        info!(
            delivery_id = %delivery_id,
            name = %event.name,
            detected_lang = %detection.language_code,
            chars = detection.text.len(),
            "Extracted text from image"
        );

        // One translation request per configured target language. The
        // envelope's lang field is the *target* language from here on.
        let publishes = self.target_languages.iter().map(|target| {
            let envelope = Envelope::new(detection.text.as_str(), event.name.as_str(), target.as_str());
            self.publish(envelope)
        });
        try_join_all(publishes).await?;

        Ok(())
    }

    async fn publish(&self, envelope: Envelope) -> Result<()> {
        let payload = envelope.encode()?;
        self.publisher.publish(&payload).await?;
        info!(
            queue = %self.publisher.queue_name(),
            filename = %envelope.filename,
            target_lang = %envelope.lang,
            "Queued translation request"
        );
        Ok(())
    }
}
