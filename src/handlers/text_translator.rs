//! # Translation Stage
//!
//! Consumes envelopes from the OCR queue, translates the text into the
//! requested target language, and republishes the translated envelope to the
//! results queue. A translation service that returns zero translations ends
//! the invocation silently; a failed service call propagates so the
//! transport can apply its redelivery policy.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::capabilities::{QueuePublisher, TranslateCapability};
use crate::error::Result;
use crate::messaging::Envelope;

/// Handler for the OCR -> translate handoff.
pub struct TextTranslator {
    translator: Arc<dyn TranslateCapability>,
    publisher: Arc<dyn QueuePublisher>,
}

impl TextTranslator {
    /// Create a new translation stage handler. `publisher` must be bound to
    /// the results queue.
    pub fn new(translator: Arc<dyn TranslateCapability>, publisher: Arc<dyn QueuePublisher>) -> Self {
        Self {
            translator,
            publisher,
        }
    }

    /// Process one queue delivery, given as the raw message payload.
    pub async fn handle(&self, payload: &[u8]) -> Result<()> {
        let incoming = Envelope::decode(payload)?;
        let delivery_id = Uuid::new_v4();

        info!(
            delivery_id = %delivery_id,
            filename = %incoming.filename,
            target_lang = %incoming.lang,
            "Translating text"
        );

        let translated = match self
            .translator
            .translate(&incoming.text, &incoming.lang)
            .await?
        {
            Some(text) => text,
            None => {
                // Zero translations is an explicit no-op, not a failure.
                info!(
                    delivery_id = %delivery_id,
                    filename = %incoming.filename,
                    target_lang = %incoming.lang,
                    "Translation service returned no translations"
                );
                return Ok(());
            }
        };

        let outgoing =
            Envelope::new(translated, incoming.filename.as_str(), incoming.lang.as_str());
        let outgoing_payload = outgoing.encode()?;
        self.publisher.publish(&outgoing_payload).await?;

        info!(
            delivery_id = %delivery_id,
            queue = %self.publisher.queue_name(),
            filename = %outgoing.filename,
            target_lang = %outgoing.lang,
            "Text translated and queued for saving"
        );
        Ok(())
    }
}
