//! # Save Stage
//!
//! Terminal stage. Consumes envelopes from the results queue and writes the
//! translated text to the result bucket under
//! `"{filename}_to_{lang}.txt"`. The write overwrites unconditionally, which
//! makes duplicate deliveries of the same envelope idempotent.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::capabilities::ObjectStore;
use crate::error::Result;
use crate::messaging::Envelope;

/// Handler for the translate -> save handoff.
pub struct ResultSaver {
    store: Arc<dyn ObjectStore>,
    result_bucket: String,
}

impl ResultSaver {
    /// Create a new save stage handler writing into `result_bucket`.
    pub fn new(store: Arc<dyn ObjectStore>, result_bucket: impl Into<String>) -> Self {
        Self {
            store,
            result_bucket: result_bucket.into(),
        }
    }

    /// Process one queue delivery, given as the raw message payload.
    pub async fn handle(&self, payload: &[u8]) -> Result<()> {
        let envelope = Envelope::decode(payload)?;
        let delivery_id = Uuid::new_v4();

        info!(
            delivery_id = %delivery_id,
            filename = %envelope.filename,
            "Received request to save file"
        );

        let object_name = envelope.result_object_name();
        info!(
            delivery_id = %delivery_id,
            object = %object_name,
            bucket = %self.result_bucket,
            "Saving result"
        );

        self.store
            .write(&self.result_bucket, &object_name, envelope.text.as_bytes())
            .await?;

        info!(delivery_id = %delivery_id, object = %object_name, "File saved");
        Ok(())
    }
}
