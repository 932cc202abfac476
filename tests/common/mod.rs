//! Mock capability implementations for testing
//!
//! In-memory stand-ins for the OCR, translation, storage and queue
//! boundaries. Each mock tracks its calls through shared state so tests can
//! assert on side effects without any real backend. Clones share state, so a
//! test can keep a handle while the handler owns another.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ocr_pipeline::capabilities::{
    CapabilityError, CapabilityResult, ObjectStore, OcrCapability, QueuePublisher, TextDetection,
    TranslateCapability,
};

/// In-memory object store keyed by `(bucket, name)`.
#[derive(Debug, Default, Clone)]
pub struct MockObjectStore {
    objects: Arc<Mutex<HashMap<(String, String), Vec<u8>>>>,
    write_count: Arc<Mutex<usize>>,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object, e.g. the uploaded image the OCR stage fetches.
    pub fn seed(&self, bucket: &str, name: &str, bytes: &[u8]) {
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), name.to_string()), bytes.to_vec());
    }

    pub fn get(&self, bucket: &str, name: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), name.to_string()))
            .cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn write_count(&self) -> usize {
        *self.write_count.lock().unwrap()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn fetch(&self, bucket: &str, name: &str) -> CapabilityResult<Vec<u8>> {
        self.get(bucket, name)
            .ok_or_else(|| CapabilityError::storage(bucket, name, "object not found"))
    }

    async fn write(&self, bucket: &str, name: &str, bytes: &[u8]) -> CapabilityResult<()> {
        *self.write_count.lock().unwrap() += 1;
        self.seed(bucket, name, bytes);
        Ok(())
    }
}

/// Queue publisher recording every published payload.
#[derive(Debug, Clone)]
pub struct MockQueue {
    name: String,
    published: Arc<Mutex<Vec<Vec<u8>>>>,
    fail: bool,
}

impl MockQueue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            published: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// A queue whose publishes always fail.
    pub fn failing(name: impl Into<String>) -> Self {
        Self {
            fail: true,
            ..Self::new(name)
        }
    }

    pub fn published(&self) -> Vec<Vec<u8>> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueuePublisher for MockQueue {
    async fn publish(&self, payload: &[u8]) -> CapabilityResult<()> {
        if self.fail {
            return Err(CapabilityError::queue_publish(&self.name, "simulated outage"));
        }
        self.published.lock().unwrap().push(payload.to_vec());
        Ok(())
    }

    fn queue_name(&self) -> &str {
        &self.name
    }
}

/// OCR engine with a fixed scripted response.
#[derive(Debug, Clone)]
pub struct MockOcr {
    detection: Option<TextDetection>,
    fail: bool,
}

impl MockOcr {
    pub fn detecting(text: &str, language_code: &str) -> Self {
        Self {
            detection: Some(TextDetection {
                text: text.to_string(),
                language_code: language_code.to_string(),
            }),
            fail: false,
        }
    }

    pub fn detecting_nothing() -> Self {
        Self {
            detection: None,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            detection: None,
            fail: true,
        }
    }
}

#[async_trait]
impl OcrCapability for MockOcr {
    async fn detect_text(&self, _image: &[u8]) -> CapabilityResult<Option<TextDetection>> {
        if self.fail {
            return Err(CapabilityError::ocr("simulated backend failure"));
        }
        Ok(self.detection.clone())
    }
}

/// Translation service with a scripted response, recording its calls.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    translated: Option<String>,
    fail: bool,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockTranslator {
    pub fn returning(translated: &str) -> Self {
        Self {
            translated: Some(translated.to_string()),
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn returning_nothing() -> Self {
        Self {
            translated: None,
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            translated: None,
            fail: true,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// `(text, target_lang)` pairs this mock was called with.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslateCapability for MockTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> CapabilityResult<Option<String>> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), target_lang.to_string()));
        if self.fail {
            return Err(CapabilityError::translate("simulated outage"));
        }
        Ok(self.translated.clone())
    }
}
