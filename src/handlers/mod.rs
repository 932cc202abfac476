//! # Pipeline Stage Handlers
//!
//! The three stateless handlers that make up the pipeline, in hand-off
//! order:
//!
//! 1. [`ImageProcessor`] — storage upload event -> OCR -> fan-out publish
//! 2. [`TextTranslator`] — queue delivery -> translate -> republish
//! 3. [`ResultSaver`] — queue delivery -> storage write (terminal)
//!
//! Each handler is a plain async function over one delivery, held together
//! with constructor-injected capability handles. Handlers carry no mutable
//! state, so one instance can serve concurrent invocations; all coordination
//! between stages goes through the queue transport. An event-delivery
//! adapter (cloud functions shim, queue consumer loop, test harness) owns
//! acknowledgment policy: `Err` means the delivery was rejected or the
//! capability call failed, and redelivery is the transport's decision.

pub mod image_processor;
pub mod result_saver;
pub mod text_translator;

pub use image_processor::ImageProcessor;
pub use result_saver::ResultSaver;
pub use text_translator::TextTranslator;
