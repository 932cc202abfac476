//! # Wire Contract
//!
//! Message formats exchanged between pipeline stages and with the hosting
//! runtime. The envelope framing here is the one compatibility-critical
//! contract in the crate: every queue payload is the base64 encoding of a
//! UTF-8 JSON object with exactly the keys `text`, `filename` and `lang`.

pub mod envelope;
pub mod storage_event;

pub use envelope::Envelope;
pub use storage_event::StorageObjectEvent;
