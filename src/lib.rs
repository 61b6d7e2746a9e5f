//! Standards-compliant QR code module-matrix decoder.
//!
//! Given a clean, oriented binary module grid this crate recovers the
//! symbol's version and format, reads and unmasks its data modules,
//! corrects them with Reed-Solomon, and parses the resulting bit stream
//! into a message. Detecting and sampling that grid out of a camera
//! frame or image is outside this crate's scope; see `src/bin/qr_decode.rs`
//! for where that handoff happens.

pub(crate) mod debug;
pub mod decoder;
pub mod models;

pub use decoder::{decode, DecodeError};
pub use models::{BitMatrix, ECLevel, MaskPattern};
