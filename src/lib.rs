//! Core of a desktop "snip and OCR" utility.
//!
//! The two precise pieces live here: the fixed image preprocessing pipeline
//! that prepares a capture for Tesseract ([`preprocessing`]), and the
//! coordinate mapping between a letterboxed on-screen preview and the
//! original pixel buffer ([`display`], [`selection`]). Everything around
//! them — engine invocation, configuration, the CLI front end — is the thin
//! integration layer a GUI would otherwise provide.

pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod language;
pub mod preprocessing;
pub mod selection;

pub use display::DisplayTransform;
pub use error::OcrError;
pub use language::Language;
pub use selection::{Roi, SelectionState};
