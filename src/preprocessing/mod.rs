//! Image preprocessing for OCR
//!
//! A fixed sequence of stages that turns a captured color image into a
//! binarized one the OCR engine reads well.

pub mod pipeline;
pub mod steps;

pub use pipeline::{Pipeline, PreprocessingResult, StepTiming};
