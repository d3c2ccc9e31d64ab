use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("image is empty or has a zero dimension")]
    InvalidImage,

    #[error("invalid region: {0}")]
    InvalidRegion(String),

    #[error("unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("failed to load image: {0}")]
    ImageLoad(String),

    #[error("tesseract binary not found: {0}")]
    EngineUnavailable(String),

    #[error("OCR engine failed: {0}")]
    EngineFailed(String),

    #[error("internal error: {0}")]
    Internal(String),
}
