use crate::engine::locate_tesseract;
use crate::error::OcrError;
use crate::language::Language;
use std::path::PathBuf;

/// Startup configuration, resolved once and passed down by value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resolved path to the tesseract binary.
    pub tesseract_cmd: PathBuf,
    /// Recognition language passed to the engine.
    pub language: Language,
}

impl Config {
    /// Resolve configuration from command-line input. Fails fast when the
    /// engine binary cannot be located or the language code is unknown, so
    /// both are reported before any image work starts.
    pub fn resolve(tesseract: Option<PathBuf>, lang: &str) -> Result<Self, OcrError> {
        let language = Language::from_code(lang)?;
        let tesseract_cmd = locate_tesseract(tesseract.as_deref())?;

        Ok(Self {
            tesseract_cmd,
            language,
        })
    }
}
