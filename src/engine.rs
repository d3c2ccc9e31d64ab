//! Boundary to the external Tesseract binary.
//!
//! The engine is a black box: the preprocessed image goes out as a temporary
//! PNG, `tesseract <file> stdout` comes back with the text. The binary's
//! location is resolved once at startup and injected through [`Config`];
//! nothing in here searches the environment after construction.

use crate::config::Config;
use crate::error::OcrError;
use crate::language::Language;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Engine mode flags, fixed to the values the application was tuned with:
/// default engine mode, "assume a uniform block of text" page segmentation.
const OEM: &str = "3";
const PSM: &str = "6";

pub struct TesseractEngine {
    command: PathBuf,
    language: Language,
}

impl TesseractEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            command: config.tesseract_cmd.clone(),
            language: config.language,
        }
    }

    /// Run recognition on an (already preprocessed) image and return the
    /// extracted text, trimmed of trailing whitespace.
    pub fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let input = tempfile::Builder::new()
            .prefix("snipocr-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrError::Internal(format!("failed to create temp file: {}", e)))?;

        image
            .save(input.path())
            .map_err(|e| OcrError::Internal(format!("failed to write temp image: {}", e)))?;

        tracing::debug!(
            input = %input.path().display(),
            language = %self.language,
            "invoking tesseract"
        );

        let output = Command::new(&self.command)
            .arg(input.path())
            .arg("stdout")
            .args(["-l", self.language.code()])
            .args(["--oem", OEM])
            .args(["--psm", PSM])
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    OcrError::EngineUnavailable(self.command.display().to_string())
                }
                _ => OcrError::EngineFailed(format!("failed to run tesseract: {}", e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::EngineFailed(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .to_string())
    }
}

/// Resolve the tesseract binary once, at startup.
///
/// An explicit path wins and is only checked for existence. Otherwise every
/// `PATH` entry is searched; on Windows the two conventional install
/// directories are tried as a fallback, since the installer does not always
/// update `PATH`.
pub fn locate_tesseract(explicit: Option<&Path>) -> Result<PathBuf, OcrError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(OcrError::EngineUnavailable(path.display().to_string()));
    }

    let binary = if cfg!(windows) { "tesseract.exe" } else { "tesseract" };

    if let Some(paths) = std::env::var_os("PATH") {
        for dir in std::env::split_paths(&paths) {
            let candidate = dir.join(binary);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    #[cfg(windows)]
    {
        for dir in [
            r"C:\Program Files\Tesseract-OCR",
            r"C:\Program Files (x86)\Tesseract-OCR",
        ] {
            let candidate = Path::new(dir).join(binary);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(OcrError::EngineUnavailable(
        "install Tesseract OCR and make sure it is in PATH, or pass --tesseract".to_string(),
    ))
}
