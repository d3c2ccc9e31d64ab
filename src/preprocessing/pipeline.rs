use crate::error::OcrError;
use image::DynamicImage;
use serde::Serialize;
use std::time::Instant;

use super::steps;

/// Timing information for a single preprocessing step
#[derive(Debug, Clone, Serialize)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Result of preprocessing including timing stats
#[derive(Debug, Clone, Serialize)]
pub struct PreprocessingResult {
    /// Preprocessed image (not serialized)
    #[serde(skip)]
    pub image: DynamicImage,
    /// Total preprocessing time in milliseconds
    pub total_time_ms: u64,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
}

/// The fixed preprocessing sequence applied before OCR.
///
/// Order matters; each stage consumes the previous stage's output:
/// resize (long side to 1800) -> grayscale -> CLAHE -> median denoise ->
/// unsharp mask -> Otsu binarization. The stage constants are empirical
/// defaults tuned against the OCR engine and are not configurable.
#[derive(Debug, Default)]
pub struct Pipeline;

impl Pipeline {
    pub fn new() -> Self {
        Self
    }

    /// Run every stage in order. Fails with `InvalidImage` before any stage
    /// runs if the buffer has a zero dimension.
    pub fn process(&self, image: DynamicImage) -> Result<PreprocessingResult, OcrError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(OcrError::InvalidImage);
        }

        let start = Instant::now();
        let mut steps_timing = Vec::new();

        let mut img = image;
        img = self.run_step("resize", img, &mut steps_timing, steps::resize::apply)?;
        img = self.run_step("grayscale", img, &mut steps_timing, steps::grayscale::apply)?;
        img = self.run_step("clahe", img, &mut steps_timing, steps::clahe::apply)?;
        img = self.run_step("denoise", img, &mut steps_timing, steps::denoise::apply)?;
        img = self.run_step("sharpen", img, &mut steps_timing, steps::sharpen::apply)?;
        img = self.run_step("threshold", img, &mut steps_timing, steps::threshold::apply)?;

        Ok(PreprocessingResult {
            image: img,
            total_time_ms: start.elapsed().as_millis() as u64,
            steps: steps_timing,
        })
    }

    fn run_step<F>(
        &self,
        name: &str,
        img: DynamicImage,
        timings: &mut Vec<StepTiming>,
        step_fn: F,
    ) -> Result<DynamicImage, OcrError>
    where
        F: FnOnce(DynamicImage) -> Result<DynamicImage, OcrError>,
    {
        let step_start = Instant::now();
        let result = step_fn(img)?;
        let time_ms = step_start.elapsed().as_millis() as u64;
        tracing::debug!(step = name, time_ms, "preprocessing step done");
        timings.push(StepTiming {
            name: name.to_string(),
            time_ms,
        });
        Ok(result)
    }
}
