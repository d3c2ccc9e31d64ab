use crate::error::OcrError;
use image::{imageops::FilterType, DynamicImage};

/// Target length of the longer image side. The OCR engine needs a minimum
/// effective DPI for typical font sizes; small crops are the common failure
/// case, so anything shorter gets upscaled to exactly this.
const TARGET_LONG_SIDE: u32 = 1800;

/// Normalize resolution by the longest side.
///
/// Images whose long side is already at or above the target pass through
/// untouched; smaller ones are upscaled uniformly with bicubic
/// interpolation so the long side lands exactly on the target.
pub fn apply(image: DynamicImage) -> Result<DynamicImage, OcrError> {
    let (width, height) = (image.width(), image.height());
    let long_side = width.max(height);

    if long_side >= TARGET_LONG_SIDE {
        return Ok(image);
    }

    let scale = TARGET_LONG_SIDE as f64 / long_side as f64;
    let (new_width, new_height) = if width >= height {
        (TARGET_LONG_SIDE, scaled(height, scale))
    } else {
        (scaled(width, scale), TARGET_LONG_SIDE)
    };

    Ok(image.resize_exact(new_width, new_height, FilterType::CatmullRom))
}

fn scaled(side: u32, scale: f64) -> u32 {
    ((side as f64 * scale).round() as u32).max(1)
}
