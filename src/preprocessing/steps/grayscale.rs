use crate::error::OcrError;
use image::DynamicImage;

/// Reduce color to single-channel luminance with the standard weighting.
pub fn apply(image: DynamicImage) -> Result<DynamicImage, OcrError> {
    Ok(DynamicImage::ImageLuma8(image.to_luma8()))
}
