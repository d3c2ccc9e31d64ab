use crate::error::OcrError;
use image::{DynamicImage, GrayImage, Luma};
use imageproc::filter::gaussian_blur_f32;

/// Blur kernel width for the mask.
const BLUR_SIGMA: f32 = 1.0;
/// Weight of the original image.
const SHARPEN_WEIGHT: f32 = 1.6;
/// Weight of the blurred copy (negative: it is subtracted).
const BLUR_WEIGHT: f32 = -0.6;

/// Unsharp masking: subtract a blurred copy from a boosted original.
///
/// `sharp = gray*1.6 + blurred*(-0.6)`, clamped to [0, 255]. Accentuates
/// high-frequency content — character strokes — relative to the blur.
pub fn apply(image: DynamicImage) -> Result<DynamicImage, OcrError> {
    let gray = image.to_luma8();
    let blurred = gaussian_blur_f32(&gray, BLUR_SIGMA);

    let sharpened = GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let g = gray.get_pixel(x, y).0[0] as f32;
        let b = blurred.get_pixel(x, y).0[0] as f32;
        let v = g * SHARPEN_WEIGHT + b * BLUR_WEIGHT;
        Luma([v.round().clamp(0.0, 255.0) as u8])
    });

    Ok(DynamicImage::ImageLuma8(sharpened))
}
