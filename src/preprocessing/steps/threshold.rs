use crate::error::OcrError;
use image::{DynamicImage, GrayImage, Luma};
use imageproc::contrast::otsu_level;

/// Binarize with a single global Otsu threshold.
///
/// Otsu picks the level that minimizes intra-class intensity variance given
/// the histogram; everything above it becomes white, the rest black. The
/// output contains exactly the two values {0, 255}.
pub fn apply(image: DynamicImage) -> Result<DynamicImage, OcrError> {
    let gray = image.to_luma8();
    let level = otsu_level(&gray);

    let binarized = GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y).0[0] > level {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    });

    Ok(DynamicImage::ImageLuma8(binarized))
}
