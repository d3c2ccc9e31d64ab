use crate::error::OcrError;
use image::{DynamicImage, GrayImage, Luma};

/// Maximum local contrast gain, relative to a flat histogram bin.
const CLIP_LIMIT: f32 = 2.0;
/// Tiles per axis.
const TILE_GRID_SIZE: u32 = 8;

/// Contrast-limited adaptive histogram equalization.
///
/// Equalizes intensity per tile of an 8x8 grid, clipping each tile histogram
/// at the limit and redistributing the excess before building the mapping,
/// which bounds how much local contrast (and noise) can be amplified. Pixels
/// are remapped by bilinear interpolation between the four nearest tile
/// mappings so tile seams stay invisible.
pub fn apply(image: DynamicImage) -> Result<DynamicImage, OcrError> {
    let gray = image.to_luma8();
    let enhanced = clahe(&gray, CLIP_LIMIT, TILE_GRID_SIZE);
    Ok(DynamicImage::ImageLuma8(enhanced))
}

fn clahe(img: &GrayImage, clip_limit: f32, grid: u32) -> GrayImage {
    let (width, height) = img.dimensions();

    // Tile size rounds up so the grid always covers the full image; small
    // images end up with fewer (or single-pixel) tiles.
    let tile_w = width.div_ceil(grid).max(1);
    let tile_h = height.div_ceil(grid).max(1);
    let tiles_x = width.div_ceil(tile_w) as usize;
    let tiles_y = height.div_ceil(tile_h) as usize;

    let luts = build_tile_luts(img, tile_w, tile_h, tiles_x, tiles_y, clip_limit);

    GrayImage::from_fn(width, height, |x, y| {
        let v = img.get_pixel(x, y).0[0] as usize;

        // Position in tile-index space, measured from tile centers
        let fx = (x as f32 + 0.5) / tile_w as f32 - 0.5;
        let fy = (y as f32 + 0.5) / tile_h as f32 - 0.5;

        let (tx0, tx1, wx) = interp_coords(fx, tiles_x);
        let (ty0, ty1, wy) = interp_coords(fy, tiles_y);

        let top = lerp(
            luts[ty0 * tiles_x + tx0][v] as f32,
            luts[ty0 * tiles_x + tx1][v] as f32,
            wx,
        );
        let bottom = lerp(
            luts[ty1 * tiles_x + tx0][v] as f32,
            luts[ty1 * tiles_x + tx1][v] as f32,
            wx,
        );

        Luma([lerp(top, bottom, wy).round().clamp(0.0, 255.0) as u8])
    })
}

/// One clipped-equalization lookup table per tile, row-major.
fn build_tile_luts(
    img: &GrayImage,
    tile_w: u32,
    tile_h: u32,
    tiles_x: usize,
    tiles_y: usize,
    clip_limit: f32,
) -> Vec<[u8; 256]> {
    let (width, height) = img.dimensions();
    let mut luts = Vec::with_capacity(tiles_x * tiles_y);

    for ty in 0..tiles_y as u32 {
        for tx in 0..tiles_x as u32 {
            let x0 = tx * tile_w;
            let y0 = ty * tile_h;
            let x1 = (x0 + tile_w).min(width);
            let y1 = (y0 + tile_h).min(height);

            let mut hist = [0u32; 256];
            for y in y0..y1 {
                for x in x0..x1 {
                    hist[img.get_pixel(x, y).0[0] as usize] += 1;
                }
            }

            let area = (x1 - x0) * (y1 - y0);
            luts.push(clipped_equalization_lut(&mut hist, area, clip_limit));
        }
    }

    luts
}

/// Clip the histogram, redistribute the excess evenly, and map through the
/// cumulative distribution.
fn clipped_equalization_lut(hist: &mut [u32; 256], area: u32, clip_limit: f32) -> [u8; 256] {
    let clip = ((clip_limit * area as f32 / 256.0) as u32).max(1);

    let mut excess = 0u32;
    for count in hist.iter_mut() {
        if *count > clip {
            excess += *count - clip;
            *count = clip;
        }
    }

    let bonus = excess / 256;
    if bonus > 0 {
        for count in hist.iter_mut() {
            *count += bonus;
        }
    }
    // Spread the residual over evenly spaced bins rather than piling it at
    // the low end, which would bias the mapping toward white.
    let residual = (excess % 256) as usize;
    if residual > 0 {
        let step = (256 / residual).max(1);
        for i in (0..256).step_by(step).take(residual) {
            hist[i] += 1;
        }
    }

    let mut lut = [0u8; 256];
    let mut cdf = 0u32;
    for (i, &count) in hist.iter().enumerate() {
        cdf += count;
        lut[i] = ((cdf as u64 * 255) / area as u64).min(255) as u8;
    }

    lut
}

/// Neighbouring tile indices and interpolation weight for one axis.
/// Positions before the first tile center or past the last collapse onto the
/// border tile with weight zero.
fn interp_coords(f: f32, tiles: usize) -> (usize, usize, f32) {
    if f <= 0.0 || tiles == 1 {
        (0, 0, 0.0)
    } else if f >= (tiles - 1) as f32 {
        (tiles - 1, tiles - 1, 0.0)
    } else {
        let i = f.floor() as usize;
        (i, i + 1, f - f.floor())
    }
}

fn lerp(a: f32, b: f32, w: f32) -> f32 {
    a + (b - a) * w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_preserved() {
        let img = GrayImage::new(100, 37);
        let result = apply(DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!((result.width(), result.height()), (100, 37));
    }

    #[test]
    fn test_uniform_image_stays_uniform() {
        // Every tile sees the same histogram, so every pixel maps identically
        let img = GrayImage::from_pixel(64, 64, Luma([128]));
        let result = apply(DynamicImage::ImageLuma8(img)).unwrap().to_luma8();

        let first = result.get_pixel(0, 0).0[0];
        assert!(result.pixels().all(|p| p.0[0] == first));
        // Mid-gray should land near mid-gray, not at an extreme
        assert!((first as i32 - 128).abs() <= 12, "drifted to {}", first);
    }

    #[test]
    fn test_clip_limit_bounds_contrast_gain() {
        // Checkerboard of two close values: every tile sees both. Plain
        // equalization would blast this to near-black/near-white; the clip
        // limit keeps the gain bounded while never reducing the spread.
        let img = GrayImage::from_fn(64, 64, |x, y| {
            if (x + y) % 2 == 0 {
                Luma([120])
            } else {
                Luma([136])
            }
        });

        let result = apply(DynamicImage::ImageLuma8(img)).unwrap().to_luma8();
        let (min, max) = min_max(&result);
        let spread = max - min;
        assert!(spread >= 14, "spread collapsed to {}", spread);
        assert!(spread <= 64, "spread {} exceeds clipped gain", spread);
    }

    #[test]
    fn test_dark_text_stays_darker_than_background() {
        let img = GrayImage::from_fn(64, 64, |_, y| {
            if (28..36).contains(&y) {
                Luma([50])
            } else {
                Luma([200])
            }
        });

        let result = apply(DynamicImage::ImageLuma8(img)).unwrap().to_luma8();

        let band_mean = region_mean(&result, 28, 36);
        let background_mean = region_mean(&result, 0, 28);
        assert!(
            band_mean + 30.0 < background_mean,
            "band {} vs background {}",
            band_mean,
            background_mean
        );
    }

    #[test]
    fn test_tiny_image_does_not_panic() {
        let img = GrayImage::from_pixel(3, 2, Luma([77]));
        let result = apply(DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!((result.width(), result.height()), (3, 2));
    }

    fn min_max(img: &GrayImage) -> (i32, i32) {
        let mut min = 255;
        let mut max = 0;
        for p in img.pixels() {
            min = min.min(p.0[0] as i32);
            max = max.max(p.0[0] as i32);
        }
        (min, max)
    }

    fn region_mean(img: &GrayImage, y0: u32, y1: u32) -> f64 {
        let mut sum = 0u64;
        let mut n = 0u64;
        for y in y0..y1 {
            for x in 0..img.width() {
                sum += img.get_pixel(x, y).0[0] as u64;
                n += 1;
            }
        }
        sum as f64 / n as f64
    }
}
