//! End-to-end tests over the library: a selection gesture made on a scaled
//! preview, mapped back to original pixels, cropped, and pushed through the
//! full preprocessing pipeline. No external OCR binary is involved.

use image::{DynamicImage, Rgb, RgbImage};
use snipocr::display::DisplayTransform;
use snipocr::error::OcrError;
use snipocr::preprocessing::Pipeline;
use snipocr::selection::SelectionState;

/// A light page with a block of dark horizontal "text" bars.
fn synthetic_page(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |_, y| {
        if y % 10 >= 4 && y % 10 <= 6 && y > height / 4 && y < 3 * height / 4 {
            Rgb([30, 30, 35])
        } else {
            Rgb([235, 232, 225])
        }
    });
    DynamicImage::ImageRgb8(img)
}

#[test]
fn selection_on_preview_crops_exact_original_pixels() {
    // 1600x1200 image shown in an 800x600 canvas: half scale, no padding
    let page = synthetic_page(1600, 1200);
    let transform = DisplayTransform::fit(1600, 1200, 800, 600);

    let state = SelectionState::Idle.press(&transform, 100.0, 75.0);
    let (state, roi) = state.release(&transform, 500.0, 375.0);
    assert_eq!(state, SelectionState::Idle);

    let roi = roi.expect("a 400x300 display drag is a selection");
    assert_eq!((roi.x1, roi.y1, roi.x2, roi.y2), (200, 150, 1000, 750));

    let cropped = roi.crop(&page);
    assert_eq!((cropped.width(), cropped.height()), (800, 600));
}

#[test]
fn cropped_region_runs_through_the_whole_pipeline() {
    let page = synthetic_page(1600, 1200);
    let transform = DisplayTransform::fit(1600, 1200, 800, 600);

    let state = SelectionState::Idle.press(&transform, 200.0, 150.0);
    let (_, roi) = state.release(&transform, 400.0, 300.0);
    let cropped = roi.unwrap().crop(&page);

    let result = Pipeline::new().process(cropped).unwrap();

    // 400x300 crop upscales so its long side is exactly 1800
    assert_eq!((result.image.width(), result.image.height()), (1800, 1350));

    // Binary output invariant holds after every stage has run
    let gray = result.image.to_luma8();
    assert!(gray.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));

    // Both tones survive: some text pixels, some background pixels
    let black = gray.pixels().filter(|p| p.0[0] == 0).count();
    assert!(black > 0 && black < (1800 * 1350));
}

#[test]
fn full_image_path_without_selection() {
    // No gesture: caller passes the whole image. Long side >= 1800 means
    // dimensions survive preprocessing untouched.
    let page = synthetic_page(1800, 900);
    let result = Pipeline::new().process(page).unwrap();
    assert_eq!((result.image.width(), result.image.height()), (1800, 900));
    assert_eq!(result.steps.len(), 6);
}

#[test]
fn click_instead_of_drag_selects_nothing() {
    let transform = DisplayTransform::fit(1600, 1200, 800, 600);
    let state = SelectionState::Idle.press(&transform, 100.0, 100.0);
    let (_, roi) = state.release(&transform, 104.0, 103.0);
    assert!(roi.is_none());
}

#[test]
fn empty_buffer_is_rejected_before_processing() {
    let empty = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
    assert!(matches!(
        Pipeline::new().process(empty),
        Err(OcrError::InvalidImage)
    ));
}
