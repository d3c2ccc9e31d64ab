//! Region selection over the letterboxed preview.
//!
//! Selection is modeled as an explicit state value plus pure transition
//! functions, so the logic is independent of any particular UI event system:
//! the caller feeds pointer events in display coordinates together with the
//! current [`DisplayTransform`] and renders whatever comes back.

use crate::display::DisplayTransform;
use crate::error::OcrError;
use image::DynamicImage;

/// Drags smaller than this on either axis (in display pixels) are clicks,
/// not selections.
pub const MIN_DRAG_PX: f64 = 6.0;

/// A rectangular region of the original image, in original pixel
/// coordinates. Invariant: `x1 < x2 <= width` and `y1 < y2 <= height`.
/// "No region" is represented by `Option::None` at the call sites and means
/// the whole image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roi {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Roi {
    /// Build a region, validating the invariant against the image bounds.
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32, width: u32, height: u32) -> Result<Self, OcrError> {
        if x1 >= x2 || y1 >= y2 {
            return Err(OcrError::InvalidRegion(format!(
                "{},{},{},{} is not a rectangle with positive area",
                x1, y1, x2, y2
            )));
        }
        if x2 > width || y2 > height {
            return Err(OcrError::InvalidRegion(format!(
                "{},{},{},{} exceeds image bounds {}x{}",
                x1, y1, x2, y2, width, height
            )));
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }

    /// Extract this region from the image it was selected on.
    pub fn crop(&self, image: &DynamicImage) -> DynamicImage {
        image.crop_imm(self.x1, self.y1, self.width(), self.height())
    }
}

/// Where the selection gesture currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Dragging {
        start: (f64, f64),
    },
}

impl SelectionState {
    /// Pointer pressed at display coordinates `(x, y)`.
    ///
    /// A drag only starts on the rendered image; presses on the letterbox
    /// padding leave the state idle.
    pub fn press(self, transform: &DisplayTransform, x: f64, y: f64) -> SelectionState {
        if transform.is_inside_image(x, y) {
            SelectionState::Dragging { start: (x, y) }
        } else {
            SelectionState::Idle
        }
    }

    /// Pointer moved. While dragging, returns the overlay rectangle to draw
    /// as `(x0, y0, x1, y1)` in display coordinates, with the moving corner
    /// clamped onto the image.
    pub fn drag(self, transform: &DisplayTransform, x: f64, y: f64) -> Option<(f64, f64, f64, f64)> {
        match self {
            SelectionState::Dragging { start } => {
                let (cx, cy) = transform.clamp_to_image(x, y);
                Some((start.0, start.1, cx, cy))
            }
            SelectionState::Idle => None,
        }
    }

    /// Pointer released. Ends the gesture and yields the selected region,
    /// or `None` when the gesture did not produce one.
    pub fn release(
        self,
        transform: &DisplayTransform,
        x: f64,
        y: f64,
    ) -> (SelectionState, Option<Roi>) {
        match self {
            SelectionState::Dragging { start } => (
                SelectionState::Idle,
                finalize_selection(transform, start, (x, y)),
            ),
            SelectionState::Idle => (SelectionState::Idle, None),
        }
    }
}

/// Turn two display-space corner points into a region of the original image.
///
/// Both corners are clamped onto the image rectangle and sorted per axis.
/// An extent under [`MIN_DRAG_PX`] on either axis is treated as a click and
/// discarded. The corners are mapped through the transform and sorted again
/// (rounding during mapping can reorder them); a rectangle that collapses to
/// zero width or height after truncation is also discarded.
pub fn finalize_selection(
    transform: &DisplayTransform,
    a: (f64, f64),
    b: (f64, f64),
) -> Option<Roi> {
    let (ax, ay) = transform.clamp_to_image(a.0, a.1);
    let (bx, by) = transform.clamp_to_image(b.0, b.1);

    let (left, right) = if ax <= bx { (ax, bx) } else { (bx, ax) };
    let (top, bottom) = if ay <= by { (ay, by) } else { (by, ay) };

    if right - left < MIN_DRAG_PX || bottom - top < MIN_DRAG_PX {
        return None;
    }

    let (ox1, oy1) = transform.display_to_original(left, top);
    let (ox2, oy2) = transform.display_to_original(right, bottom);

    let (x1, x2) = if ox1 <= ox2 { (ox1, ox2) } else { (ox2, ox1) };
    let (y1, y2) = if oy1 <= oy2 { (oy1, oy2) } else { (oy2, oy1) };

    if x1 == x2 || y1 == y2 {
        return None;
    }

    Some(Roi { x1, y1, x2, y2 })
}
