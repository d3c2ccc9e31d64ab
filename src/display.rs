//! Mapping between original image pixels and the scaled on-screen preview.
//!
//! The preview is letterboxed: the image is scaled uniformly to fit inside
//! the canvas and centered, leaving padding on at most one axis. All values
//! here are derived from the original and canvas dimensions; the struct is a
//! plain value recomputed on every resize or image load.

/// Derived display geometry for one (image, canvas) pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    /// Uniform scale factor, `min(canvas_w/original_w, canvas_h/original_h)`.
    pub scale: f64,
    /// Width of the scaled image on the canvas, at least 1.
    pub display_width: u32,
    /// Height of the scaled image on the canvas, at least 1.
    pub display_height: u32,
    /// Left edge of the scaled image within the canvas.
    pub offset_x: u32,
    /// Top edge of the scaled image within the canvas.
    pub offset_y: u32,
    pub original_width: u32,
    pub original_height: u32,
}

impl DisplayTransform {
    /// Fit an image into a canvas, preserving aspect ratio and centering.
    ///
    /// Both the image and the canvas must have positive dimensions.
    pub fn fit(
        original_width: u32,
        original_height: u32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Self {
        let scale = f64::min(
            canvas_width as f64 / original_width as f64,
            canvas_height as f64 / original_height as f64,
        );

        let display_width = ((original_width as f64 * scale) as u32).max(1);
        let display_height = ((original_height as f64 * scale) as u32).max(1);

        Self {
            scale,
            display_width,
            display_height,
            offset_x: canvas_width.saturating_sub(display_width) / 2,
            offset_y: canvas_height.saturating_sub(display_height) / 2,
            original_width,
            original_height,
        }
    }

    /// Map a point in original image space onto the canvas.
    pub fn original_to_display(&self, ox: f64, oy: f64) -> (f64, f64) {
        (
            ox * self.scale + self.offset_x as f64,
            oy * self.scale + self.offset_y as f64,
        )
    }

    /// Map a canvas point back into original pixel coordinates.
    ///
    /// The point is first clamped into the letterboxed rectangle and the
    /// result is clamped into `[0, original_width] x [0, original_height]`
    /// before truncation, so the output is always inside the image no matter
    /// how far outside the canvas the input lies.
    pub fn display_to_original(&self, dx: f64, dy: f64) -> (u32, u32) {
        let (cx, cy) = self.clamp_to_image(dx, dy);

        let ox = (cx - self.offset_x as f64) / self.scale;
        let oy = (cy - self.offset_y as f64) / self.scale;

        (
            ox.clamp(0.0, self.original_width as f64) as u32,
            oy.clamp(0.0, self.original_height as f64) as u32,
        )
    }

    /// Clamp a canvas point into the letterboxed image rectangle.
    pub fn clamp_to_image(&self, dx: f64, dy: f64) -> (f64, f64) {
        let left = self.offset_x as f64;
        let top = self.offset_y as f64;
        (
            dx.clamp(left, left + self.display_width as f64),
            dy.clamp(top, top + self.display_height as f64),
        )
    }

    /// Whether a canvas point lies on the rendered image (edges inclusive)
    /// rather than the letterbox padding.
    pub fn is_inside_image(&self, dx: f64, dy: f64) -> bool {
        let left = self.offset_x as f64;
        let top = self.offset_y as f64;
        dx >= left
            && dx <= left + self.display_width as f64
            && dy >= top
            && dy <= top + self.display_height as f64
    }
}
