//! EMU to pixel conversion.
//!
//! Two modes are supported. Fixed mode maps 9525 EMU to one pixel (96 DPI).
//! Canvas mode maps the slide's real extent onto a 1280x720 canvas, so every
//! deck lands on the same editor surface regardless of its page setup.

use serde::{Deserialize, Serialize};

/// EMU per pixel at 96 DPI.
pub const EMU_PER_PIXEL: f64 = 9525.0;

/// EMU per typographic point.
pub const EMU_PER_POINT: f64 = 12700.0;

/// Canonical canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 1280;

/// Canonical canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 720;

/// Default 16:9 slide width (13.333in).
pub const DEFAULT_SLIDE_WIDTH_EMU: i64 = 12_192_000;

/// Default 16:9 slide height (7.5in).
pub const DEFAULT_SLIDE_HEIGHT_EMU: i64 = 6_858_000;

/// Fixed-ratio conversion: `round(emu / 9525)`.
pub fn emu_to_pixel(emu: i64) -> i64 {
    (emu as f64 / EMU_PER_PIXEL).round() as i64
}

/// Proportional conversion onto the canvas width.
pub fn emu_to_pixel_x(emu: i64, slide_width_emu: i64) -> i64 {
    if slide_width_emu <= 0 {
        return emu_to_pixel(emu);
    }
    (emu as f64 / slide_width_emu as f64 * CANVAS_WIDTH as f64).round() as i64
}

/// Proportional conversion onto the canvas height.
pub fn emu_to_pixel_y(emu: i64, slide_height_emu: i64) -> i64 {
    if slide_height_emu <= 0 {
        return emu_to_pixel(emu);
    }
    (emu as f64 / slide_height_emu as f64 * CANVAS_HEIGHT as f64).round() as i64
}

/// Slide extent in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSize {
    pub width: i64,
    pub height: i64,
}

impl Default for SlideSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_SLIDE_WIDTH_EMU,
            height: DEFAULT_SLIDE_HEIGHT_EMU,
        }
    }
}

/// How EMU coordinates are mapped to output pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateMode {
    /// Proportional mapping onto the 1280x720 canvas
    #[default]
    Canvas,
    /// 9525 EMU per pixel
    Fixed,
}

/// Unit converter bound to one slide size and mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConverter {
    pub mode: CoordinateMode,
    pub slide: SlideSize,
}

impl UnitConverter {
    pub fn new(mode: CoordinateMode, slide: SlideSize) -> Self {
        Self { mode, slide }
    }

    /// Horizontal position or length in pixels.
    pub fn x(&self, emu: i64) -> i64 {
        match self.mode {
            CoordinateMode::Canvas => emu_to_pixel_x(emu, self.slide.width),
            CoordinateMode::Fixed => emu_to_pixel(emu),
        }
    }

    /// Vertical position or length in pixels.
    pub fn y(&self, emu: i64) -> i64 {
        match self.mode {
            CoordinateMode::Canvas => emu_to_pixel_y(emu, self.slide.height),
            CoordinateMode::Fixed => emu_to_pixel(emu),
        }
    }

    /// Output canvas size in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        match self.mode {
            CoordinateMode::Canvas => (CANVAS_WIDTH, CANVAS_HEIGHT),
            CoordinateMode::Fixed => (
                emu_to_pixel(self.slide.width).max(0) as u32,
                emu_to_pixel(self.slide.height).max(0) as u32,
            ),
        }
    }

    /// Ratio of output pixels to 96-DPI pixels along the horizontal axis.
    pub fn scale(&self) -> f64 {
        match self.mode {
            CoordinateMode::Canvas if self.slide.width > 0 => {
                CANVAS_WIDTH as f64 * EMU_PER_PIXEL / self.slide.width as f64
            }
            _ => 1.0,
        }
    }

    /// Typographic points to output pixels, rounded to one decimal.
    pub fn points_to_px(&self, points: f64) -> f64 {
        let px = points * 96.0 / 72.0 * self.scale();
        (px * 10.0).round() / 10.0
    }

    /// Stroke width in EMU to output pixels, never below a hairline.
    pub fn stroke_px(&self, emu: i64) -> f64 {
        let px = emu as f64 / EMU_PER_PIXEL * self.scale();
        ((px * 100.0).round() / 100.0).max(if emu > 0 { 0.5 } else { 0.0 })
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new(CoordinateMode::default(), SlideSize::default())
    }
}
