//! Drawing canvas: a framebuffer plus the current draw color.
//!
//! [`Canvas`] is the stateful front end over the pure [`render`](crate::render)
//! and [`transform`](crate::transform) functions.

use crate::color::Rgb;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::output::PpmEncoder;
use crate::render::{self, Drawable};
use crate::transform::Transform;
use std::path::Path;
use tracing::{debug, warn};

/// An addressable RGB canvas with a current draw color.
///
/// Not internally synchronized: share across threads behind a `Mutex`.
///
/// # Example
///
/// ```
/// use raster_canvas::prelude::*;
///
/// let mut canvas = Canvas::new(10, 10).unwrap();
/// canvas.set_color(Rgb::RED);
/// canvas.draw_line(0, 0, 9, 9);
/// assert_eq!(canvas.get_pixel(9, 9), Some(Rgb::RED));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    fb: Framebuffer,
    color: Rgb,
}

impl Canvas {
    /// Fill used by [`Canvas::clear`].
    pub const CLEAR_COLOR: Rgb = Rgb::BLACK;

    /// Draw color of a new canvas.
    pub const DEFAULT_COLOR: Rgb = Rgb::WHITE;

    /// Create a canvas filled with white, drawing in white.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions)
    /// if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self::from_framebuffer(Framebuffer::new(width, height)?))
    }

    /// Wrap an existing framebuffer, drawing in [`Self::DEFAULT_COLOR`].
    #[must_use]
    pub fn from_framebuffer(fb: Framebuffer) -> Self {
        Self {
            fb,
            color: Self::DEFAULT_COLOR,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.fb.width()
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.fb.height()
    }

    /// Current draw color.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Read-only view of the pixel buffer.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Consume the canvas, returning its buffer.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.fb
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.fb.get_pixel(x, y)
    }

    // ========================================================================
    // State
    // ========================================================================

    /// Fill every pixel with [`Self::CLEAR_COLOR`]. The draw color is unchanged.
    pub fn clear(&mut self) {
        self.fb.clear(Self::CLEAR_COLOR);
    }

    /// Set the color used by subsequent drawing calls.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Write the current color at `(x, y)`. Out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        self.fb.set_pixel(x, y, self.color);
    }

    // ========================================================================
    // Primitives
    // ========================================================================

    /// Draw any [`Drawable`] in the current color.
    pub fn draw<D: Drawable + ?Sized>(&mut self, shape: &D) {
        shape.draw(&mut self.fb, self.color);
    }

    /// Bresenham line from `(x0, y0)` to `(x1, y1)`, endpoints included.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        render::draw_line(&mut self.fb, x0, y0, x1, y1, self.color);
    }

    /// Midpoint circle outline centered at `(cx, cy)`.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, r: i32) {
        render::draw_circle(&mut self.fb, cx, cy, r, self.color);
    }

    /// Cubic Bézier through control points `p0..p3`.
    pub fn draw_bezier(
        &mut self,
        p0x: i32,
        p0y: i32,
        p1x: i32,
        p1y: i32,
        p2x: i32,
        p2y: i32,
        p3x: i32,
        p3y: i32,
    ) {
        render::draw_bezier(
            &mut self.fb,
            Point::new(p0x, p0y),
            Point::new(p1x, p1y),
            Point::new(p2x, p2y),
            Point::new(p3x, p3y),
            self.color,
        );
    }

    /// Cubic Hermite from `p0` to `p1` with tangents `t0` and `t1`.
    pub fn draw_hermite(
        &mut self,
        p0x: i32,
        p0y: i32,
        p1x: i32,
        p1y: i32,
        t0x: i32,
        t0y: i32,
        t1x: i32,
        t1y: i32,
    ) {
        render::draw_hermite(
            &mut self.fb,
            Point::new(p0x, p0y),
            Point::new(p1x, p1y),
            Point::new(t0x, t0y),
            Point::new(t1x, t1y),
            self.color,
        );
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Replace the buffer with `transform` applied to it.
    pub fn apply(&mut self, transform: Transform) {
        debug!(?transform, width = self.width(), height = self.height(), "applying transform");
        self.fb = transform.apply(&self.fb);
    }

    /// Shift content by `(dx, dy)`; vacated pixels become black.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.apply(Transform::Translate { dx, dy });
    }

    /// Rotate about the center by `angle` radians (forward-mapped, see [`Transform::Rotate`]).
    pub fn rotate(&mut self, angle: f64) {
        self.apply(Transform::Rotate { angle });
    }

    /// Scale about the center by `scale` (see [`Transform::Dilate`]).
    pub fn dilate(&mut self, scale: f64) {
        self.apply(Transform::Dilate { scale });
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Write the canvas as a plain-text PPM file.
    ///
    /// On failure the error is logged and returned; the canvas is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be created or written.
    pub fn save_as_text<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        match PpmEncoder::write_to_file(&self.fb, path) {
            Ok(()) => {
                debug!(path = %path.display(), pixels = self.fb.pixel_count(), "saved canvas");
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "error saving file");
                Err(e)
            }
        }
    }
}
