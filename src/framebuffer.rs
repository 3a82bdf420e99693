//! Core framebuffer for pixel rendering.
//!
//! A dense, row-major buffer of [`Rgb`] pixels. Every write is bounds-checked;
//! writes outside `[0, width) x [0, height)` are no-ops and never report an error.

use crate::color::Rgb;
use crate::error::{Error, Result};

/// Row-major RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Exactly `width * height` pixels, indexed by `y * width + x`.
    pixels: Vec<Rgb>,
}

impl Framebuffer {
    /// Background color of a freshly constructed framebuffer.
    pub const BACKGROUND: Rgb = Rgb::WHITE;

    /// Create a new framebuffer filled with [`Self::BACKGROUND`].
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_canvas::color::Rgb;
    /// use raster_canvas::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.get_pixel(0, 0), Some(Rgb::WHITE));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Self::BACKGROUND)
    }

    /// Create a new framebuffer with every pixel set to `color`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        Ok(Self::filled_unchecked(width, height, color))
    }

    /// Same as [`Framebuffer::filled`] for dimensions taken from an existing buffer.
    pub(crate) fn filled_unchecked(width: u32, height: u32, color: Rgb) -> Self {
        debug_assert!(width > 0 && height > 0);
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![color; size],
        }
    }

    /// Build a framebuffer from existing row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        if width == 0 || height == 0 || pixels.len() != (width as usize) * (height as usize) {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the pixels as a row-major slice.
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[Rgb]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Check whether `(x, y)` lies inside the buffer.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(i64::from(x), i64::from(y)).map(|idx| self.pixels[idx])
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(idx) = self.index(i64::from(x), i64::from(y)) {
            self.pixels[idx] = color;
        }
    }

    /// Count the pixels equal to `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Calculate the pixel index for an in-bounds coordinate.
    #[inline]
    pub(crate) fn index(&self, x: i64, y: i64) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Mutable pixel access for whole-buffer producers in this crate.
    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert_eq!(fb.pixels().len(), 5000);
    }

    #[test]
    fn test_new_is_white() {
        let fb = Framebuffer::new(7, 3).unwrap();
        assert!(fb.pixels().iter().all(|&p| p == Rgb::WHITE));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgb::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgb::RED));
            }
        }
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgb::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgb::BLUE));

        // Out of bounds
        assert_eq!(fb.get_pixel(100, 100), None);
        assert_eq!(fb.get_pixel(-1, 0), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_noop() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        let before = fb.clone();

        fb.set_pixel(-1, 0, Rgb::RED);
        fb.set_pixel(0, -1, Rgb::RED);
        fb.set_pixel(4, 0, Rgb::RED);
        fb.set_pixel(0, 4, Rgb::RED);
        fb.set_pixel(i32::MIN, i32::MAX, Rgb::RED);

        assert_eq!(fb, before);
    }

    #[test]
    fn test_row_major_layout() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.set_pixel(2, 1, Rgb::GREEN);
        assert_eq!(fb.pixels()[5], Rgb::GREEN);
        assert_eq!(fb.row(1).unwrap()[2], Rgb::GREEN);
        assert!(fb.row(2).is_none());
    }

    #[test]
    fn test_from_pixels_length_check() {
        assert!(Framebuffer::from_pixels(2, 2, vec![Rgb::BLACK; 4]).is_ok());
        assert!(Framebuffer::from_pixels(2, 2, vec![Rgb::BLACK; 3]).is_err());
    }

    #[test]
    fn test_count_color() {
        let mut fb = Framebuffer::filled(5, 5, Rgb::BLACK).unwrap();
        fb.set_pixel(1, 1, Rgb::RED);
        fb.set_pixel(2, 2, Rgb::RED);
        assert_eq!(fb.count_color(Rgb::RED), 2);
        assert_eq!(fb.count_color(Rgb::BLACK), 23);
    }
}
