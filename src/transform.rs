//! Whole-canvas affine transforms.
//!
//! Every transform is a pure `&Framebuffer -> Framebuffer` remap by inverse
//! mapping: for each destination pixel the source coordinate is computed and,
//! if it is in bounds, that source pixel is copied. Destinations without a
//! valid source keep [`DEFAULT_FILL`]. There is no interpolation.
//!
//! Rotation and dilation pivot on `(width / 2, height / 2)` with integer
//! division. Floating-point source coordinates are truncated toward zero.

use crate::color::Rgb;
use crate::framebuffer::Framebuffer;

/// Fill for destination pixels whose source falls outside the buffer.
pub const DEFAULT_FILL: Rgb = Rgb::BLACK;

/// A whole-canvas affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Shift content by `(dx, dy)` pixels.
    Translate {
        /// Horizontal offset.
        dx: i32,
        /// Vertical offset.
        dy: i32,
    },
    /// Rotation about the canvas center.
    ///
    /// The source is found by applying the forward rotation to the destination
    /// coordinate, so on screen the content turns by `-angle`.
    Rotate {
        /// Angle in radians.
        angle: f64,
    },
    /// Scale about the canvas center. The source coordinate is the destination
    /// offset multiplied by `scale`, so `scale > 1` shrinks the content.
    Dilate {
        /// Scale factor.
        scale: f64,
    },
}

impl Transform {
    /// Source coordinate that supplies destination pixel `(x, y)`.
    ///
    /// The result may lie outside the buffer.
    #[must_use]
    pub fn source_of(&self, x: i64, y: i64, width: u32, height: u32) -> (i64, i64) {
        self.mapping(width, height).source(x, y)
    }

    /// Produce the transformed buffer. `src` is only read.
    #[must_use]
    pub fn apply(&self, src: &Framebuffer) -> Framebuffer {
        let mapping = self.mapping(src.width(), src.height());
        remap(src, |x, y| mapping.source(x, y))
    }

    /// Resolve the pivot and trigonometry for a buffer of the given size.
    fn mapping(&self, width: u32, height: u32) -> Mapping {
        let cx = i64::from(width / 2);
        let cy = i64::from(height / 2);
        match *self {
            Self::Translate { dx, dy } => Mapping::Translate {
                dx: i64::from(dx),
                dy: i64::from(dy),
            },
            Self::Rotate { angle } => {
                let (sin, cos) = angle.sin_cos();
                Mapping::Rotate { cx, cy, sin, cos }
            }
            Self::Dilate { scale } => Mapping::Dilate { cx, cy, scale },
        }
    }
}

/// Destination-to-source mapping of a [`Transform`] bound to one buffer size.
#[derive(Debug, Clone, Copy)]
enum Mapping {
    Translate { dx: i64, dy: i64 },
    Rotate { cx: i64, cy: i64, sin: f64, cos: f64 },
    Dilate { cx: i64, cy: i64, scale: f64 },
}

impl Mapping {
    #[inline]
    fn source(&self, x: i64, y: i64) -> (i64, i64) {
        match *self {
            Self::Translate { dx, dy } => (x - dx, y - dy),
            Self::Rotate { cx, cy, sin, cos } => {
                let rx = (x - cx) as f64;
                let ry = (y - cy) as f64;
                (
                    (rx * cos - ry * sin + cx as f64) as i64,
                    (rx * sin + ry * cos + cy as f64) as i64,
                )
            }
            Self::Dilate { cx, cy, scale } => (
                ((x - cx) as f64 * scale + cx as f64) as i64,
                ((y - cy) as f64 * scale + cy as f64) as i64,
            ),
        }
    }
}

/// Translate `src` by `(dx, dy)`.
#[must_use]
pub fn translate(src: &Framebuffer, dx: i32, dy: i32) -> Framebuffer {
    Transform::Translate { dx, dy }.apply(src)
}

/// Rotate `src` about its center by `angle` radians.
#[must_use]
pub fn rotate(src: &Framebuffer, angle: f64) -> Framebuffer {
    Transform::Rotate { angle }.apply(src)
}

/// Dilate `src` about its center by `scale`.
#[must_use]
pub fn dilate(src: &Framebuffer, scale: f64) -> Framebuffer {
    Transform::Dilate { scale }.apply(src)
}

/// Build a new buffer by pulling each destination pixel from `source(x, y)`.
fn remap<F>(src: &Framebuffer, source: F) -> Framebuffer
where
    F: Fn(i64, i64) -> (i64, i64),
{
    let width = src.width() as usize;
    let mut dst = Framebuffer::filled_unchecked(src.width(), src.height(), DEFAULT_FILL);

    for (i, px) in dst.pixels_mut().iter_mut().enumerate() {
        let (sx, sy) = source((i % width) as i64, (i / width) as i64);
        if let Some(idx) = src.index(sx, sy) {
            *px = src.pixels()[idx];
        }
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn white(w: u32, h: u32) -> Framebuffer {
        Framebuffer::new(w, h).unwrap()
    }

    #[test]
    fn test_translate_zero_is_identity() {
        let mut fb = white(8, 6);
        fb.set_pixel(3, 2, Rgb::RED);
        fb.set_pixel(7, 5, Rgb::BLUE);

        assert_eq!(translate(&fb, 0, 0), fb);
    }

    #[test]
    fn test_translate_moves_content() {
        let mut fb = white(10, 10);
        fb.set_pixel(2, 3, Rgb::RED);

        let out = translate(&fb, 4, -2);

        assert_eq!(out.get_pixel(6, 1), Some(Rgb::RED));
        assert_eq!(out.count_color(Rgb::RED), 1);
        // Vacated columns (x < 4) and rows (y >= 8) take the default fill
        assert_eq!(out.get_pixel(0, 0), Some(DEFAULT_FILL));
        assert_eq!(out.get_pixel(9, 9), Some(DEFAULT_FILL));
        assert_eq!(out.get_pixel(9, 0), Some(Rgb::WHITE));
    }

    #[test]
    fn test_translate_reads_old_buffer_only() {
        // An in-place shift would smear the single pixel across the row.
        let mut fb = Framebuffer::filled(5, 1, Rgb::BLACK).unwrap();
        fb.set_pixel(0, 0, Rgb::RED);

        let out = translate(&fb, 1, 0);

        assert_eq!(out.count_color(Rgb::RED), 1);
        assert_eq!(out.get_pixel(1, 0), Some(Rgb::RED));
    }

    #[test]
    fn test_translate_fully_off_canvas() {
        let fb = white(4, 4);
        let out = translate(&fb, 100, i32::MIN);
        assert_eq!(out.count_color(DEFAULT_FILL), 16);
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let mut fb = white(9, 7);
        fb.set_pixel(1, 6, Rgb::GREEN);
        assert_eq!(rotate(&fb, 0.0), fb);
    }

    #[test]
    fn test_rotate_quarter_turn_uses_forward_formula() {
        let mut fb = white(11, 11);
        fb.set_pixel(2, 5, Rgb::RED);

        let out = rotate(&fb, FRAC_PI_2);

        // dst (5, 8): srcX = 0*cos - 3*sin + 5 = 2, srcY = 0*sin + 3*cos + 5 = 5
        assert_eq!(Transform::Rotate { angle: FRAC_PI_2 }.source_of(5, 8, 11, 11), (2, 5));
        assert_eq!(out.get_pixel(5, 8), Some(Rgb::RED));
    }

    #[test]
    fn test_rotate_corners_become_fill() {
        let fb = white(10, 10);
        let out = rotate(&fb, FRAC_PI_4);

        assert_eq!(out.get_pixel(0, 0), Some(DEFAULT_FILL));
        assert_eq!(out.get_pixel(5, 5), Some(Rgb::WHITE));
        assert_eq!(out.pixel_count(), fb.pixel_count());
    }

    #[test]
    fn test_dilate_one_is_identity() {
        let mut fb = white(6, 9);
        fb.set_pixel(0, 0, Rgb::RED);
        fb.set_pixel(5, 8, Rgb::BLUE);
        assert_eq!(dilate(&fb, 1.0), fb);
    }

    #[test]
    fn test_dilate_two_samples_outward() {
        let mut fb = white(10, 10);
        fb.set_pixel(7, 5, Rgb::RED);

        let out = dilate(&fb, 2.0);

        // dst (6, 5) <- src ((6 - 5) * 2 + 5, 5)
        assert_eq!(out.get_pixel(6, 5), Some(Rgb::RED));
        assert_eq!(out.get_pixel(1, 1), Some(DEFAULT_FILL));
        assert_eq!(out.get_pixel(5, 5), Some(Rgb::WHITE));
    }

    #[test]
    fn test_dilate_half_keeps_every_source_in_bounds() {
        let fb = white(10, 10);
        let out = dilate(&fb, 0.5);
        assert_eq!(out.count_color(Rgb::WHITE), 100);
    }

    #[test]
    fn test_dilate_truncates_toward_zero() {
        // dst x = 0: (0 - 5) * 0.5 + 5 = 2.5 -> 2
        let t = Transform::Dilate { scale: 0.5 };
        assert_eq!(t.source_of(0, 0, 10, 10), (2, 2));
        // dst x = 0 at scale 1.1: -5.5 + 5 = -0.5 -> 0 (toward zero, in bounds)
        let t = Transform::Dilate { scale: 1.1 };
        assert_eq!(t.source_of(0, 0, 10, 10), (0, 0));
    }

    #[test]
    fn test_source_of_agrees_with_apply() {
        let mut fb = white(9, 7);
        for (i, px) in fb.pixels_mut().iter_mut().enumerate() {
            *px = Rgb::from_packed(i as u32 * 0x0001_0307);
        }

        let transforms = [
            Transform::Translate { dx: -2, dy: 3 },
            Transform::Rotate { angle: 0.7 },
            Transform::Dilate { scale: 1.6 },
        ];
        for t in transforms {
            let out = t.apply(&fb);
            for y in 0..7 {
                for x in 0..9 {
                    let (sx, sy) = t.source_of(i64::from(x), i64::from(y), 9, 7);
                    let expected = fb.index(sx, sy).map_or(DEFAULT_FILL, |idx| fb.pixels()[idx]);
                    assert_eq!(out.get_pixel(x, y), Some(expected), "{t:?} at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_source_of_translate() {
        let t = Transform::Translate { dx: 3, dy: -4 };
        assert_eq!(t.source_of(10, 10, 20, 20), (7, 14));
    }
}
