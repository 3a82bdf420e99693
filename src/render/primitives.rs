//! Primitive rendering functions.
//!
//! Implements rasterization algorithms for lines, circles and cubic curves.
//! The draw color is an explicit argument; nothing here reads canvas state.

use crate::color::Rgb;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Circle, CubicBezier, CubicHermite, Line, Point};

/// Number of parameter steps used to sample a curve (step size 0.001).
///
/// Curves are sampled at `CURVE_STEPS + 1` values of `t`, both ends included.
pub const CURVE_STEPS: u32 = 1000;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a framebuffer.
    fn draw(&self, fb: &mut Framebuffer, color: Rgb);
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line using Bresenham's algorithm.
///
/// Both endpoints are plotted. The line is 1 pixel wide and 8-connected.
///
/// # Arguments
///
/// * `fb` - Target framebuffer
/// * `x0`, `y0` - Start coordinates
/// * `x1`, `y1` - End coordinates
/// * `color` - Line color
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = x0;
    let mut y = y0;

    while x != x1 || y != y1 {
        plot(fb, x, y, color);

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    plot(fb, x1, y1, color);
}

/// Write one pixel from widened coordinates; anything outside `i32` is off canvas.
#[inline]
fn plot(fb: &mut Framebuffer, x: i64, y: i64, color: Rgb) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        fb.set_pixel(x, y, color);
    }
}

impl Drawable for Line {
    fn draw(&self, fb: &mut Framebuffer, color: Rgb) {
        draw_line(fb, self.start.x, self.start.y, self.end.x, self.end.y, color);
    }
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Draw a circle outline using the midpoint algorithm.
///
/// A radius of zero plots only the center; a negative radius plots nothing.
pub fn draw_circle(fb: &mut Framebuffer, xc: i32, yc: i32, radius: i32, color: Rgb) {
    let (xc, yc, r) = (i64::from(xc), i64::from(yc), i64::from(radius));
    if ring_misses(fb, xc, yc, r) {
        return;
    }

    let mut x: i64 = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;

    while x <= y {
        // Plot 8 octant points
        plot(fb, xc + x, yc + y, color);
        plot(fb, xc + x, yc - y, color);
        plot(fb, xc - x, yc + y, color);
        plot(fb, xc - x, yc - y, color);
        plot(fb, xc + y, yc + x, color);
        plot(fb, xc + y, yc - x, color);
        plot(fb, xc - y, yc + x, color);
        plot(fb, xc - y, yc - x, color);

        // The decision update uses the already-incremented x.
        x += 1;
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
    }
}

/// True when no point of the ring can land on the buffer.
///
/// Every plotted point is within `r` of the center on both axes, and at least
/// `0.7 * r - 1` from it on one axis (the ring stays within a pixel of `r`).
fn ring_misses(fb: &Framebuffer, xc: i64, yc: i64, r: i64) -> bool {
    if r < 0 {
        return true;
    }
    let (w, h) = (i64::from(fb.width()), i64::from(fb.height()));

    let beyond = xc + r < 0 || xc - r >= w || yc + r < 0 || yc - r >= h;

    let inner = (r * 7 / 10 - 1).max(0);
    let enclosed = xc - inner < 0 && xc + inner >= w && yc - inner < 0 && yc + inner >= h;

    beyond || enclosed
}

impl Drawable for Circle {
    fn draw(&self, fb: &mut Framebuffer, color: Rgb) {
        draw_circle(fb, self.center.x, self.center.y, self.radius, color);
    }
}

// ============================================================================
// Curve Drawing
// ============================================================================

/// Plot `f(t)` for `t = i / CURVE_STEPS`, `i in 0..=CURVE_STEPS`.
///
/// Sample coordinates are truncated toward zero, not rounded.
#[inline]
fn sample_curve<F>(fb: &mut Framebuffer, color: Rgb, f: F)
where
    F: Fn(f64) -> (f64, f64),
{
    for i in 0..=CURVE_STEPS {
        let t = f64::from(i) / f64::from(CURVE_STEPS);
        let (x, y) = f(t);
        fb.set_pixel(x as i32, y as i32, color);
    }
}

/// Draw a cubic Bézier curve by fixed-step parametric sampling.
///
/// There is no adaptive subdivision; very long curves may show gaps.
pub fn draw_bezier(fb: &mut Framebuffer, p0: Point, p1: Point, p2: Point, p3: Point, color: Rgb) {
    CubicBezier::new(p0, p1, p2, p3).draw(fb, color);
}

impl Drawable for CubicBezier {
    fn draw(&self, fb: &mut Framebuffer, color: Rgb) {
        sample_curve(fb, color, |t| self.point_at(t));
    }
}

/// Draw a cubic Hermite curve from `p0` to `p1` with tangents `t0` and `t1`.
pub fn draw_hermite(fb: &mut Framebuffer, p0: Point, p1: Point, t0: Point, t1: Point, color: Rgb) {
    CubicHermite::new(p0, p1, t0, t1).draw(fb, color);
}

impl Drawable for CubicHermite {
    fn draw(&self, fb: &mut Framebuffer, color: Rgb) {
        sample_curve(fb, color, |t| self.point_at(t));
    }
}

impl Drawable for Point {
    fn draw(&self, fb: &mut Framebuffer, color: Rgb) {
        fb.set_pixel(self.x, self.y, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
