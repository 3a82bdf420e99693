//! Geometric primitives for rasterization.
//!
//! Control points live on the integer pixel grid; curves are evaluated in `f64`.

/// A 2D point (or vector) with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }
}

/// A circle outline given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius in pixels.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }
}

/// A cubic Bézier curve with four control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CubicBezier {
    /// Start point.
    pub p0: Point,
    /// First control point.
    pub p1: Point,
    /// Second control point.
    pub p2: Point,
    /// End point.
    pub p3: Point,
}

impl CubicBezier {
    /// Create a new cubic Bézier curve.
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate the curve at parameter `t` in `[0, 1]` (Bernstein form).
    #[must_use]
    pub fn point_at(&self, t: f64) -> (f64, f64) {
        let u = 1.0 - t;
        let b0 = u.powi(3);
        let b1 = 3.0 * t * u.powi(2);
        let b2 = 3.0 * t.powi(2) * u;
        let b3 = t.powi(3);

        let eval = |a: i32, b: i32, c: i32, d: i32| {
            b0 * f64::from(a) + b1 * f64::from(b) + b2 * f64::from(c) + b3 * f64::from(d)
        };

        (
            eval(self.p0.x, self.p1.x, self.p2.x, self.p3.x),
            eval(self.p0.y, self.p1.y, self.p2.y, self.p3.y),
        )
    }
}

/// A cubic Hermite curve: two endpoints and their tangent vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CubicHermite {
    /// Start point.
    pub p0: Point,
    /// End point.
    pub p1: Point,
    /// Tangent at the start point.
    pub t0: Point,
    /// Tangent at the end point.
    pub t1: Point,
}

impl CubicHermite {
    /// Create a new cubic Hermite curve.
    #[must_use]
    pub const fn new(p0: Point, p1: Point, t0: Point, t1: Point) -> Self {
        Self { p0, p1, t0, t1 }
    }

    /// Evaluate the curve at parameter `t` in `[0, 1]`.
    ///
    /// Basis: `h1 = 2t³-3t²+1`, `h2 = -2t³+3t²`, `h3 = t³-2t²+t`, `h4 = t³-t²`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> (f64, f64) {
        let t2 = t.powi(2);
        let t3 = t.powi(3);
        let h1 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h2 = -2.0 * t3 + 3.0 * t2;
        let h3 = t3 - 2.0 * t2 + t;
        let h4 = t3 - t2;

        let eval = |p0: i32, p1: i32, t0: i32, t1: i32| {
            h1 * f64::from(p0) + h2 * f64::from(p1) + h3 * f64::from(t0) + h4 * f64::from(t1)
        };

        (
            eval(self.p0.x, self.p1.x, self.t0.x, self.t1.x),
            eval(self.p0.y, self.p1.y, self.t0.y, self.t1.y),
        )
    }
}
