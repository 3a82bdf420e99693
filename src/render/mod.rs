//! Rasterization of geometric primitives.
//!
//! Every primitive is reduced to single-pixel writes through
//! [`Framebuffer::set_pixel`](crate::framebuffer::Framebuffer::set_pixel), so
//! clipping is entirely the framebuffer's out-of-bounds no-op.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer, 1-pixel wide, 8-connected
//! - **Midpoint Circle**: integer, unfilled ring with 8-way symmetry
//! - **Parametric curves**: fixed-step sampling of cubic Bézier and Hermite curves
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

mod primitives;

pub use primitives::{
    draw_bezier, draw_circle, draw_hermite, draw_line, Drawable, CURVE_STEPS,
};
