//! # raster-canvas
//!
//! A minimal software rasterizer: an in-memory RGB pixel canvas with primitive
//! drawing, whole-canvas affine transforms and plain-text PPM export.
//!
//! ## Features
//!
//! - **Primitives**: Bresenham lines, midpoint circles, cubic Bézier and Hermite curves
//! - **Transforms**: translate, rotate and dilate by inverse mapping (nearest source pixel)
//! - **Export**: `P3` plain-text pixmap, with a parser for reading it back
//! - **Bounds policy**: writes outside the canvas are silently dropped
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_canvas::prelude::*;
//!
//! let mut canvas = Canvas::new(500, 500)?;
//!
//! canvas.set_color(Rgb::RED);
//! canvas.draw_line(100, 100, 400, 400);
//!
//! canvas.set_color(Rgb::GREEN);
//! canvas.draw_circle(250, 250, 50);
//!
//! canvas.rotate(45f64.to_radians());
//! canvas.dilate(2.0);
//! canvas.translate(50, 50);
//!
//! let text = PpmEncoder::to_string(canvas.framebuffer());
//! assert!(text.starts_with("P3\n500 500\n255\n"));
//! # Ok::<(), raster_canvas::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `scene`: YAML scene descriptions (`serde`, `serde_yaml_ng`)
//! - `cli`: the `raster-demo` driver binary (enabled by default)
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Foley, J. D., et al. (1990). *Computer Graphics: Principles and Practice*, 2nd ed.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// 24-bit RGB color type.
pub mod color;

/// Row-major pixel buffer.
pub mod framebuffer;

/// Geometric primitives (points, lines, circles, curves).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of primitives.
pub mod render;

/// Whole-canvas affine transforms.
pub mod transform;

/// Output encoders (plain-text PPM).
pub mod output;

/// Stateful drawing canvas.
pub mod canvas;

// ============================================================================
// Optional Modules
// ============================================================================

/// YAML scene descriptions.
#[cfg(feature = "scene")]
#[cfg_attr(docsrs, doc(cfg(feature = "scene")))]
pub mod scene;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-canvas operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use raster_canvas::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgb;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, CubicBezier, CubicHermite, Line, Point};
    pub use crate::output::{PpmDecoder, PpmEncoder};
    pub use crate::render::Drawable;
    pub use crate::transform::Transform;
}
