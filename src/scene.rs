//! YAML scene descriptions.
//!
//! A scene names the canvas size, an optional output path and an ordered list
//! of canvas operations to replay:
//!
//! ```yaml
//! width: 200
//! height: 100
//! output: out.ppm
//! operations:
//!   - { op: color, value: "#ff0000" }
//!   - { op: line, from: [0, 0], to: [199, 99] }
//!   - { op: rotate, degrees: 30 }
//! ```

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One canvas operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Fill the canvas with the clear color.
    Clear,
    /// Change the draw color (`#rrggbb`).
    Color {
        /// Hex color.
        value: String,
    },
    /// Plot one pixel.
    Pixel {
        /// Coordinate.
        at: [i32; 2],
    },
    /// Bresenham line.
    Line {
        /// Start point.
        from: [i32; 2],
        /// End point.
        to: [i32; 2],
    },
    /// Circle outline.
    Circle {
        /// Center point.
        center: [i32; 2],
        /// Radius in pixels.
        radius: i32,
    },
    /// Cubic Bézier curve.
    Bezier {
        /// Control points `p0..p3`.
        points: [[i32; 2]; 4],
    },
    /// Cubic Hermite curve.
    Hermite {
        /// Start point.
        start: [i32; 2],
        /// End point.
        end: [i32; 2],
        /// Tangent at the start.
        start_tangent: [i32; 2],
        /// Tangent at the end.
        end_tangent: [i32; 2],
    },
    /// Shift the whole canvas.
    Translate {
        /// Horizontal offset.
        dx: i32,
        /// Vertical offset.
        dy: i32,
    },
    /// Rotate the whole canvas. Exactly one of `degrees` / `radians` must be set.
    Rotate {
        /// Angle in degrees.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        degrees: Option<f64>,
        /// Angle in radians.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        radians: Option<f64>,
    },
    /// Scale the whole canvas about its center.
    Dilate {
        /// Scale factor.
        scale: f64,
    },
}

impl Operation {
    /// Apply this operation to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable color or an ambiguous rotation.
    pub fn apply(&self, canvas: &mut Canvas) -> Result<()> {
        match self {
            Self::Clear => canvas.clear(),
            Self::Color { value } => canvas.set_color(value.parse::<Rgb>()?),
            Self::Pixel { at: [x, y] } => canvas.set_pixel(*x, *y),
            Self::Line { from, to } => canvas.draw_line(from[0], from[1], to[0], to[1]),
            Self::Circle { center, radius } => canvas.draw_circle(center[0], center[1], *radius),
            Self::Bezier { points: [p0, p1, p2, p3] } => {
                canvas.draw_bezier(p0[0], p0[1], p1[0], p1[1], p2[0], p2[1], p3[0], p3[1]);
            }
            Self::Hermite {
                start,
                end,
                start_tangent,
                end_tangent,
            } => canvas.draw_hermite(
                start[0],
                start[1],
                end[0],
                end[1],
                start_tangent[0],
                start_tangent[1],
                end_tangent[0],
                end_tangent[1],
            ),
            Self::Translate { dx, dy } => canvas.translate(*dx, *dy),
            Self::Rotate { degrees, radians } => {
                let angle = match (degrees, radians) {
                    (Some(d), None) => d.to_radians(),
                    (None, Some(r)) => *r,
                    _ => {
                        return Err(Error::Config(
                            "rotate needs exactly one of `degrees` or `radians`".to_string(),
                        ))
                    }
                };
                canvas.rotate(angle);
            }
            Self::Dilate { scale } => canvas.dilate(*scale),
        }
        Ok(())
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("test.ppm")
}

/// A complete scene: canvas size, output path and operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Where the rendered canvas is written.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Operations replayed in order.
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl Scene {
    /// Parse a scene from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the YAML is malformed.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a scene from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let scene = Self::from_yaml_str(&text)?;
        debug!(path = %path.display(), operations = scene.operations.len(), "loaded scene");
        Ok(scene)
    }

    /// Serialize the scene to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Create the canvas and replay every operation.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid dimensions or an invalid operation.
    pub fn render(&self) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.width, self.height)?;
        for (i, op) in self.operations.iter().enumerate() {
            op.apply(&mut canvas)
                .map_err(|e| Error::Config(format!("operation {}: {e}", i + 1)))?;
        }
        Ok(canvas)
    }

    /// Built-in demonstration scene.
    ///
    /// A 500x500 canvas with a red line, green circle, blue Bézier and yellow
    /// Hermite curve, then rotated 45°, dilated by 2 and translated by (50, 50).
    #[must_use]
    pub fn demo() -> Self {
        Self {
            width: 500,
            height: 500,
            output: default_output(),
            operations: vec![
                Operation::Color {
                    value: Rgb::RED.to_string(),
                },
                Operation::Line {
                    from: [100, 100],
                    to: [400, 400],
                },
                Operation::Color {
                    value: Rgb::GREEN.to_string(),
                },
                Operation::Circle {
                    center: [250, 250],
                    radius: 50,
                },
                Operation::Color {
                    value: Rgb::BLUE.to_string(),
                },
                Operation::Bezier {
                    points: [[100, 400], [200, 100], [300, 400], [400, 100]],
                },
                Operation::Color {
                    value: Rgb::YELLOW.to_string(),
                },
                Operation::Hermite {
                    start: [50, 50],
                    end: [450, 450],
                    start_tangent: [1, 0],
                    end_tangent: [0, 1],
                },
                Operation::Rotate {
                    degrees: Some(45.0),
                    radians: None,
                },
                Operation::Dilate { scale: 2.0 },
                Operation::Translate { dx: 50, dy: 50 },
            ],
        }
    }
}
