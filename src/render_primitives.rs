//! Shape-to-drawable conversion.
//!
//! Turns a stored [`Shape`] into the concrete primitive the external
//! renderer consumes: a rasterized point list, an evaluated polyline, or a
//! quad outline, each tagged with color and stroke/point size. No device
//! I/O happens here; the renderer owns the display surface.

use crate::basics::{iround, PointD, PointI};
use crate::circle_midpoint::circle_points;
use crate::color::Rgb;
use crate::config::EditorConfig;
use crate::curves::evaluate_polyline;
use crate::line_bresenham::line_points;
use crate::shape::Shape;

// ============================================================================
// DrawCommand
// ============================================================================

/// One drawable primitive handed to the external renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Discrete rasterized points (dabs, Bresenham lines, midpoint circles).
    Points {
        points: Vec<PointI>,
        color: Rgb,
        size: f32,
    },
    /// Connected polyline (evaluated curves).
    Polyline {
        points: Vec<PointD>,
        color: Rgb,
        width: f32,
    },
    /// Closed quad outline (rectangles), corners in loop order.
    Outline {
        corners: [PointD; 4],
        color: Rgb,
        width: f32,
    },
}

/// Convert a stored shape into its drawable primitive.
pub fn shape_to_command(shape: &Shape, config: &EditorConfig) -> DrawCommand {
    match shape {
        Shape::PixelDab { point, color, size } => DrawCommand::Points {
            points: vec![PointI::new(iround(point.x), iround(point.y))],
            color: *color,
            size: *size,
        },
        Shape::Segment {
            p0,
            p1,
            color,
            width,
        } => DrawCommand::Points {
            points: line_points(*p0, *p1),
            color: *color,
            size: *width,
        },
        Shape::Circle {
            center,
            radius,
            color,
            width,
        } => DrawCommand::Points {
            points: circle_points(iround(center.x), iround(center.y), iround(*radius)),
            color: *color,
            size: *width,
        },
        Shape::Rectangle {
            corner0,
            corner1,
            color,
            width,
        } => DrawCommand::Outline {
            corners: [
                *corner0,
                PointD::new(corner1.x, corner0.y),
                *corner1,
                PointD::new(corner0.x, corner1.y),
            ],
            color: *color,
            width: *width,
        },
        Shape::Curve {
            control_points,
            color,
            width,
        } => DrawCommand::Polyline {
            points: evaluate_polyline(control_points, config),
            color: *color,
            width: *width,
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
