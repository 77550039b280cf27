//! Shape data model.
//!
//! One named variant per shape kind, each owning its geometry and style.
//! Shapes never reference each other; the editing session owns them all in
//! insertion order.

use smallvec::SmallVec;

use crate::basics::PointD;
use crate::color::Rgb;

/// Control points of a stored curve. Most curves are short, so they live
/// inline until they outgrow the stack buffer.
pub type ControlPoints = SmallVec<[PointD; 8]>;

// ============================================================================
// ShapeKind
// ============================================================================

/// Discriminant of a [`Shape`], used for selection bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    PixelDab,
    Segment,
    Circle,
    Rectangle,
    Curve,
}

// ============================================================================
// Shape
// ============================================================================

/// A stored vector shape with its style attributes.
///
/// `radius`, `width`, and `size` are non-negative; the editor clamps them
/// before construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A single painted point (freehand pencil sample).
    PixelDab {
        point: PointD,
        color: Rgb,
        size: f32,
    },
    Segment {
        p0: PointD,
        p1: PointD,
        color: Rgb,
        width: f32,
    },
    Circle {
        center: PointD,
        radius: f64,
        color: Rgb,
        width: f32,
    },
    /// Axis-aligned until transformed; stored as two opposite corners.
    Rectangle {
        corner0: PointD,
        corner1: PointD,
        color: Rgb,
        width: f32,
    },
    /// Parametric curve; `control_points.len() >= 3` once committed.
    Curve {
        control_points: ControlPoints,
        color: Rgb,
        width: f32,
    },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::PixelDab { .. } => ShapeKind::PixelDab,
            Shape::Segment { .. } => ShapeKind::Segment,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Curve { .. } => ShapeKind::Curve,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Shape::PixelDab { color, .. }
            | Shape::Segment { color, .. }
            | Shape::Circle { color, .. }
            | Shape::Rectangle { color, .. }
            | Shape::Curve { color, .. } => *color,
        }
    }

    /// Mean of the shape's defining points: segment midpoint, rectangle
    /// center, circle center, curve control-point centroid. Rotation and
    /// scaling are applied about this point.
    pub fn centroid(&self) -> PointD {
        match self {
            Shape::PixelDab { point, .. } => *point,
            Shape::Segment { p0, p1, .. } => {
                PointD::new((p0.x + p1.x) / 2.0, (p0.y + p1.y) / 2.0)
            }
            Shape::Circle { center, .. } => *center,
            Shape::Rectangle {
                corner0, corner1, ..
            } => PointD::new(
                (corner0.x + corner1.x) / 2.0,
                (corner0.y + corner1.y) / 2.0,
            ),
            Shape::Curve { control_points, .. } => {
                if control_points.is_empty() {
                    return PointD::new(0.0, 0.0);
                }
                let n = control_points.len() as f64;
                let (sx, sy) = control_points
                    .iter()
                    .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
                PointD::new(sx / n, sy / n)
            }
        }
    }

    /// The defining points tested by the coarse eraser: dab point, segment
    /// endpoints, circle center, rectangle corners, curve control points.
    /// Intentionally not full shape coverage.
    pub fn anchor_points(&self) -> SmallVec<[PointD; 8]> {
        match self {
            Shape::PixelDab { point, .. } => SmallVec::from_slice(&[*point]),
            Shape::Segment { p0, p1, .. } => SmallVec::from_slice(&[*p0, *p1]),
            Shape::Circle { center, .. } => SmallVec::from_slice(&[*center]),
            Shape::Rectangle {
                corner0, corner1, ..
            } => SmallVec::from_slice(&[*corner0, *corner1]),
            Shape::Curve { control_points, .. } => {
                SmallVec::from_slice(control_points.as_slice())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
