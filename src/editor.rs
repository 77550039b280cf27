//! Editing session state and operations.
//!
//! [`EditorState`] owns everything a paint session mutates: the shape
//! store, the current style, the in-progress curve, the pending clip
//! rectangle, and the selection. The UI layer translates input events into
//! these calls and walks [`EditorState::for_each_shape`] on every redraw.
//! All operations are synchronous and bounded; none panics on degenerate
//! input — the worst outcome is "no shape added" or "selection is none".

use log::{debug, trace};
use thiserror::Error;

use crate::basics::{deg2rad, iround, PointD, RectD};
use crate::circle_midpoint::circle_points;
use crate::clip_cohen_sutherland::clip_segment;
use crate::color::Rgb;
use crate::config::EditorConfig;
use crate::curves::evaluate_polyline;
use crate::hit_test::{point_in_circle, point_in_rectangle, point_near_curve, point_near_segment};
use crate::render_primitives::{shape_to_command, DrawCommand};
use crate::shape::{ControlPoints, Shape, ShapeKind};
use crate::trans_affine::TransAffine;

// ============================================================================
// Errors
// ============================================================================

/// Recoverable operation failures surfaced to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("no shape is selected")]
    NoSelection,
    #[error("no clip rectangle is set")]
    NoClipRegion,
}

// ============================================================================
// Selection
// ============================================================================

/// A weak reference to a stored shape: its kind plus its position in the
/// store. Cleared or re-indexed by the engine whenever the referenced shape
/// is removed, so a held `Selection` never dangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub kind: ShapeKind,
    pub index: usize,
}

/// A transform request for the selected shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    /// Rotate about the shape's centroid, in degrees.
    Rotate(f64),
    /// Uniform scale about the shape's centroid.
    Scale(f64),
}

// ============================================================================
// EditorState
// ============================================================================

/// All mutable state of one editing session.
///
/// Constructed at session start and passed by reference into every engine
/// operation; there are no process-wide singletons.
pub struct EditorState {
    config: EditorConfig,
    shapes: Vec<Shape>,
    selection: Option<Selection>,
    pending_curve: ControlPoints,
    clip_rect: Option<RectD>,
    color: Rgb,
    line_width: f32,
    point_size: f32,
}

impl EditorState {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let line_width = config.default_line_width;
        let point_size = config.default_point_size;
        Self {
            config,
            shapes: Vec::new(),
            selection: None,
            pending_curve: ControlPoints::new(),
            clip_rect: None,
            color: Rgb::BLACK,
            line_width,
            point_size,
        }
    }

    // ====================================================================
    // Accessors
    // ====================================================================

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Stored shapes in insertion (draw) order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection.map(|sel| &self.shapes[sel.index])
    }

    pub fn clip_rectangle(&self) -> Option<RectD> {
        self.clip_rect
    }

    // ====================================================================
    // Style
    // ====================================================================

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width.max(0.0);
    }

    pub fn set_point_size(&mut self, size: f32) {
        self.point_size = size.max(0.0);
    }

    // ====================================================================
    // Adding shapes
    // ====================================================================

    /// Add a freehand pencil sample.
    pub fn add_pixel_dab(&mut self, point: PointD) {
        trace!("add dab at ({}, {})", point.x, point.y);
        self.shapes.push(Shape::PixelDab {
            point,
            color: self.color,
            size: self.point_size,
        });
    }

    pub fn add_segment(&mut self, p0: PointD, p1: PointD) {
        trace!("add segment ({}, {}) -> ({}, {})", p0.x, p0.y, p1.x, p1.y);
        self.shapes.push(Shape::Segment {
            p0,
            p1,
            color: self.color,
            width: self.line_width,
        });
    }

    /// Add a circle; a negative radius is clamped to zero.
    pub fn add_circle(&mut self, center: PointD, radius: f64) {
        trace!("add circle at ({}, {}) r {}", center.x, center.y, radius);
        self.shapes.push(Shape::Circle {
            center,
            radius: radius.max(0.0),
            color: self.color,
            width: self.line_width,
        });
    }

    pub fn add_rectangle(&mut self, corner0: PointD, corner1: PointD) {
        trace!(
            "add rectangle ({}, {}) / ({}, {})",
            corner0.x,
            corner0.y,
            corner1.x,
            corner1.y
        );
        self.shapes.push(Shape::Rectangle {
            corner0,
            corner1,
            color: self.color,
            width: self.line_width,
        });
    }

    // ====================================================================
    // Curve entry
    // ====================================================================

    /// Start collecting control points for a new curve, discarding any
    /// uncommitted ones.
    pub fn begin_curve(&mut self) {
        self.pending_curve.clear();
    }

    pub fn add_control_point(&mut self, point: PointD) {
        self.pending_curve.push(point);
    }

    /// Commit the collected control points as a curve shape.
    ///
    /// Fewer than three control points is the defined degenerate case: the
    /// points are discarded, no shape is added, and `false` is returned.
    pub fn commit_curve(&mut self) -> bool {
        let control_points = std::mem::take(&mut self.pending_curve);
        if control_points.len() < 3 {
            debug!(
                "discarding curve with {} control points",
                control_points.len()
            );
            return false;
        }
        self.shapes.push(Shape::Curve {
            control_points,
            color: self.color,
            width: self.line_width,
        });
        true
    }

    // ====================================================================
    // Selection
    // ====================================================================

    /// Pick the shape under `p`, searching circles first, then rectangles,
    /// segments, and curves. Pixel dabs are not selectable. The result is
    /// remembered as the current selection.
    pub fn select_at(&mut self, p: PointD) -> Option<Selection> {
        const PICK_ORDER: [ShapeKind; 4] = [
            ShapeKind::Circle,
            ShapeKind::Rectangle,
            ShapeKind::Segment,
            ShapeKind::Curve,
        ];

        self.selection = PICK_ORDER.iter().find_map(|kind| {
            self.shapes
                .iter()
                .enumerate()
                .filter(|(_, s)| s.kind() == *kind)
                .find(|(_, s)| self.shape_hit(s, p))
                .map(|(index, _)| Selection { kind: *kind, index })
        });
        self.selection
    }

    fn shape_hit(&self, shape: &Shape, p: PointD) -> bool {
        match shape {
            Shape::Circle {
                center,
                radius,
                width,
                ..
            } => point_in_circle(p, *center, *radius, *width as f64),
            Shape::Rectangle {
                corner0, corner1, ..
            } => point_in_rectangle(p, *corner0, *corner1),
            Shape::Segment { p0, p1, width, .. } => point_near_segment(
                p,
                *p0,
                *p1,
                *width as f64,
                self.config.segment_hit_tolerance,
            ),
            Shape::Curve {
                control_points,
                width,
                ..
            } => point_near_curve(
                p,
                control_points,
                *width as f64 + self.config.curve_hit_tolerance,
            ),
            Shape::PixelDab { .. } => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    // ====================================================================
    // Erasing
    // ====================================================================

    /// Remove every shape with an anchor point inside the axis-aligned
    /// square of half-width `radius` centered at `p`. Returns the number of
    /// shapes removed.
    ///
    /// Anchor points, not full shape coverage, decide removal; a segment
    /// passing through the square survives if both its endpoints are
    /// outside. The selection is cleared if its shape is removed, otherwise
    /// its index is shifted past the removals.
    pub fn erase_at(&mut self, p: PointD, radius: f64) -> usize {
        let mut removed = 0;
        let mut removed_before_selection = 0;
        let mut selection_removed = false;
        let selection = self.selection;

        let shapes = std::mem::take(&mut self.shapes);
        let mut kept = Vec::with_capacity(shapes.len());
        for (i, shape) in shapes.into_iter().enumerate() {
            let hit = shape
                .anchor_points()
                .iter()
                .any(|a| (a.x - p.x).abs() <= radius && (a.y - p.y).abs() <= radius);
            if hit {
                removed += 1;
                if let Some(sel) = selection {
                    if i == sel.index {
                        selection_removed = true;
                    } else if i < sel.index {
                        removed_before_selection += 1;
                    }
                }
            } else {
                kept.push(shape);
            }
        }
        self.shapes = kept;

        if selection_removed {
            self.selection = None;
        } else if let Some(sel) = self.selection.as_mut() {
            sel.index -= removed_before_selection;
        }

        if removed > 0 {
            debug!("erased {} shapes at ({}, {})", removed, p.x, p.y);
        }
        removed
    }

    // ====================================================================
    // Clipping
    // ====================================================================

    /// Set the pending clip rectangle from two corners in any order. No
    /// shape is mutated until [`EditorState::apply_clip`].
    pub fn set_clip_rectangle(&mut self, corner0: PointD, corner1: PointD) {
        self.clip_rect = Some(RectD::from_corners(corner0, corner1));
    }

    pub fn clear_clip_rectangle(&mut self) {
        self.clip_rect = None;
    }

    /// Clip every stored shape to the pending rectangle and consume it.
    ///
    /// Decomposition rules: dabs are kept iff inside; segments are replaced
    /// by their Cohen-Sutherland result; rectangles decompose into up to
    /// four clipped segments (the kind change is intentional); a circle's
    /// rasterized boundary is filtered to inside points stored as dabs; a
    /// curve survives whole iff any evaluated sample is inside. The
    /// selection is cleared since kinds and indices change wholesale.
    pub fn apply_clip(&mut self) -> Result<(), EditorError> {
        let clip = self.clip_rect.take().ok_or(EditorError::NoClipRegion)?;
        let before = self.shapes.len();

        let shapes = std::mem::take(&mut self.shapes);
        let mut kept = Vec::with_capacity(shapes.len());
        for shape in shapes {
            match shape {
                Shape::PixelDab { point, .. } => {
                    if clip.contains(point) {
                        kept.push(shape);
                    }
                }
                Shape::Segment {
                    p0,
                    p1,
                    color,
                    width,
                } => {
                    if let Some((a, b)) = clip_segment(p0, p1, &clip) {
                        kept.push(Shape::Segment {
                            p0: a,
                            p1: b,
                            color,
                            width,
                        });
                    }
                }
                Shape::Rectangle {
                    corner0,
                    corner1,
                    color,
                    width,
                } => {
                    let c = [
                        corner0,
                        PointD::new(corner1.x, corner0.y),
                        corner1,
                        PointD::new(corner0.x, corner1.y),
                    ];
                    for i in 0..4 {
                        if let Some((a, b)) = clip_segment(c[i], c[(i + 1) % 4], &clip) {
                            kept.push(Shape::Segment {
                                p0: a,
                                p1: b,
                                color,
                                width,
                            });
                        }
                    }
                }
                Shape::Circle {
                    center,
                    radius,
                    color,
                    width,
                } => {
                    let boundary =
                        circle_points(iround(center.x), iround(center.y), iround(radius));
                    for bp in boundary {
                        let point = PointD::new(bp.x as f64, bp.y as f64);
                        if clip.contains(point) {
                            kept.push(Shape::PixelDab {
                                point,
                                color,
                                size: width,
                            });
                        }
                    }
                }
                Shape::Curve {
                    ref control_points, ..
                } => {
                    let survives = evaluate_polyline(control_points, &self.config)
                        .iter()
                        .any(|s| clip.contains(*s));
                    if survives {
                        kept.push(shape);
                    }
                }
            }
        }
        self.shapes = kept;
        self.selection = None;

        debug!(
            "clip applied: {} shapes in, {} out",
            before,
            self.shapes.len()
        );
        Ok(())
    }

    // ====================================================================
    // Transforming
    // ====================================================================

    /// Rotate or scale the selected shape about its centroid.
    ///
    /// Circles special-case scaling: the radius is multiplied directly,
    /// since a uniformly scaled circle stays a circle.
    pub fn transform_selected(&mut self, op: TransformOp) -> Result<(), EditorError> {
        let sel = self.selection.ok_or(EditorError::NoSelection)?;
        let shape = &mut self.shapes[sel.index];
        let centroid = shape.centroid();

        match op {
            TransformOp::Rotate(degrees) => {
                let m = TransAffine::new_rotation_about(deg2rad(degrees), centroid);
                apply_matrix(shape, &m);
            }
            TransformOp::Scale(factor) => {
                if let Shape::Circle { radius, .. } = shape {
                    *radius = (*radius * factor).max(0.0);
                } else {
                    let m = TransAffine::new_scaling_about(factor, centroid);
                    apply_matrix(shape, &m);
                }
            }
        }
        Ok(())
    }

    // ====================================================================
    // Rendering and session reset
    // ====================================================================

    /// Visit every stored shape as a drawable primitive, in draw order.
    pub fn for_each_shape<F: FnMut(&DrawCommand)>(&self, mut f: F) {
        for shape in &self.shapes {
            let cmd = shape_to_command(shape, &self.config);
            f(&cmd);
        }
    }

    /// Reset the session: drop all shapes, the selection, the pending
    /// curve, and the pending clip rectangle. Style and configuration are
    /// kept.
    pub fn clear(&mut self) {
        debug!("session reset, dropping {} shapes", self.shapes.len());
        self.shapes.clear();
        self.selection = None;
        self.pending_curve.clear();
        self.clip_rect = None;
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply `m` to every defining point of a shape. For circles only the
/// center moves; the radius is a scalar, handled by the scale special case.
fn apply_matrix(shape: &mut Shape, m: &TransAffine) {
    match shape {
        Shape::PixelDab { point, .. } => *point = m.transform_point(*point),
        Shape::Segment { p0, p1, .. } => {
            *p0 = m.transform_point(*p0);
            *p1 = m.transform_point(*p1);
        }
        Shape::Circle { center, .. } => *center = m.transform_point(*center),
        Shape::Rectangle {
            corner0, corner1, ..
        } => {
            *corner0 = m.transform_point(*corner0);
            *corner1 = m.transform_point(*corner1);
        }
        Shape::Curve { control_points, .. } => {
            for p in control_points.iter_mut() {
                *p = m.transform_point(*p);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
