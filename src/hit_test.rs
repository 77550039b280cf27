//! Geometric hit-testing predicates for selection.
//!
//! These are pick tests, not exact geometry: each accepts a slop band
//! derived from the shape's stroke so a click "near enough" counts. The
//! curve test is coarse by design; it checks proximity to control points,
//! not distance to the evaluated curve.

use crate::basics::{calc_distance, PointD};

/// `true` if `p` lies inside the circle, expanded by half the stroke width.
#[inline]
pub fn point_in_circle(p: PointD, center: PointD, radius: f64, stroke_width: f64) -> bool {
    calc_distance(p, center) <= radius + stroke_width / 2.0
}

/// `true` if `p` lies inside the axis-aligned rectangle spanned by two
/// corners supplied in any order.
#[inline]
pub fn point_in_rectangle(p: PointD, c0: PointD, c1: PointD) -> bool {
    p.x >= c0.x.min(c1.x)
        && p.x <= c0.x.max(c1.x)
        && p.y >= c0.y.min(c1.y)
        && p.y <= c0.y.max(c1.y)
}

/// `true` if `p` is within `width + tolerance` of the segment `a -> b`.
///
/// Projects `p` onto the segment's carrier line, clamps the parameter to
/// `[0, 1]`, and measures to the clamped point. A zero-length segment
/// degenerates to a point-to-point distance test.
pub fn point_near_segment(p: PointD, a: PointD, b: PointD, width: f64, tolerance: f64) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    let threshold = width + tolerance;

    if len_sq == 0.0 {
        return calc_distance(p, a) <= threshold;
    }

    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let proj = PointD::new(a.x + t * dx, a.y + t * dy);
    calc_distance(p, proj) <= threshold
}

/// `true` if `p` is within `tolerance` of any control point.
pub fn point_near_curve(p: PointD, control: &[PointD], tolerance: f64) -> bool {
    control.iter().any(|c| calc_distance(p, *c) <= tolerance)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> PointD {
        PointD::new(x, y)
    }

    #[test]
    fn test_point_in_circle_with_stroke_band() {
        let c = pt(0.0, 0.0);
        assert!(point_in_circle(pt(5.0, 0.0), c, 5.0, 0.0));
        assert!(point_in_circle(pt(5.9, 0.0), c, 5.0, 2.0));
        assert!(!point_in_circle(pt(6.1, 0.0), c, 5.0, 2.0));
    }

    #[test]
    fn test_point_in_rectangle_any_corner_order() {
        let c0 = pt(10.0, 10.0);
        let c1 = pt(0.0, 0.0);
        assert!(point_in_rectangle(pt(5.0, 5.0), c0, c1));
        assert!(point_in_rectangle(pt(0.0, 10.0), c0, c1));
        assert!(!point_in_rectangle(pt(-0.1, 5.0), c0, c1));
        assert!(!point_in_rectangle(pt(5.0, 10.1), c0, c1));
    }

    #[test]
    fn test_point_near_segment_perpendicular() {
        // 2 px from a width-1 segment with tolerance 2 -> hit
        let a = pt(0.0, 0.0);
        let b = pt(10.0, 0.0);
        assert!(point_near_segment(pt(5.0, 2.0), a, b, 1.0, 2.0));
        // 10 px away -> miss
        assert!(!point_near_segment(pt(5.0, 10.0), a, b, 1.0, 2.0));
    }

    #[test]
    fn test_point_near_segment_clamps_to_endpoints() {
        let a = pt(0.0, 0.0);
        let b = pt(10.0, 0.0);
        // Beyond the end, distance measured to the endpoint.
        assert!(point_near_segment(pt(12.0, 0.0), a, b, 1.0, 2.0));
        assert!(!point_near_segment(pt(14.0, 0.0), a, b, 1.0, 2.0));
    }

    #[test]
    fn test_point_near_degenerate_segment() {
        let a = pt(3.0, 3.0);
        assert!(point_near_segment(pt(4.0, 3.0), a, a, 0.0, 2.0));
        assert!(!point_near_segment(pt(6.0, 3.0), a, a, 0.0, 2.0));
    }

    #[test]
    fn test_point_near_curve_control_points_only() {
        let ctrl = [pt(0.0, 0.0), pt(10.0, 20.0), pt(20.0, 0.0)];
        assert!(point_near_curve(pt(1.0, 1.0), &ctrl, 5.0));
        // (10, 5) is near the curve itself but far from every control point.
        assert!(!point_near_curve(pt(10.0, 5.0), &ctrl, 5.0));
        assert!(!point_near_curve(pt(1.0, 1.0), &[], 5.0));
    }
}
