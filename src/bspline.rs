//! Uniform cubic B-spline evaluation.
//!
//! The blending functions weight a sliding window of four control points;
//! an N-point control polygon yields N-3 overlapping spans concatenated
//! into one continuous polyline. The curve approximates rather than
//! interpolates its control polygon.

use itertools::Itertools;

use crate::basics::PointD;

/// The four uniform cubic B-spline blending functions at parameter `t`.
///
/// They form a partition of unity: `b0 + b1 + b2 + b3 == 1` for any `t`,
/// which keeps the curve inside the control polygon's convex hull.
#[inline]
pub fn bspline_basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let u = 1.0 - t;
    [
        u * u * u / 6.0,
        (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0,
        (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0,
        t3 / 6.0,
    ]
}

/// Evaluate the B-spline polyline for a control polygon.
///
/// Each 4-point window is sampled at `segments_per_span + 1` uniform
/// parameters including both span ends, so consecutive spans share their
/// join point. Fewer than four control points yields an empty polyline.
pub fn bspline_polyline(control: &[PointD], segments_per_span: usize) -> Vec<PointD> {
    if control.len() < 4 || segments_per_span == 0 {
        return Vec::new();
    }

    let spans = control.len() - 3;
    let mut polyline = Vec::with_capacity(spans * (segments_per_span + 1));
    for (p0, p1, p2, p3) in control.iter().copied().tuple_windows() {
        for j in 0..=segments_per_span {
            let t = j as f64 / segments_per_span as f64;
            let b = bspline_basis(t);
            polyline.push(PointD::new(
                b[0] * p0.x + b[1] * p1.x + b[2] * p2.x + b[3] * p3.x,
                b[0] * p0.y + b[1] * p1.y + b[2] * p2.y + b[3] * p3.y,
            ));
        }
    }
    polyline
}

// ============================================================================
// Tests
// ============================================================================
