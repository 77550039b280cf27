//! Parametric curve evaluators.
//!
//! Converts control polygons into dense polylines for the renderer:
//!
//! - **Quadratic Bezier** — Bernstein form over exactly three control
//!   points; endpoints are hit exactly.
//! - **Catmull-Rom** — interpolating cubic over a sliding 4-point window;
//!   the first and last control points are duplicated as virtual tangent
//!   points, so three control points suffice.
//!
//! Every evaluator returns an empty polyline when given fewer control
//! points than its minimum. That is the defined degenerate result, not an
//! error. The uniform cubic B-spline lives in `bspline`.

use crate::basics::PointD;
use crate::bspline::bspline_polyline;
use crate::config::{EditorConfig, SplineFamily};

// ============================================================================
// Quadratic Bezier
// ============================================================================

/// Evaluate the quadratic Bezier defined by the first three control points.
///
/// Samples `t` uniformly over `segments` spans, producing `segments + 1`
/// points with `B(0) == p0` and `B(1) == p2` exactly. Fewer than three
/// control points yields an empty polyline.
pub fn quad_bezier(control: &[PointD], segments: usize) -> Vec<PointD> {
    if control.len() < 3 || segments == 0 {
        return Vec::new();
    }
    let (p0, p1, p2) = (control[0], control[1], control[2]);

    let mut polyline = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        let u = 1.0 - t;
        let b0 = u * u;
        let b1 = 2.0 * u * t;
        let b2 = t * t;
        polyline.push(PointD::new(
            b0 * p0.x + b1 * p1.x + b2 * p2.x,
            b0 * p0.y + b1 * p1.y + b2 * p2.y,
        ));
    }
    polyline
}

// ============================================================================
// Catmull-Rom
// ============================================================================

/// Evaluate one Catmull-Rom span at parameter `t`, tangents from `p0`/`p3`.
#[inline]
fn catmull_rom_point(p0: PointD, p1: PointD, p2: PointD, p3: PointD, t: f64) -> PointD {
    let t2 = t * t;
    let t3 = t2 * t;
    let blend = |a: f64, b: f64, c: f64, d: f64| {
        0.5 * ((2.0 * b)
            + (-a + c) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };
    PointD::new(
        blend(p0.x, p1.x, p2.x, p3.x),
        blend(p0.y, p1.y, p2.y, p3.y),
    )
}

/// Evaluate a Catmull-Rom spline through all control points.
///
/// The window slides over `[p(i-1), p(i), p(i+1), p(i+2)]`; the first and
/// last control points are repeated to synthesize the boundary tangents, so
/// the curve starts at `control[0]` and ends at `control[n-1]`. Fewer than
/// three control points yields an empty polyline.
pub fn catmull_rom(control: &[PointD], segments_per_span: usize) -> Vec<PointD> {
    if control.len() < 3 || segments_per_span == 0 {
        return Vec::new();
    }

    let n = control.len();
    let pick = |i: isize| -> PointD {
        // Clamp repeats the first/last point as the virtual tangent point.
        control[i.clamp(0, n as isize - 1) as usize]
    };

    let mut polyline = Vec::with_capacity((n - 1) * (segments_per_span + 1));
    for span in 0..n - 1 {
        let i = span as isize;
        let (p0, p1, p2, p3) = (pick(i - 1), pick(i), pick(i + 1), pick(i + 2));
        for j in 0..=segments_per_span {
            let t = j as f64 / segments_per_span as f64;
            polyline.push(catmull_rom_point(p0, p1, p2, p3, t));
        }
    }
    polyline
}

// ============================================================================
// Stored-curve dispatch
// ============================================================================

/// Evaluate a stored curve's polyline the way the editor renders it:
/// exactly three control points is a quadratic Bezier; four or more uses
/// the configured spline family; fewer than three is empty.
pub fn evaluate_polyline(control: &[PointD], config: &EditorConfig) -> Vec<PointD> {
    match control.len() {
        0..=2 => Vec::new(),
        3 => quad_bezier(control, config.bezier_segments),
        _ => match config.spline_family {
            SplineFamily::BSpline => bspline_polyline(control, config.spline_segments),
            SplineFamily::CatmullRom => catmull_rom(control, config.spline_segments),
        },
    }
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
    fn test_bezier_endpoints_exact() {
        let ctrl = [pt(1.0, 2.0), pt(50.0, -30.0), pt(9.0, 4.0)];
        let poly = quad_bezier(&ctrl, 64);
        assert_eq!(poly.len(), 65);
        assert_eq!(poly[0], ctrl[0]);
        assert_eq!(*poly.last().unwrap(), ctrl[2]);
    }

    #[test]
    fn test_bezier_midpoint_value() {
        // B(0.5) = 0.25 p0 + 0.5 p1 + 0.25 p2
        let ctrl = [pt(0.0, 0.0), pt(4.0, 8.0), pt(8.0, 0.0)];
        let poly = quad_bezier(&ctrl, 2);
        assert_eq!(poly.len(), 3);
        assert!((poly[1].x - 4.0).abs() < 1e-12);
        assert!((poly[1].y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_bezier_too_few_points_is_empty() {
        assert!(quad_bezier(&[pt(0.0, 0.0), pt(1.0, 1.0)], 10).is_empty());
        assert!(quad_bezier(&[], 10).is_empty());
    }

    #[test]
    fn test_catmull_rom_interpolates_controls() {
        let ctrl = [pt(0.0, 0.0), pt(5.0, 10.0), pt(10.0, 0.0), pt(15.0, 5.0)];
        let poly = catmull_rom(&ctrl, 8);
        assert_eq!(poly[0], ctrl[0]);
        assert_eq!(*poly.last().unwrap(), ctrl[3]);
        // Every control point lies on the curve (span starts hit them).
        for c in &ctrl {
            assert!(poly
                .iter()
                .any(|p| (p.x - c.x).abs() < 1e-9 && (p.y - c.y).abs() < 1e-9));
        }
    }

    #[test]
    fn test_catmull_rom_three_points() {
        let ctrl = [pt(0.0, 0.0), pt(5.0, 5.0), pt(10.0, 0.0)];
        let poly = catmull_rom(&ctrl, 10);
        assert!(!poly.is_empty());
        assert_eq!(poly[0], ctrl[0]);
        assert_eq!(*poly.last().unwrap(), ctrl[2]);
    }

    #[test]
    fn test_catmull_rom_too_few_points_is_empty() {
        assert!(catmull_rom(&[pt(0.0, 0.0), pt(1.0, 1.0)], 10).is_empty());
    }

    #[test]
    fn test_dispatch_by_control_count() {
        let cfg = EditorConfig::default();
        assert!(evaluate_polyline(&[pt(0.0, 0.0)], &cfg).is_empty());

        let three = [pt(0.0, 0.0), pt(1.0, 2.0), pt(2.0, 0.0)];
        let bez = evaluate_polyline(&three, &cfg);
        assert_eq!(bez.len(), cfg.bezier_segments + 1);

        let four = [pt(0.0, 0.0), pt(1.0, 2.0), pt(2.0, 0.0), pt(3.0, 2.0)];
        let spline = evaluate_polyline(&four, &cfg);
        assert_eq!(spline.len(), cfg.spline_segments + 1); // one B-spline span
    }

    #[test]
    fn test_dispatch_catmull_family() {
        let cfg = EditorConfig {
            spline_family: SplineFamily::CatmullRom,
            ..EditorConfig::default()
        };
        let four = [pt(0.0, 0.0), pt(1.0, 2.0), pt(2.0, 0.0), pt(3.0, 2.0)];
        let poly = evaluate_polyline(&four, &cfg);
        assert_eq!(poly[0], four[0]);
        assert_eq!(*poly.last().unwrap(), four[3]);
    }
}
