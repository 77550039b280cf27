//! Bresenham line rasterization.
//!
//! Run-length accumulator formulation: the error term starts at `dx / 2`,
//! loses `dy` per step along the dominant axis, and gains back `dx` when it
//! underflows, at which point the minor coordinate advances. Endpoints are
//! rounded to the nearest grid cell; the emitted sequence includes both and
//! is strictly monotonic along the dominant axis.
//!
//! This is deliberately the line formulation, not the midpoint decision rule
//! used for circles (see `circle_midpoint`).

use crate::basics::{iround, PointD, PointI};

// ============================================================================
// LineBresenham
// ============================================================================

/// Iterator over the grid points of a line.
///
/// Internally iterates along the dominant axis from its smaller coordinate
/// to its larger one; when that reverses the caller's endpoint order the
/// iterator records it in [`LineBresenham::reversed`], and
/// [`line_points`] restores caller order. The swaps are local to iteration
/// state only; the stored shape's endpoints are never reordered.
pub struct LineBresenham {
    x: i32,
    x_end: i32,
    y: i32,
    y_step: i32,
    dx: i32,
    dy: i32,
    error: i32,
    steep: bool,
    reversed: bool,
    done: bool,
}

impl LineBresenham {
    pub fn new(p0: PointD, p1: PointD) -> Self {
        let mut x0 = iround(p0.x);
        let mut y0 = iround(p0.y);
        let mut x1 = iround(p1.x);
        let mut y1 = iround(p1.y);

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }

        let reversed = x0 > x1;
        if reversed {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        Self {
            x: x0,
            x_end: x1,
            y: y0,
            y_step: if y0 < y1 { 1 } else { -1 },
            dx,
            dy,
            error: dx / 2,
            steep,
            reversed,
            done: false,
        }
    }

    /// `true` when iteration order is opposite to the caller's endpoint
    /// order.
    pub fn reversed(&self) -> bool {
        self.reversed
    }
}

impl Iterator for LineBresenham {
    type Item = PointI;

    fn next(&mut self) -> Option<PointI> {
        if self.done {
            return None;
        }
        let p = if self.steep {
            PointI::new(self.y, self.x)
        } else {
            PointI::new(self.x, self.y)
        };

        if self.x == self.x_end {
            self.done = true;
        } else {
            self.x += 1;
            self.error -= self.dy;
            if self.error < 0 {
                self.y += self.y_step;
                self.error += self.dx;
            }
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.done {
            0
        } else {
            (self.x_end - self.x) as usize + 1
        };
        (n, Some(n))
    }
}

/// Rasterize the line from `p0` to `p1`, ordered from `p0`'s rounded grid
/// cell to `p1`'s, both inclusive.
pub fn line_points(p0: PointD, p1: PointD) -> Vec<PointI> {
    let iter = LineBresenham::new(p0, p1);
    let reversed = iter.reversed();
    let mut points: Vec<PointI> = iter.collect();
    if reversed {
        points.reverse();
    }
    points
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
    fn test_shallow_line() {
        // (0,0) -> (5,2) must step y as [0,0,1,1,2,2]
        let pts = line_points(pt(0.0, 0.0), pt(5.0, 2.0));
        assert_eq!(pts.len(), 6);
        let ys: Vec<i32> = pts.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0, 0, 1, 1, 2, 2]);
        let xs: Vec<i32> = pts.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_endpoints_included() {
        let pts = line_points(pt(2.0, 3.0), pt(11.0, 7.0));
        assert_eq!(*pts.first().unwrap(), PointI::new(2, 3));
        assert_eq!(*pts.last().unwrap(), PointI::new(11, 7));
    }

    #[test]
    fn test_caller_order_preserved_when_reversed() {
        // p0 right of p1: iteration internally runs left-to-right, output
        // must still start at p0.
        let pts = line_points(pt(5.0, 2.0), pt(0.0, 0.0));
        assert_eq!(*pts.first().unwrap(), PointI::new(5, 2));
        assert_eq!(*pts.last().unwrap(), PointI::new(0, 0));
    }

    #[test]
    fn test_steep_line_monotonic_in_y() {
        let pts = line_points(pt(0.0, 0.0), pt(2.0, 9.0));
        assert_eq!(pts.len(), 10);
        for w in pts.windows(2) {
            assert_eq!(w[1].y - w[0].y, 1);
        }
        assert_eq!(*pts.first().unwrap(), PointI::new(0, 0));
        assert_eq!(*pts.last().unwrap(), PointI::new(2, 9));
    }

    #[test]
    fn test_monotonic_dominant_axis_all_octants() {
        let ends = [
            (7.0, 3.0),
            (-7.0, 3.0),
            (7.0, -3.0),
            (-7.0, -3.0),
            (3.0, 7.0),
            (-3.0, 7.0),
            (3.0, -7.0),
            (-3.0, -7.0),
        ];
        for (ex, ey) in ends {
            let pts = line_points(pt(0.0, 0.0), pt(ex, ey));
            assert_eq!(*pts.first().unwrap(), PointI::new(0, 0));
            assert_eq!(
                *pts.last().unwrap(),
                PointI::new(ex as i32, ey as i32)
            );
            let steep = ey.abs() > ex.abs();
            for w in pts.windows(2) {
                let d = if steep { w[1].y - w[0].y } else { w[1].x - w[0].x };
                assert_eq!(d.abs(), 1, "dominant axis must advance every step");
            }
        }
    }

    #[test]
    fn test_degenerate_line_is_single_point() {
        let pts = line_points(pt(4.2, 4.2), pt(4.2, 4.2));
        assert_eq!(pts, vec![PointI::new(4, 4)]);
    }

    #[test]
    fn test_non_integer_endpoints_rounded() {
        let pts = line_points(pt(0.4, 0.6), pt(4.6, 0.4));
        assert_eq!(*pts.first().unwrap(), PointI::new(0, 1));
        assert_eq!(*pts.last().unwrap(), PointI::new(5, 0));
    }
}
