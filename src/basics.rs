//! Foundation types: rounding helpers, points, and the normalized
//! clip rectangle that the rest of the engine depends on.

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round a double to the nearest integer (round half away from zero).
#[inline]
pub fn iround(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

pub type PointI = PointBase<i32>;
pub type PointD = PointBase<f64>;

/// Euclidean distance between two points.
#[inline]
pub fn calc_distance(a: PointD, b: PointD) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

// ============================================================================
// RectD
// ============================================================================

/// An axis-aligned rectangle with normalized bounds (`x1 <= x2`, `y1 <= y2`).
///
/// Construction normalizes whatever corner order the caller supplies, so a
/// stored `RectD` always satisfies the min/max invariant. Used as the clip
/// region by the Cohen-Sutherland clipper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectD {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl RectD {
    /// Create a rectangle from two opposite corners, in any order.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// Create a rectangle from two opposite corner points, in any order.
    pub fn from_corners(c0: PointD, c1: PointD) -> Self {
        Self::new(c0.x, c0.y, c1.x, c1.y)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Returns `true` if the point (x, y) is inside or on the boundary.
    #[inline]
    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Returns `true` if `p` is inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: PointD) -> bool {
        self.hit_test(p.x, p.y)
    }
}

// ============================================================================
// Tests
// ============================================================================
