//! Affine transformation matrix.
//!
//! 2D affine transformations used by the transform engine: rotation,
//! scaling, and translation, composed about a shape's centroid.

use crate::basics::PointD;

/// Epsilon for affine matrix comparisons.
pub const AFFINE_EPSILON: f64 = 1e-14;

/// 2D affine transformation matrix.
///
/// Stores six components: `[sx, shy, shx, sy, tx, ty]` representing the
/// homogeneous 3x3 matrix with an implicit `[0 0 1]` bottom row:
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
///   |  0    0  1 |
/// ```
///
/// Transform: `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransAffine {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl TransAffine {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Identity matrix.
    pub fn new() -> Self {
        Self {
            sx: 1.0,
            shy: 0.0,
            shx: 0.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Custom matrix from six components.
    pub fn new_custom(sx: f64, shy: f64, shx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
        }
    }

    /// Rotation matrix (angle in radians).
    pub fn new_rotation(a: f64) -> Self {
        let (sa, ca) = a.sin_cos();
        Self::new_custom(ca, sa, -sa, ca, 0.0, 0.0)
    }

    /// Non-uniform scaling matrix.
    pub fn new_scaling(x: f64, y: f64) -> Self {
        Self::new_custom(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// Uniform scaling matrix.
    pub fn new_scaling_uniform(s: f64) -> Self {
        Self::new_custom(s, 0.0, 0.0, s, 0.0, 0.0)
    }

    /// Translation matrix.
    pub fn new_translation(x: f64, y: f64) -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Rotation about an arbitrary center: `T(c) * R(a) * T(-c)`.
    pub fn new_rotation_about(a: f64, center: PointD) -> Self {
        let mut m = Self::new();
        m.translate(-center.x, -center.y);
        m.rotate(a);
        m.translate(center.x, center.y);
        m
    }

    /// Uniform scaling about an arbitrary center: `T(c) * S(s) * T(-c)`.
    pub fn new_scaling_about(s: f64, center: PointD) -> Self {
        let mut m = Self::new();
        m.translate(-center.x, -center.y);
        m.scale(s, s);
        m.translate(center.x, center.y);
        m
    }

    // ====================================================================
    // Operations (mutate self)
    // ====================================================================

    /// Reset to identity.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }

    /// Translate.
    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.tx += x;
        self.ty += y;
        self
    }

    /// Rotate by angle `a` (radians).
    pub fn rotate(&mut self, a: f64) -> &mut Self {
        let (sa, ca) = a.sin_cos();
        let t0 = self.sx * ca - self.shy * sa;
        let t2 = self.shx * ca - self.sy * sa;
        let t4 = self.tx * ca - self.ty * sa;
        self.shy = self.sx * sa + self.shy * ca;
        self.sy = self.shx * sa + self.sy * ca;
        self.ty = self.tx * sa + self.ty * ca;
        self.sx = t0;
        self.shx = t2;
        self.tx = t4;
        self
    }

    /// Non-uniform scale.
    pub fn scale(&mut self, x: f64, y: f64) -> &mut Self {
        self.sx *= x;
        self.shx *= x;
        self.tx *= x;
        self.shy *= y;
        self.sy *= y;
        self.ty *= y;
        self
    }

    /// Post-multiply: `self = self * m`.
    pub fn multiply(&mut self, m: &TransAffine) -> &mut Self {
        let t0 = self.sx * m.sx + self.shy * m.shx;
        let t2 = self.shx * m.sx + self.sy * m.shx;
        let t4 = self.tx * m.sx + self.ty * m.shx + m.tx;
        self.shy = self.sx * m.shy + self.shy * m.sy;
        self.sy = self.shx * m.shy + self.sy * m.sy;
        self.ty = self.tx * m.shy + self.ty * m.sy + m.ty;
        self.sx = t0;
        self.shx = t2;
        self.tx = t4;
        self
    }

    /// Invert the matrix in place.
    pub fn invert(&mut self) -> &mut Self {
        let d = 1.0 / self.determinant();
        let t0 = self.sy * d;
        self.sy = self.sx * d;
        self.shy = -self.shy * d;
        self.shx = -self.shx * d;
        let t4 = -self.tx * t0 - self.ty * self.shx;
        self.ty = -self.tx * self.shy - self.ty * self.sy;
        self.sx = t0;
        self.tx = t4;
        self
    }

    // ====================================================================
    // Transformations
    // ====================================================================

    /// Forward transform: `(x, y) -> (x', y')`.
    #[inline]
    pub fn transform(&self, x: &mut f64, y: &mut f64) {
        let tmp = *x;
        *x = tmp * self.sx + *y * self.shx + self.tx;
        *y = tmp * self.shy + *y * self.sy + self.ty;
    }

    /// Forward transform of a point value.
    #[inline]
    pub fn transform_point(&self, p: PointD) -> PointD {
        let mut x = p.x;
        let mut y = p.y;
        self.transform(&mut x, &mut y);
        PointD::new(x, y)
    }

    // ====================================================================
    // Auxiliary
    // ====================================================================

    /// Determinant of the 2x2 portion.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.sx * self.sy - self.shy * self.shx
    }

    /// Check if this is an identity matrix.
    pub fn is_identity(&self, epsilon: f64) -> bool {
        (self.sx - 1.0).abs() <= epsilon
            && self.shy.abs() <= epsilon
            && self.shx.abs() <= epsilon
            && (self.sy - 1.0).abs() <= epsilon
            && self.tx.abs() <= epsilon
            && self.ty.abs() <= epsilon
    }
}

impl Default for TransAffine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
