//! Cohen-Sutherland line clipping.
//!
//! Each endpoint gets a 4-bit out-code describing which clip edges it
//! violates. Both codes zero: trivial accept. Codes sharing a bit: trivial
//! reject. Otherwise the outside endpoint is moved to its violated edge and
//! the loop repeats.

use crate::basics::{PointD, RectD};

// ============================================================================
// Out-codes
// ============================================================================

pub const OUT_INSIDE: u32 = 0;
pub const OUT_LEFT: u32 = 1;
pub const OUT_RIGHT: u32 = 2;
pub const OUT_BOTTOM: u32 = 4;
pub const OUT_TOP: u32 = 8;

/// Compute the out-code of `(x, y)` against `clip`.
///
/// ```text
///  1001 | 1000 | 1010
/// ------+------+------ clip.y2
///  0001 | 0000 | 0010
/// ------+------+------ clip.y1
///  0101 | 0100 | 0110
///    clip.x1  clip.x2
/// ```
#[inline]
pub fn out_code(x: f64, y: f64, clip: &RectD) -> u32 {
    let mut code = OUT_INSIDE;
    if x < clip.x1 {
        code |= OUT_LEFT;
    } else if x > clip.x2 {
        code |= OUT_RIGHT;
    }
    if y < clip.y1 {
        code |= OUT_BOTTOM;
    } else if y > clip.y2 {
        code |= OUT_TOP;
    }
    code
}

// ============================================================================
// Segment clipping
// ============================================================================

/// Clip the segment `p0 -> p1` to `clip`.
///
/// Returns the clipped endpoints, or `None` when the segment lies entirely
/// outside. Endpoints moved by the clip land exactly on the rectangle
/// boundary; a fully-inside segment is returned unchanged.
pub fn clip_segment(p0: PointD, p1: PointD, clip: &RectD) -> Option<(PointD, PointD)> {
    let (mut x0, mut y0) = (p0.x, p0.y);
    let (mut x1, mut y1) = (p1.x, p1.y);
    let mut code0 = out_code(x0, y0, clip);
    let mut code1 = out_code(x1, y1, clip);

    loop {
        if code0 | code1 == 0 {
            return Some((PointD::new(x0, y0), PointD::new(x1, y1)));
        }
        if code0 & code1 != 0 {
            return None;
        }

        let code_out = if code0 != 0 { code0 } else { code1 };
        // A set out-code bit implies the corresponding delta is non-zero,
        // so these divisions cannot hit zero; reject anyway if they would.
        let (x, y) = if code_out & OUT_TOP != 0 {
            if y1 == y0 {
                return None;
            }
            (x0 + (x1 - x0) * (clip.y2 - y0) / (y1 - y0), clip.y2)
        } else if code_out & OUT_BOTTOM != 0 {
            if y1 == y0 {
                return None;
            }
            (x0 + (x1 - x0) * (clip.y1 - y0) / (y1 - y0), clip.y1)
        } else if code_out & OUT_RIGHT != 0 {
            if x1 == x0 {
                return None;
            }
            (clip.x2, y0 + (y1 - y0) * (clip.x2 - x0) / (x1 - x0))
        } else {
            if x1 == x0 {
                return None;
            }
            (clip.x1, y0 + (y1 - y0) * (clip.x1 - x0) / (x1 - x0))
        };

        if code_out == code0 {
            x0 = x;
            y0 = y;
            code0 = out_code(x0, y0, clip);
        } else {
            x1 = x;
            y1 = y;
            code1 = out_code(x1, y1, clip);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
