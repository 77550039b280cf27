//! Editor configuration.
//!
//! Tunables that affect sampling density and interaction tolerances but not
//! algorithm correctness. The host application can persist or override these
//! through serde.

use serde::{Deserialize, Serialize};

/// Which spline family renders stored curves with four or more control
/// points. Three-point curves are always quadratic Beziers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplineFamily {
    BSpline,
    CatmullRom,
}

/// Sampling densities and interaction tolerances for an editing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Sample count for a quadratic Bezier (polyline has `+1` points).
    pub bezier_segments: usize,
    /// Samples per spline span for B-spline / Catmull-Rom evaluation.
    pub spline_segments: usize,
    /// Spline family used for curves with >= 4 control points.
    pub spline_family: SplineFamily,
    /// Extra pick slop added to a segment's stroke width, in pixels.
    pub segment_hit_tolerance: f64,
    /// Pick radius around curve control points, in pixels.
    pub curve_hit_tolerance: f64,
    /// Half-width of the square eraser footprint, in pixels.
    pub eraser_half_width: f64,
    /// Stroke width stamped on new segments, circles, rectangles, curves.
    pub default_line_width: f32,
    /// Point size stamped on new pixel dabs.
    pub default_point_size: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            bezier_segments: 100,
            spline_segments: 20,
            spline_family: SplineFamily::BSpline,
            segment_hit_tolerance: 2.0,
            curve_hit_tolerance: 5.0,
            eraser_half_width: 7.5,
            default_line_width: 3.0,
            default_point_size: 3.0,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
