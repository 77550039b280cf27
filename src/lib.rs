//! easel: a 2D vector-shape geometry engine for an interactive paint editor.
//!
//! The crate owns everything between input events and a renderer: a tagged
//! shape store, classic rasterization algorithms (Bresenham lines, midpoint
//! circles), curve evaluators (quadratic Bezier, uniform cubic B-spline,
//! Catmull-Rom), Cohen-Sutherland clipping with per-kind shape
//! decomposition, centroid-relative affine transforms, and coarse
//! hit-testing for selection and erasing. Rendering itself is delegated
//! through [`render_primitives::DrawCommand`]; the crate never touches a
//! display surface.
//!
//! Typical flow: construct an [`editor::EditorState`], feed it input
//! (`add_*`, `select_at`, `erase_at`, `set_clip_rectangle` / `apply_clip`,
//! `transform_selected`), then walk [`editor::EditorState::for_each_shape`]
//! on every redraw.

pub mod basics;
pub mod bspline;
pub mod circle_midpoint;
pub mod clip_cohen_sutherland;
pub mod color;
pub mod config;
pub mod curves;
pub mod editor;
pub mod hit_test;
pub mod line_bresenham;
pub mod render_primitives;
pub mod shape;
pub mod trans_affine;

pub use basics::{PointD, PointI, RectD};
pub use color::Rgb;
pub use config::{EditorConfig, SplineFamily};
pub use editor::{EditorError, EditorState, Selection, TransformOp};
pub use render_primitives::{shape_to_command, DrawCommand};
pub use shape::{ControlPoints, Shape, ShapeKind};
pub use trans_affine::TransAffine;
