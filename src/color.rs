//! Shape style color.
//!
//! A minimal RGB value type with f32 components in `[0, 1]`, the working
//! range the renderer consumes directly. 8-bit construction is provided for
//! palette tables coming from the UI layer.

use serde::{Deserialize, Serialize};

/// RGB color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Construct from 8-bit components.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::BLACK
    }
}

// ============================================================================
// Tests
// ============================================================================
