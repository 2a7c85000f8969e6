//! Paint model shared between the 3D descriptors and the progress raster.
//!
//! Colors are straight-alpha sRGB, which is what the host renderers expect
//! for material and canvas colors alike.

pub mod color;

pub use color::{Color, ColorParseError};

use serde::{Deserialize, Serialize};

/// Stroke applied along a path (the progress rings).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
