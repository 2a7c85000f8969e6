//! Coordinate and geometry types shared by the layout engine and the
//! progress raster.
//!
//! World space (3D):
//! - scene units, +Y up
//! - the ground plane sits at `y = 0`
//!
//! Raster space (2D):
//! - pixels, origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;
mod vec3;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use viewport::Viewport;
