//! 2D draw stream types for the progress raster.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands (the host rasterises them onto a
//!   canvas and uploads the result as a texture)
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific helpers isolated per shape file under `draw::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, SortKey, ZIndex};
