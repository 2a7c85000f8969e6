//! Earnings scene engine.
//!
//! This crate owns the pure pieces of the earnings scene: turning earnings
//! records into placed 3D objects, describing the progress-ring overlay as a
//! 2D draw list, and assembling both into a scene description that an
//! external renderer consumes. Rendering itself lives outside this crate.
//!
//! # Quick start
//!
//! ```rust
//! use earnings_engine::layout::{compute_layout, EarningsRecord};
//! use earnings_engine::paint::Color;
//! use earnings_engine::progress::compute_progress;
//!
//! let records = vec![EarningsRecord::new("Earn Grid", 50_000.0, Color::from_hex_u32(0xff6347))];
//!
//! let objects = compute_layout(&records).unwrap();
//! assert_eq!(objects[0].position.x, 0.0);
//!
//! let progress = compute_progress(&records, 100_000.0).unwrap();
//! assert_eq!(progress.percentage.text, "50%");
//! ```

pub mod assembly;
pub mod assets;
pub mod coords;
pub mod draw;
pub mod error;
pub mod layout;
pub mod logging;
pub mod paint;
pub mod progress;
pub mod time;

pub use error::{AssetLoadError, ValidationError};
