//! Frame timing.
//!
//! The host's animation scheduler drives frames; [`SceneContext`] owns one
//! `FrameClock` and ticks it once per presented frame so per-frame consumers
//! (camera controls) get a clamped delta.
//!
//! [`SceneContext`]: crate::assembly::SceneContext

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
