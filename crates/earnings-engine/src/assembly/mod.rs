//! Scene assembly.
//!
//! One configurable module covers every scene variant: a [`SceneConfig`]
//! picks the controls, labels and environment, and a [`SceneContext`] owns
//! the state the host would otherwise keep in globals. The host creates one
//! context per scene, calls [`SceneContext::frame`] from its animation
//! callback and rebuilds its scene graph whenever the snapshot's revision
//! changes.

pub mod config;
pub mod context;
pub mod environment;

pub use config::{ConfigError, ControlsMode, SceneConfig};
pub use context::{assemble_scene, AssembledScene, FrameSnapshot, SceneContext};
pub use environment::{Camera, Controls, Environment, FlyControls, Light, OrbitControls};
