use std::f64::consts::{FRAC_PI_2, PI};

use serde::Serialize;

use crate::coords::{Vec3, Viewport};
use crate::layout::{Geometry, Material, PlacedObject, Role};
use crate::paint::Color;

use super::config::ControlsMode;

pub const SKY_COLOR: u32 = 0x87ceeb;
pub const SUN_POSITION: Vec3 = Vec3::new(200.0, 400.0, 100.0);
pub const SUN_RADIUS: f64 = 30.0;
pub const GROUND_SIZE: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Light {
    Ambient { color: Color, intensity: f32 },
    /// Parallel light shining from `position` towards the origin.
    Directional { color: Color, intensity: f32, position: Vec3 },
}

/// Sky, lights, sun and ground.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Environment {
    pub sky: Color,
    pub lights: Vec<Light>,
    pub objects: Vec<PlacedObject>,
}

impl Environment {
    pub fn daylight() -> Self {
        let lights = vec![
            Light::Ambient { color: Color::WHITE, intensity: 0.6 },
            Light::Directional {
                color: Color::WHITE,
                intensity: 0.8,
                position: Vec3::new(0.0, 500.0, 500.0),
            },
            Light::Directional {
                color: Color::WHITE,
                intensity: 1.0,
                position: SUN_POSITION,
            },
        ];

        let sun = PlacedObject::new(
            Role::Sun,
            Geometry::Sphere { radius: SUN_RADIUS },
            SUN_POSITION,
            Material::basic(Color::from_hex_u32(0xffee88)),
        );
        // Planes are authored in XY; lay the ground flat in XZ.
        let ground = PlacedObject::new(
            Role::Ground,
            Geometry::Plane { width: GROUND_SIZE, height: GROUND_SIZE },
            Vec3::ZERO,
            Material::standard(Color::from_hex_u32(0x228b22)),
        )
        .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0));

        Self {
            sky: Color::from_hex_u32(SKY_COLOR),
            lights,
            objects: vec![sun, ground],
        }
    }
}

/// Perspective camera description.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Camera {
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            fov_y_deg: 50.0,
            aspect: viewport.aspect(),
            near: 1.0,
            far: 2000.0,
            position: Vec3::new(0.0, 200.0, 400.0),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct FlyControls {
    /// World units per second.
    pub movement_speed: f64,
    /// Radians per second.
    pub roll_speed: f64,
    pub drag_to_look: bool,
    pub auto_forward: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f64,
}

/// Camera control parameters; the host owns the implementation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Controls {
    Fly(FlyControls),
    Orbit(OrbitControls),
}

impl Controls {
    pub fn for_mode(mode: ControlsMode) -> Self {
        match mode {
            ControlsMode::Fly => Controls::Fly(FlyControls {
                movement_speed: 800.0,
                roll_speed: PI / 8.0,
                drag_to_look: true,
                auto_forward: false,
            }),
            ControlsMode::Orbit => Controls::Orbit(OrbitControls {
                target: Vec3::ZERO,
                enable_damping: false,
                damping_factor: 0.05,
            }),
        }
    }
}
