use serde::Serialize;

use crate::coords::Vec3;
use crate::paint::Color;

/// What a placed object stands for, so the host can tag or pick nodes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    /// Cuboid for the record at `index` in the input sequence.
    EarningsBar { index: usize },
    Billboard,
    ImageBillboard,
    Sun,
    Ground,
    /// Plane textured with the rasterised progress ring.
    ProgressOverlay,
}

/// Geometry in world units, centred on the object's position.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Geometry {
    Cuboid { width: f64, height: f64, depth: f64 },
    /// Flat quad in the object's local XY plane.
    Plane { width: f64, height: f64 },
    Sphere { radius: f64 },
}

/// Lighting model requested from the host renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shading {
    /// Lit by the scene lights.
    Standard,
    /// Unlit, shows its color or texture as-is.
    Basic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub shading: Shading,
    pub color: Color,
    /// Image source mapped onto the surface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    pub double_sided: bool,
    pub transparent: bool,
}

impl Material {
    pub fn standard(color: Color) -> Self {
        Self {
            shading: Shading::Standard,
            color,
            texture: None,
            double_sided: false,
            transparent: false,
        }
    }

    pub fn basic(color: Color) -> Self {
        Self {
            shading: Shading::Basic,
            color,
            texture: None,
            double_sided: false,
            transparent: false,
        }
    }

    /// Unlit, double-sided, white-tinted material showing `texture`.
    pub fn textured(texture: impl Into<String>) -> Self {
        Self {
            shading: Shading::Basic,
            color: Color::WHITE,
            texture: Some(texture.into()),
            double_sided: true,
            transparent: false,
        }
    }
}

/// Visual style of a screen-space label (rendered by the host as an
/// overlay element pinned to a 3D point).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelStyle {
    pub font_size_px: f32,
    pub bold: bool,
    pub color: Color,
    pub background: Color,
    /// `[vertical, horizontal]` padding in pixels.
    pub padding_px: [f32; 2],
    pub corner_radius_px: f32,
    pub centered: bool,
}

impl LabelStyle {
    /// Style of the `"{project}: £{amount}"` labels above the bars.
    pub fn bar() -> Self {
        Self {
            font_size_px: 14.0,
            bold: true,
            color: Color::BLACK,
            background: Color::WHITE.with_alpha(0.7),
            padding_px: [2.0, 5.0],
            corner_radius_px: 4.0,
            centered: false,
        }
    }

    /// Style of text billboard captions.
    pub fn billboard() -> Self {
        Self {
            font_size_px: 12.0,
            padding_px: [4.0, 6.0],
            centered: true,
            ..Self::bar()
        }
    }
}

/// Text pinned to an object, positioned relative to the object's centre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub offset: Vec3,
    pub style: LabelStyle,
}

/// Fully resolved description of one scene node, ready for insertion into
/// the host's scene graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedObject {
    #[serde(flatten)]
    pub role: Role,
    pub geometry: Geometry,
    pub position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    pub material: Material,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

impl PlacedObject {
    pub fn new(role: Role, geometry: Geometry, position: Vec3, material: Material) -> Self {
        Self {
            role,
            geometry,
            position,
            rotation: Vec3::ZERO,
            material,
            label: None,
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }
}
