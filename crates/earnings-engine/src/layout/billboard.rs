use serde::{Deserialize, Serialize};

use crate::coords::Vec3;
use crate::error::AssetLoadError;
use crate::paint::Color;

use super::object::{Geometry, Label, LabelStyle, Material, PlacedObject, Role};

pub const BILLBOARD_WIDTH: f64 = 60.0;
pub const BILLBOARD_HEIGHT: f64 = 100.0;
pub const BILLBOARD_DEPTH: f64 = 5.0;
/// Image billboards keep the height of text billboards; width follows the image.
pub const IMAGE_BILLBOARD_HEIGHT: f64 = BILLBOARD_HEIGHT;

const BILLBOARD_COLOR: u32 = 0xcccccc;

/// Boxed advertising placeholder with a caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBillboard {
    pub position: Vec3,
    pub text: String,
}

/// Flat billboard showing an image; its width is only known once the image
/// metadata has been loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBillboard {
    pub position: Vec3,
    pub image_url: String,
}

/// Billboard entry as written in a scene configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BillboardSpec {
    Text(TextBillboard),
    Image(ImageBillboard),
}

impl BillboardSpec {
    pub fn position(&self) -> Vec3 {
        match self {
            Self::Text(text) => text.position,
            Self::Image(image) => image.position,
        }
    }
}

/// Natural pixel size of an image.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Places the boxed text billboards. Independent of the earnings data.
pub fn compute_billboards(billboards: &[TextBillboard]) -> Vec<PlacedObject> {
    billboards
        .iter()
        .map(|billboard| {
            PlacedObject::new(
                Role::Billboard,
                Geometry::Cuboid {
                    width: BILLBOARD_WIDTH,
                    height: BILLBOARD_HEIGHT,
                    depth: BILLBOARD_DEPTH,
                },
                billboard.position,
                Material::standard(Color::from_hex_u32(BILLBOARD_COLOR)),
            )
            .with_label(Label {
                text: billboard.text.clone(),
                offset: Vec3::new(0.0, BILLBOARD_HEIGHT / 2.0, 0.0),
                style: LabelStyle::billboard(),
            })
        })
        .collect()
}

/// World size `(width, height)` of an image billboard: fixed height of 100,
/// width scaled by the image's aspect ratio.
///
/// Returns `None` when the image has no area.
pub fn size_image_billboard(size: ImageSize) -> Option<(f64, f64)> {
    if size.width == 0 || size.height == 0 {
        return None;
    }
    let aspect = f64::from(size.width) / f64::from(size.height);
    Some((IMAGE_BILLBOARD_HEIGHT * aspect, IMAGE_BILLBOARD_HEIGHT))
}

/// Builds the textured plane for an image billboard once its size is known.
pub fn place_image_billboard(
    billboard: &ImageBillboard,
    size: ImageSize,
) -> Result<PlacedObject, AssetLoadError> {
    let (width, height) = size_image_billboard(size).ok_or_else(|| AssetLoadError::EmptyImage {
        url: billboard.image_url.clone(),
        width: size.width,
        height: size.height,
    })?;

    Ok(PlacedObject::new(
        Role::ImageBillboard,
        Geometry::Plane { width, height },
        billboard.position,
        Material::textured(&billboard.image_url),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_billboard_is_fixed_size_with_label_on_top() {
        let placed = compute_billboards(&[TextBillboard {
            position: Vec3::new(-200.0, 50.0, 0.0),
            text: "Your business could be here".into(),
        }]);

        assert_eq!(placed.len(), 1);
        let b = &placed[0];
        assert_eq!(b.role, Role::Billboard);
        assert_eq!(b.geometry, Geometry::Cuboid { width: 60.0, height: 100.0, depth: 5.0 });
        assert_eq!(b.position, Vec3::new(-200.0, 50.0, 0.0));
        assert_eq!(b.material.color, Color::from_hex_u32(0xcccccc));

        let label = b.label.as_ref().unwrap();
        assert_eq!(label.offset, Vec3::new(0.0, 50.0, 0.0));
        assert!(label.style.centered);
    }

    #[test]
    fn image_width_scales_with_aspect() {
        assert_eq!(size_image_billboard(ImageSize::new(400, 200)), Some((200.0, 100.0)));
        assert_eq!(size_image_billboard(ImageSize::new(300, 300)), Some((100.0, 100.0)));
        assert_eq!(size_image_billboard(ImageSize::new(100, 400)), Some((25.0, 100.0)));
    }

    #[test]
    fn degenerate_image_has_no_size() {
        assert_eq!(size_image_billboard(ImageSize::new(0, 10)), None);
        assert_eq!(size_image_billboard(ImageSize::new(10, 0)), None);
    }

    #[test]
    fn image_billboard_is_textured_plane_at_position() {
        let billboard = ImageBillboard {
            position: Vec3::new(200.0, 50.0, 0.0),
            image_url: "assets/worldguessr.png".into(),
        };
        let placed = place_image_billboard(&billboard, ImageSize::new(1200, 600)).unwrap();

        assert_eq!(placed.role, Role::ImageBillboard);
        assert_eq!(placed.geometry, Geometry::Plane { width: 200.0, height: 100.0 });
        assert_eq!(placed.position, billboard.position);
        assert_eq!(placed.material.texture.as_deref(), Some("assets/worldguessr.png"));
        assert!(placed.material.double_sided);
        assert!(placed.label.is_none());
    }

    #[test]
    fn empty_image_is_a_load_error() {
        let billboard = ImageBillboard { position: Vec3::ZERO, image_url: "blank.png".into() };
        let err = place_image_billboard(&billboard, ImageSize::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            AssetLoadError::EmptyImage {
                url: "blank.png".into(),
                width: 0,
                height: 0,
            }
        );
    }

    #[test]
    fn billboard_entries_deserialize_by_kind() {
        let json = r#"[
            { "kind": "text", "position": { "x": -200, "y": 50, "z": 0 }, "text": "Ad" },
            { "kind": "image", "position": { "x": 200, "y": 50, "z": 0 }, "image_url": "a.png" }
        ]"#;
        let specs: Vec<BillboardSpec> = serde_json::from_str(json).unwrap();
        assert!(matches!(&specs[0], BillboardSpec::Text(t) if t.text == "Ad"));
        assert!(matches!(&specs[1], BillboardSpec::Image(i) if i.image_url == "a.png"));
    }
}
