//! Layout engine: earnings records and billboard configuration in, placed
//! 3D object descriptors out.
//!
//! Everything here is a pure function of its input. The host translates each
//! [`PlacedObject`] into scene-graph nodes (mesh + label) and rebuilds them
//! whenever the records change.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`record`] | `EarningsRecord`, record validation |
//! | [`object`] | `PlacedObject` and its geometry/material/label parts |
//! | [`bars`] | one cuboid per record, centred row along X |
//! | [`billboard`] | text billboards, image billboard sizing |

pub mod bars;
pub mod billboard;
pub mod object;
pub mod record;

pub use bars::{bar_center_x, compute_layout};
pub use billboard::{
    compute_billboards, place_image_billboard, size_image_billboard, BillboardSpec, ImageBillboard,
    ImageSize, TextBillboard,
};
pub use object::{Geometry, Label, LabelStyle, Material, PlacedObject, Role, Shading};
pub use record::{checked_total, validate_records, EarningsRecord};
