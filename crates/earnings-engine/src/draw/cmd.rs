use serde::Serialize;

use crate::draw::shapes::arc::ArcCmd;
use crate::draw::shapes::fill::FillCmd;
use crate::draw::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the stream:
/// - add a new shape module under `draw::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCmd {
    Fill(FillCmd),
    Arc(ArcCmd),
    Text(TextCmd),
}
