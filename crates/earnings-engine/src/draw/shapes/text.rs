use serde::Serialize;

use crate::coords::Vec2;
use crate::draw::{DrawCmd, DrawList, ZIndex};
use crate::paint::Color;

/// Font request, resolved by the host's text stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub family: String,
    /// Font size in raster pixels.
    pub size: f32,
    pub bold: bool,
}

impl Font {
    pub fn bold(family: impl Into<String>, size: f32) -> Self {
        Self { family: family.into(), size, bold: true }
    }
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextCmd {
    pub text: String,
    pub font: Font,
    pub color: Color,
    /// Centre of the alphabetic baseline, in raster pixels. Text is always
    /// horizontally centred on it.
    pub anchor: Vec2,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: Font,
        color: Color,
        anchor: Vec2,
    ) {
        self.push(
            z,
            DrawCmd::Text(TextCmd {
                text: text.into(),
                font,
                color,
                anchor,
            }),
        );
    }
}
