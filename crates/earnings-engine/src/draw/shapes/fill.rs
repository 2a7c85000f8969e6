use serde::Serialize;

use crate::coords::Rect;
use crate::draw::{DrawCmd, DrawList, ZIndex};
use crate::paint::Color;

/// Solid rectangle fill payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillCmd {
    pub rect: Rect,
    pub color: Color,
}

impl DrawList {
    /// Records a solid rectangle fill.
    #[inline]
    pub fn push_fill(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Fill(FillCmd { rect, color }));
    }
}
