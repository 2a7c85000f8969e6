use std::f32::consts::TAU;

use serde::Serialize;

use crate::coords::Vec2;
use crate::draw::{DrawCmd, DrawList, ZIndex};
use crate::paint::Stroke;

/// Stroked circular arc payload.
///
/// Angles are in radians and follow the canvas convention for a y-down
/// raster: `0` points along +X and increasing angles sweep clockwise on
/// screen, so `-π/2` is 12 o'clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcCmd {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records a stroked arc.
    #[inline]
    pub fn push_arc(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        stroke: Stroke,
    ) {
        self.push(
            z,
            DrawCmd::Arc(ArcCmd {
                center,
                radius,
                start_angle,
                end_angle,
                stroke,
            }),
        );
    }

    /// Records a stroked full circle.
    #[inline]
    pub fn push_ring(&mut self, z: ZIndex, center: Vec2, radius: f32, stroke: Stroke) {
        self.push_arc(z, center, radius, 0.0, TAU, stroke);
    }
}
