//! Progress renderer (data stage): cumulative earnings and a target in, a
//! declarative description of the progress-ring raster out.
//!
//! The host draws [`ProgressDraw::draw_list`] onto a `1024 × 1024` canvas,
//! uploads it as a texture and maps it onto the overlay plane returned by
//! [`progress_overlay`].

pub mod format;

use std::f32::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

use crate::coords::{Rect, Vec2, Vec3};
use crate::draw::shapes::arc::ArcCmd;
use crate::draw::shapes::text::{Font, TextCmd};
use crate::draw::{DrawList, ZIndex};
use crate::error::ValidationError;
use crate::layout::{checked_total, EarningsRecord, Geometry, Material, PlacedObject, Role};
use crate::paint::{Color, Stroke};

/// Raster edge length in pixels (square).
pub const RASTER_SIZE: f32 = 1024.0;
pub const TITLE: &str = "Earnings Progress";
pub const RING_CENTER: Vec2 = Vec2::new(RASTER_SIZE / 2.0, 800.0);
pub const RING_RADIUS: f32 = 200.0;
pub const RING_LINE_WIDTH: f32 = 40.0;
/// 12 o'clock on a y-down canvas.
pub const RING_START_ANGLE: f32 = -FRAC_PI_2;

/// Texture name the overlay plane refers to; the host binds the rasterised
/// draw list under it.
pub const PROGRESS_TEXTURE: &str = "canvas:progress";
pub const OVERLAY_SIZE: f64 = 80.0;
pub const OVERLAY_POSITION: Vec3 = Vec3::new(0.0, 180.0, -200.0);

const FONT_FAMILY: &str = "Arial";
const BACKGROUND: u32 = 0x222222;
const TRACK: u32 = 0x555555;
const FILL: u32 = 0x4caf50;
const AMOUNT_COLOR: u32 = 0x90ee90;
const PERCENT_COLOR: u32 = 0xffff00;

const Z_BACKGROUND: ZIndex = ZIndex::new(0);
const Z_RING: ZIndex = ZIndex::new(1);
const Z_TEXT: ZIndex = ZIndex::new(2);

/// Completion toward the target.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ProgressState {
    /// Sum of all record amounts.
    pub current: f64,
    pub target: f64,
    /// `min(current / target, 1)`, always in `[0, 1]`.
    pub fraction: f64,
}

impl ProgressState {
    pub fn new(current: f64, target: f64) -> Result<Self, ValidationError> {
        if !(target.is_finite() && target > 0.0) {
            return Err(ValidationError::NonPositiveTarget { target });
        }
        Ok(Self { current, target, fraction: (current / target).min(1.0) })
    }

    /// Foreground sweep in radians.
    #[inline]
    pub fn sweep(&self) -> f32 {
        TAU * self.fraction as f32
    }
}

/// Full-circle track plus the clockwise progress arc from 12 o'clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRing {
    pub track: ArcCmd,
    pub fill: ArcCmd,
}

/// Everything needed to rasterise the progress overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressDraw {
    pub state: ProgressState,
    pub raster: Rect,
    pub ring: ProgressRing,
    pub title: TextCmd,
    pub amount: TextCmd,
    pub percentage: TextCmd,
    /// The commands above plus the background fill, in paint order.
    pub draw_list: DrawList,
}

fn centered_text(text: String, size: f32, color: Color, anchor: Vec2) -> TextCmd {
    TextCmd {
        text,
        font: Font::bold(FONT_FAMILY, size),
        color,
        anchor,
    }
}

/// Describes the progress raster for `records` against `target`.
///
/// Fails on a non-positive or non-finite target, on invalid records and on
/// amounts whose sum overflows; never produces NaN or infinite fractions.
pub fn compute_progress(
    records: &[EarningsRecord],
    target: f64,
) -> Result<ProgressDraw, ValidationError> {
    let state = ProgressState::new(checked_total(records)?, target)?;

    let raster = Rect::from_size(RASTER_SIZE, RASTER_SIZE);
    let mid_x = raster.center().x;

    let track_stroke = Stroke::new(RING_LINE_WIDTH, Color::from_hex_u32(TRACK));
    let fill_stroke = Stroke::new(RING_LINE_WIDTH, Color::from_hex_u32(FILL));
    let ring = ProgressRing {
        track: ArcCmd {
            center: RING_CENTER,
            radius: RING_RADIUS,
            start_angle: 0.0,
            end_angle: TAU,
            stroke: track_stroke,
        },
        fill: ArcCmd {
            center: RING_CENTER,
            radius: RING_RADIUS,
            start_angle: RING_START_ANGLE,
            end_angle: RING_START_ANGLE + state.sweep(),
            stroke: fill_stroke,
        },
    };

    let title = centered_text(TITLE.to_string(), 80.0, Color::WHITE, Vec2::new(mid_x, 150.0));
    let amount = centered_text(
        format::amount_text(state.current, state.target),
        100.0,
        Color::from_hex_u32(AMOUNT_COLOR),
        Vec2::new(mid_x, 300.0),
    );
    let percentage = centered_text(
        format::percentage_text(state.fraction),
        80.0,
        Color::from_hex_u32(PERCENT_COLOR),
        Vec2::new(RING_CENTER.x, RING_CENTER.y + 30.0),
    );

    let mut draw_list = DrawList::new();
    draw_list.push_fill(Z_BACKGROUND, raster, Color::from_hex_u32(BACKGROUND));
    draw_list.push_ring(Z_RING, RING_CENTER, RING_RADIUS, track_stroke);
    draw_list.push_arc(
        Z_RING,
        ring.fill.center,
        ring.fill.radius,
        ring.fill.start_angle,
        ring.fill.end_angle,
        fill_stroke,
    );
    for text in [&title, &amount, &percentage] {
        draw_list.push_text(
            Z_TEXT,
            text.text.clone(),
            text.font.clone(),
            text.color,
            text.anchor,
        );
    }

    log::debug!(
        "progress {:.4} ({} of {})",
        state.fraction,
        state.current,
        state.target
    );

    Ok(ProgressDraw {
        state,
        raster,
        ring,
        title,
        amount,
        percentage,
        draw_list,
    })
}

/// The in-scene plane that displays the progress raster.
pub fn progress_overlay() -> PlacedObject {
    let mut material = Material::textured(PROGRESS_TEXTURE);
    material.transparent = true;
    PlacedObject::new(
        Role::ProgressOverlay,
        Geometry::Plane { width: OVERLAY_SIZE, height: OVERLAY_SIZE },
        OVERLAY_POSITION,
        material,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCmd;

    fn rec(amount: f64) -> EarningsRecord {
        EarningsRecord::new("Earn Grid", amount, Color::from_hex_u32(0xff6347))
    }

    #[test]
    fn half_way() {
        let p = compute_progress(&[rec(50_000.0)], 100_000.0).unwrap();
        assert_eq!(p.state.fraction, 0.5);
        assert_eq!(p.percentage.text, "50%");
        assert_eq!(p.amount.text, "£50,000 / £100,000");
    }

    #[test]
    fn empty_records_are_zero() {
        let p = compute_progress(&[], 100_000.0).unwrap();
        assert_eq!(p.state.current, 0.0);
        assert_eq!(p.state.fraction, 0.0);
        assert_eq!(p.ring.fill.start_angle, p.ring.fill.end_angle);
    }

    #[test]
    fn over_target_is_clamped_to_full_circle() {
        let p = compute_progress(&[rec(80_000.0), rec(70_000.0)], 100_000.0).unwrap();
        assert_eq!(p.state.current, 150_000.0);
        assert_eq!(p.state.fraction, 1.0);
        assert_eq!(p.percentage.text, "100%");
        let swept = p.ring.fill.end_angle - p.ring.fill.start_angle;
        assert!((swept - TAU).abs() < 1e-5);
    }

    #[test]
    fn fraction_stays_in_unit_interval() {
        for amount in [0.0, 1.0, 99_999.0, 100_000.0, 1e12] {
            let f = compute_progress(&[rec(amount)], 100_000.0).unwrap().state.fraction;
            assert!((0.0..=1.0).contains(&f), "amount {amount} gave {f}");
        }
    }

    #[test]
    fn ring_starts_at_twelve_o_clock() {
        let p = compute_progress(&[rec(25_000.0)], 100_000.0).unwrap();
        assert_eq!(p.ring.fill.start_angle, -FRAC_PI_2);
        assert!((p.ring.fill.end_angle - 0.0).abs() < 1e-6);
        assert_eq!(p.ring.track.end_angle - p.ring.track.start_angle, TAU);
        assert_eq!(p.ring.fill.center, Vec2::new(512.0, 800.0));
    }

    #[test]
    fn non_positive_target_fails_fast() {
        for target in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                compute_progress(&[rec(10.0)], target),
                Err(ValidationError::NonPositiveTarget { .. })
            ));
        }
    }

    #[test]
    fn overflowing_total_is_rejected() {
        assert_eq!(
            compute_progress(&[rec(1e308), rec(1e308)], 100_000.0),
            Err(ValidationError::TotalOverflow)
        );
    }

    #[test]
    fn huge_amounts_are_printed_exactly() {
        let p = compute_progress(&[rec(1e17)], 1e18).unwrap();
        assert_eq!(
            p.amount.text,
            "£100,000,000,000,000,000 / £1,000,000,000,000,000,000"
        );
        assert_eq!(p.percentage.text, "10%");
    }

    #[test]
    fn invalid_record_fails() {
        assert!(compute_progress(&[rec(-1.0)], 100.0).is_err());
    }

    #[test]
    fn text_anchors() {
        let p = compute_progress(&[rec(10.0)], 100_000.0).unwrap();
        assert_eq!(p.title.text, TITLE);
        assert_eq!(p.title.anchor, Vec2::new(512.0, 150.0));
        assert_eq!(p.amount.anchor, Vec2::new(512.0, 300.0));
        assert_eq!(p.percentage.anchor, Vec2::new(512.0, 830.0));
    }

    #[test]
    fn draw_list_paints_background_then_rings_then_text() {
        let p = compute_progress(&[rec(10.0)], 100_000.0).unwrap();
        let kinds: Vec<&str> = p
            .draw_list
            .paint_order()
            .into_iter()
            .map(|item| match &item.cmd {
                DrawCmd::Fill(_) => "fill",
                DrawCmd::Arc(_) => "arc",
                DrawCmd::Text(_) => "text",
            })
            .collect();
        assert_eq!(kinds, vec!["fill", "arc", "arc", "text", "text", "text"]);
    }

    #[test]
    fn overlay_plane() {
        let overlay = progress_overlay();
        assert_eq!(overlay.role, Role::ProgressOverlay);
        assert_eq!(overlay.position, Vec3::new(0.0, 180.0, -200.0));
        assert_eq!(overlay.geometry, Geometry::Plane { width: 80.0, height: 80.0 });
        assert!(overlay.material.transparent);
    }
}
