use std::sync::Arc;

use serde::Serialize;

use crate::coords::Viewport;
use crate::error::ValidationError;
use crate::layout::{
    checked_total, compute_billboards, compute_layout, EarningsRecord, PlacedObject,
};
use crate::progress::{compute_progress, progress_overlay, ProgressDraw, ProgressState};
use crate::time::{FrameClock, FrameTime};

use super::config::SceneConfig;
use super::environment::{Camera, Controls, Environment};

/// Data-dependent part of the scene. Rebuilt only when records, target or
/// resolved image billboards change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledScene {
    pub controls: Controls,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    /// Earnings bars, then text billboards, then image billboards.
    pub objects: Vec<PlacedObject>,
    pub progress: ProgressDraw,
    pub progress_overlay: PlacedObject,
}

/// Builds the scene for `config`, adding already-resolved image billboards.
pub fn assemble_scene(
    config: &SceneConfig,
    image_billboards: &[PlacedObject],
) -> Result<AssembledScene, ValidationError> {
    let mut objects = compute_layout(&config.records)?;
    objects.extend(compute_billboards(&config.text_billboards()));
    objects.extend_from_slice(image_billboards);

    if !config.show_labels {
        for object in &mut objects {
            object.label = None;
        }
    }

    Ok(AssembledScene {
        controls: Controls::for_mode(config.controls),
        environment: config.show_environment.then(Environment::daylight),
        objects,
        progress: compute_progress(&config.records, config.target_amount)?,
        progress_overlay: progress_overlay(),
    })
}

/// What the host needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    #[serde(skip)]
    pub time: FrameTime,
    /// Increments every time the scene is rebuilt.
    pub revision: u64,
    pub camera: Camera,
    pub scene: Arc<AssembledScene>,
}

/// Owns one scene instance: its configuration, the viewport, the frame
/// clock and the memoised assembly.
#[derive(Debug)]
pub struct SceneContext {
    config: SceneConfig,
    viewport: Viewport,
    clock: FrameClock,
    image_billboards: Vec<PlacedObject>,
    cached: Option<Arc<AssembledScene>>,
    revision: u64,
}

impl SceneContext {
    /// Validates `config` up front so a bad configuration fails at startup.
    pub fn new(config: SceneConfig, viewport: Viewport) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            config,
            viewport,
            clock: FrameClock::new(),
            image_billboards: Vec::new(),
            cached: None,
            revision: 0,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Replaces the earnings data. Invalid data leaves the context unchanged.
    pub fn set_records(&mut self, records: Vec<EarningsRecord>) -> Result<(), ValidationError> {
        checked_total(&records)?;
        self.config.records = records;
        self.invalidate();
        Ok(())
    }

    pub fn set_target(&mut self, target: f64) -> Result<(), ValidationError> {
        ProgressState::new(0.0, target)?;
        self.config.target_amount = target;
        self.invalidate();
        Ok(())
    }

    /// Installs image billboards once their loads have finished.
    pub fn apply_image_billboards(&mut self, placed: Vec<PlacedObject>) {
        log::info!("applying {} image billboard(s)", placed.len());
        self.image_billboards = placed;
        self.invalidate();
    }

    /// Only the camera depends on the viewport; the scene is kept.
    pub fn resize(&mut self, viewport: Viewport) {
        if !viewport.is_valid() {
            log::debug!("ignoring degenerate viewport {viewport:?}");
            return;
        }
        self.viewport = viewport;
    }

    pub fn camera(&self) -> Camera {
        Camera::for_viewport(self.viewport)
    }

    /// Returns the current scene, rebuilding it if something changed.
    pub fn scene(&mut self) -> Result<Arc<AssembledScene>, ValidationError> {
        if let Some(scene) = &self.cached {
            return Ok(Arc::clone(scene));
        }

        let scene = Arc::new(assemble_scene(&self.config, &self.image_billboards)?);
        self.revision += 1;
        log::debug!(
            "scene rebuilt (revision {}, {} objects)",
            self.revision,
            scene.objects.len()
        );
        self.cached = Some(Arc::clone(&scene));
        Ok(scene)
    }

    /// Per-frame entry point for the host's animation callback.
    pub fn frame(&mut self) -> Result<FrameSnapshot, ValidationError> {
        let time = self.clock.tick();
        let scene = self.scene()?;
        Ok(FrameSnapshot {
            time,
            revision: self.revision,
            camera: self.camera(),
            scene,
        })
    }

    fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::ControlsMode;
    use crate::coords::Vec3;
    use crate::layout::{place_image_billboard, ImageBillboard, ImageSize, Role};
    use crate::paint::Color;

    fn rec(project: &str, amount: f64) -> EarningsRecord {
        EarningsRecord::new(project, amount, Color::from_hex_u32(0xffa500))
    }

    fn context(config: SceneConfig) -> SceneContext {
        SceneContext::new(config, Viewport::new(1280.0, 720.0)).unwrap()
    }

    fn count(scene: &AssembledScene, pred: impl Fn(&Role) -> bool) -> usize {
        scene.objects.iter().filter(|o| pred(&o.role)).count()
    }

    #[test]
    fn sample_scene_contents() {
        let scene = assemble_scene(&SceneConfig::default(), &[]).unwrap();
        assert_eq!(count(&scene, |r| matches!(r, Role::EarningsBar { .. })), 1);
        assert_eq!(count(&scene, |r| *r == Role::Billboard), 1);
        assert_eq!(count(&scene, |r| *r == Role::ImageBillboard), 0);
        assert!(scene.environment.is_some());
        assert!(matches!(scene.controls, Controls::Fly(_)));
        assert_eq!(scene.progress.percentage.text, "0%");
    }

    #[test]
    fn labels_can_be_disabled() {
        let config = SceneConfig::default().show_labels(false);
        let scene = assemble_scene(&config, &[]).unwrap();
        assert!(scene.objects.iter().all(|o| o.label.is_none()));
    }

    #[test]
    fn environment_can_be_disabled() {
        let config = SceneConfig::default()
            .show_environment(false)
            .controls(ControlsMode::Orbit);
        let scene = assemble_scene(&config, &[]).unwrap();
        assert!(scene.environment.is_none());
        assert!(matches!(scene.controls, Controls::Orbit(_)));
    }

    #[test]
    fn frames_reuse_the_scene_until_data_changes() {
        let mut ctx = context(SceneConfig::default());

        let first = ctx.frame().unwrap();
        let second = ctx.frame().unwrap();
        assert_eq!(first.revision, 1);
        assert_eq!(second.revision, 1);
        assert!(Arc::ptr_eq(&first.scene, &second.scene));
        assert_eq!(second.time.frame_index, 1);

        ctx.set_records(vec![rec("A", 50_000.0), rec("B", 25_000.0)]).unwrap();
        let third = ctx.frame().unwrap();
        assert_eq!(third.revision, 2);
        assert_eq!(third.scene.progress.percentage.text, "75%");
    }

    #[test]
    fn invalid_update_keeps_previous_state() {
        let mut ctx = context(SceneConfig::default());
        ctx.frame().unwrap();

        assert!(ctx.set_records(vec![rec("", 1.0)]).is_err());
        assert_eq!(
            ctx.set_records(vec![rec("A", 1e308), rec("B", 1e308)]),
            Err(ValidationError::TotalOverflow)
        );
        assert!(ctx.set_target(0.0).is_err());

        let snapshot = ctx.frame().unwrap();
        assert_eq!(snapshot.revision, 1);
        assert_eq!(ctx.config().records[0].project, "Earn Grid");
    }

    #[test]
    fn resize_changes_camera_only() {
        let mut ctx = context(SceneConfig::default());
        let before = ctx.frame().unwrap();

        ctx.resize(Viewport::new(1000.0, 500.0));
        let after = ctx.frame().unwrap();
        assert_eq!(after.camera.aspect, 2.0);
        assert!(Arc::ptr_eq(&before.scene, &after.scene));

        ctx.resize(Viewport::new(0.0, 0.0));
        assert_eq!(ctx.camera().aspect, 2.0);
    }

    #[test]
    fn applied_image_billboards_show_up() {
        let mut ctx = context(SceneConfig::default());
        let billboard = ImageBillboard {
            position: Vec3::new(200.0, 50.0, 0.0),
            image_url: "ad.png".into(),
        };
        let placed = place_image_billboard(&billboard, ImageSize::new(200, 100)).unwrap();

        ctx.apply_image_billboards(vec![placed]);
        let scene = ctx.scene().unwrap();
        assert_eq!(count(&scene, |r| *r == Role::ImageBillboard), 1);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SceneConfig::default().target_amount(-5.0);
        assert!(SceneContext::new(config, Viewport::new(1.0, 1.0)).is_err());
    }

    #[test]
    fn snapshot_serializes() {
        let mut ctx = context(SceneConfig::default());
        let json = serde_json::to_value(ctx.frame().unwrap()).unwrap();
        assert_eq!(json["revision"], 1);
        assert_eq!(json["scene"]["objects"][0]["role"], "earnings_bar");
        assert_eq!(json["scene"]["objects"][0]["label"]["text"], "Earn Grid: £10");
        assert_eq!(json["scene"]["progress"]["draw_list"][0]["kind"], "fill");
        assert_eq!(json["scene"]["controls"]["mode"], "fly");
    }
}
