use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::coords::Vec3;
use crate::error::ValidationError;
use crate::layout::{
    checked_total, BillboardSpec, EarningsRecord, ImageBillboard, TextBillboard,
};
use crate::paint::Color;
use crate::progress::ProgressState;

/// How the host lets the viewer move the camera.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlsMode {
    /// Free flight, drag to look.
    #[default]
    Fly,
    /// Orbit around the origin.
    Orbit,
}

/// Everything that varies between scene variants.
///
/// Built either through the chained setters or from JSON:
///
/// ```rust
/// use earnings_engine::assembly::{ControlsMode, SceneConfig};
///
/// let config = SceneConfig::default()
///     .controls(ControlsMode::Orbit)
///     .show_labels(false)
///     .target_amount(250_000.0);
/// assert!(config.validate().is_ok());
///
/// let json = r#"{ "controls": "orbit", "target_amount": 250000 }"#;
/// let from_json = SceneConfig::from_json_str(json).unwrap();
/// assert_eq!(from_json.controls, ControlsMode::Orbit);
/// ```
///
/// Fields missing from the JSON take their [`Default`] values, which
/// reproduce the sample scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub controls: ControlsMode,
    pub show_labels: bool,
    pub show_environment: bool,
    pub target_amount: f64,
    pub records: Vec<EarningsRecord>,
    pub billboards: Vec<BillboardSpec>,
    /// Per-billboard image load budget.
    pub asset_timeout_ms: u64,
    /// Total tries per image, first attempt included.
    pub asset_attempts: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            controls: ControlsMode::Fly,
            show_labels: true,
            show_environment: true,
            target_amount: 100_000.0,
            records: vec![EarningsRecord::new(
                "Earn Grid",
                10.0,
                Color::from_hex_u32(0xff6347),
            )],
            billboards: vec![
                BillboardSpec::Text(TextBillboard {
                    position: Vec3::new(-200.0, 50.0, 0.0),
                    text: "Your business could be here".to_string(),
                }),
                BillboardSpec::Image(ImageBillboard {
                    position: Vec3::new(200.0, 50.0, 0.0),
                    image_url: "assets/worldguessr.png".to_string(),
                }),
            ],
            asset_timeout_ms: 10_000,
            asset_attempts: 3,
        }
    }
}

impl SceneConfig {
    pub fn controls(mut self, mode: ControlsMode) -> Self {
        self.controls = mode;
        self
    }

    pub fn show_labels(mut self, on: bool) -> Self {
        self.show_labels = on;
        self
    }

    pub fn show_environment(mut self, on: bool) -> Self {
        self.show_environment = on;
        self
    }

    pub fn target_amount(mut self, target: f64) -> Self {
        self.target_amount = target;
        self
    }

    /// Replaces all billboards.
    pub fn billboards(mut self, billboards: Vec<BillboardSpec>) -> Self {
        self.billboards = billboards;
        self
    }

    pub fn asset_timeout(&self) -> Duration {
        Duration::from_millis(self.asset_timeout_ms)
    }

    pub fn text_billboards(&self) -> Vec<TextBillboard> {
        self.billboards
            .iter()
            .filter_map(|b| match b {
                BillboardSpec::Text(t) => Some(t.clone()),
                BillboardSpec::Image(_) => None,
            })
            .collect()
    }

    pub fn image_billboards(&self) -> Vec<ImageBillboard> {
        self.billboards
            .iter()
            .filter_map(|b| match b {
                BillboardSpec::Image(i) => Some(i.clone()),
                BillboardSpec::Text(_) => None,
            })
            .collect()
    }

    /// Applies the same checks as the layout and progress computations, and
    /// rejects billboards placed at NaN or infinite coordinates.
    pub fn validate(&self) -> Result<(), ValidationError> {
        checked_total(&self.records)?;
        ProgressState::new(0.0, self.target_amount)?;
        if let Some(billboard) = self.billboards.iter().position(|b| !b.position().is_finite()) {
            return Err(ValidationError::NonFinitePosition { billboard });
        }
        Ok(())
    }

    /// Parses and validates a JSON scene description.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON scene description file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!(
            "loaded scene config {} ({} records, {} billboards)",
            path.display(),
            config.records.len(),
            config.billboards.len()
        );
        Ok(config)
    }
}

/// Failure to obtain a usable [`SceneConfig`].
#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, source: std::io::Error },
    Parse(serde_json::Error),
    Validation(ValidationError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read scene config {path}: {source}"),
            Self::Parse(err) => write!(f, "invalid scene config: {err}"),
            Self::Validation(err) => write!(f, "invalid scene data: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}
