//! `earnings-studio [SCENE.json]`
//!
//! Assembles the earnings scene, resolves image billboards and writes the
//! resulting frame snapshot to stdout as JSON for the rendering shell.
//! Without an argument the built-in sample scene is used.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use earnings_engine::assembly::{SceneConfig, SceneContext};
use earnings_engine::assets::{
    resolve_image_billboards, CollectingReporter, FsImageLoader, ResolveOptions, RetryingLoader,
};
use earnings_engine::coords::Viewport;
use earnings_engine::logging::{init_logging, LoggingConfig};
use earnings_engine::AssetLoadError;

const VIEWPORT: Viewport = Viewport::new(1280.0, 720.0);

/// Reads the config named on the command line, or falls back to the sample.
/// Image paths resolve against the config file's directory.
fn load_config() -> anyhow::Result<(SceneConfig, PathBuf)> {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        log::info!("no scene config given, using the built-in sample scene");
        return Ok((SceneConfig::default(), PathBuf::from(".")));
    };

    let config = SceneConfig::load(&path)
        .with_context(|| format!("loading scene config {}", path.display()))?;
    let asset_root = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok((config, asset_root))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let (config, asset_root) = load_config()?;
    let mut scene = SceneContext::new(config, VIEWPORT).context("scene data rejected")?;

    // The scene is usable before any image has loaded.
    let first = scene.frame()?;
    log::info!(
        "scene ready: {} object(s), progress {}",
        first.scene.objects.len(),
        first.scene.progress.percentage.text
    );

    let pending = scene.config().image_billboards();
    if !pending.is_empty() {
        let loader = Arc::new(RetryingLoader::new(
            FsImageLoader::new(asset_root),
            scene.config().asset_attempts,
        ));
        let options = ResolveOptions { timeout: scene.config().asset_timeout() };
        let reporter = CollectingReporter::default();

        let placed = resolve_image_billboards(loader, &pending, options, &reporter).await;
        let failed = reporter.take();
        if !failed.is_empty() {
            let urls: Vec<&str> = failed.iter().map(AssetLoadError::url).collect();
            log::warn!(
                "{} of {} image billboard(s) left out of the scene: {}",
                failed.len(),
                pending.len(),
                urls.join(", ")
            );
        }
        scene.apply_image_billboards(placed);
    }

    let snapshot = scene.frame()?;
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &snapshot).context("writing scene description")?;
    writeln!(out)?;
    Ok(())
}
