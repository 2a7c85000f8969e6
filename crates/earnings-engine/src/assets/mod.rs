//! Image billboard resolution.
//!
//! Image billboards are the only part of the scene that waits on I/O: their
//! width depends on the image's aspect ratio. Each load runs as its own task
//! under a timeout, so a slow or missing image delays only its own billboard.
//! Failures go to an [`ErrorReporter`] and the billboard is left out.

mod loader;
mod report;

pub use loader::{FsImageLoader, ImageLoader, RetryingLoader};
pub use report::{CollectingReporter, ErrorReporter, LogReporter};

use std::sync::Arc;
use std::time::Duration;

use crate::error::AssetLoadError;
use crate::layout::{place_image_billboard, ImageBillboard, PlacedObject};

/// Options for [`resolve_image_billboards`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResolveOptions {
    /// Upper bound for a single billboard's load, retries included.
    pub timeout: Duration,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(10) }
    }
}

/// Loads the metadata of every image billboard concurrently and places the
/// ones that succeed.
///
/// The returned objects keep the input order. Every failure (I/O, decode,
/// degenerate size, timeout, a loader that panics) is passed to `reporter`
/// exactly once.
pub async fn resolve_image_billboards<L, R>(
    loader: Arc<L>,
    billboards: &[ImageBillboard],
    options: ResolveOptions,
    reporter: &R,
) -> Vec<PlacedObject>
where
    L: ImageLoader + 'static,
    R: ErrorReporter + ?Sized,
{
    let tasks: Vec<_> = billboards
        .iter()
        .map(|billboard| {
            let loader = Arc::clone(&loader);
            let url = billboard.image_url.clone();
            let timeout = options.timeout;

            tokio::spawn(async move {
                let loaded = tokio::time::timeout(timeout, loader.load(&url)).await;
                loaded.unwrap_or_else(|_| Err(AssetLoadError::Timeout { url, after: timeout }))
            })
        })
        .collect();

    // Every task is already running; awaiting the handles in turn keeps the
    // input order without holding back any load.
    let mut placed = Vec::with_capacity(billboards.len());
    for (billboard, task) in billboards.iter().zip(tasks) {
        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(err) => Err(AssetLoadError::Failed {
                url: billboard.image_url.clone(),
                message: err.to_string(),
            }),
        };

        match outcome.and_then(|size| place_image_billboard(billboard, size)) {
            Ok(object) => {
                log::debug!("placed image billboard {:?}", billboard.image_url);
                placed.push(object);
            }
            Err(err) => reporter.report(&err),
        }
    }

    placed
}
