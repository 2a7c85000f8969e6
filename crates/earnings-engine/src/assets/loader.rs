use std::future::Future;
use std::io::Cursor;
use std::path::PathBuf;

use crate::error::AssetLoadError;
use crate::layout::ImageSize;

/// Source of image metadata.
///
/// Implementations only need the natural pixel size; decoding the pixels is
/// the host renderer's job.
pub trait ImageLoader: Send + Sync {
    fn load(&self, url: &str) -> impl Future<Output = Result<ImageSize, AssetLoadError>> + Send;
}

/// Reads images from the local filesystem, resolving relative sources
/// against `root`.
#[derive(Debug, Clone)]
pub struct FsImageLoader {
    root: PathBuf,
}

impl FsImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ImageLoader for FsImageLoader {
    async fn load(&self, url: &str) -> Result<ImageSize, AssetLoadError> {
        let path = self.root.join(url);
        log::debug!("reading image {}", path.display());

        let bytes = tokio::fs::read(&path).await.map_err(|err| AssetLoadError::Io {
            url: url.to_string(),
            message: err.to_string(),
        })?;

        let decode = |message: String| AssetLoadError::Decode { url: url.to_string(), message };

        // Only the header is parsed; the pixel data is never decoded here.
        let (width, height) = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|err| decode(err.to_string()))?
            .into_dimensions()
            .map_err(|err| decode(err.to_string()))?;

        Ok(ImageSize::new(width, height))
    }
}

/// Retries transient failures of the wrapped loader, up to `attempts` tries
/// in total.
#[derive(Debug, Clone)]
pub struct RetryingLoader<L> {
    inner: L,
    attempts: u32,
}

impl<L> RetryingLoader<L> {
    /// `attempts` is clamped to at least one.
    pub fn new(inner: L, attempts: u32) -> Self {
        Self { inner, attempts: attempts.max(1) }
    }
}

impl<L: ImageLoader> ImageLoader for RetryingLoader<L> {
    async fn load(&self, url: &str) -> Result<ImageSize, AssetLoadError> {
        let mut attempt = 1;
        loop {
            match self.inner.load(url).await {
                Ok(size) => return Ok(size),
                Err(err) if err.is_transient() && attempt < self.attempts => {
                    log::debug!("attempt {attempt}/{} for {url:?} failed: {err}", self.attempts);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
