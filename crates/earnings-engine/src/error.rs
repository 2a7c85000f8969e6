//! Error types shared across the engine.
//!
//! Two families with different blast radius:
//! - [`ValidationError`] rejects a whole computation. It signals a bug in the
//!   caller's data or configuration and is never retried.
//! - [`AssetLoadError`] is local to a single image billboard. It is reported
//!   and the billboard is left out; the rest of the scene is unaffected.

use std::fmt;
use std::time::Duration;

/// Invalid input to the layout or progress computations.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The progress target is zero, negative or not finite.
    NonPositiveTarget { target: f64 },
    /// A record carries a negative amount.
    NegativeAmount { index: usize, project: String, amount: f64 },
    /// A record carries a NaN or infinite amount.
    NonFiniteAmount { index: usize, project: String },
    /// A record has an empty (or whitespace-only) project name.
    EmptyProject { index: usize },
    /// The amounts are finite but their sum is not.
    TotalOverflow,
    /// A billboard in the configuration sits at a NaN or infinite position.
    NonFinitePosition { billboard: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTarget { target } => {
                write!(f, "target amount must be positive and finite, got {target}")
            }
            Self::NegativeAmount { index, project, amount } => {
                write!(f, "record {index} ({project:?}) has negative amount {amount}")
            }
            Self::NonFiniteAmount { index, project } => {
                write!(f, "record {index} ({project:?}) has a non-finite amount")
            }
            Self::EmptyProject { index } => write!(f, "record {index} has an empty project name"),
            Self::TotalOverflow => write!(f, "sum of record amounts is not finite"),
            Self::NonFinitePosition { billboard } => {
                write!(f, "billboard {billboard} has a non-finite position")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure to obtain the metadata of an image billboard.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetLoadError {
    /// The source could not be read.
    Io { url: String, message: String },
    /// The bytes are not an image format we can read dimensions from.
    Decode { url: String, message: String },
    /// The image reports a zero width or height, so no aspect ratio exists.
    EmptyImage { url: String, width: u32, height: u32 },
    /// The load did not finish within the configured timeout.
    Timeout { url: String, after: Duration },
    /// The loader task panicked or was cancelled.
    Failed { url: String, message: String },
}

impl AssetLoadError {
    /// The image source the failure belongs to.
    pub fn url(&self) -> &str {
        match self {
            Self::Io { url, .. }
            | Self::Decode { url, .. }
            | Self::EmptyImage { url, .. }
            | Self::Timeout { url, .. }
            | Self::Failed { url, .. } => url,
        }
    }

    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Timeout { .. })
    }
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { url, message } => write!(f, "failed to read image {url:?}: {message}"),
            Self::Decode { url, message } => write!(f, "failed to decode image {url:?}: {message}"),
            Self::EmptyImage { url, width, height } => {
                write!(f, "image {url:?} has degenerate size {width}x{height}")
            }
            Self::Timeout { url, after } => {
                write!(f, "loading image {url:?} timed out after {} ms", after.as_millis())
            }
            Self::Failed { url, message } => write!(f, "loading image {url:?} failed: {message}"),
        }
    }
}

impl std::error::Error for AssetLoadError {}
