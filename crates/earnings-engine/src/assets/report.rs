use std::sync::Mutex;

use crate::error::AssetLoadError;

/// Receives asset failures that did not abort the scene.
pub trait ErrorReporter {
    fn report(&self, error: &AssetLoadError);
}

/// Reports through the `log` facade at warn level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, error: &AssetLoadError) {
        log::warn!("image billboard omitted: {error}");
    }
}

/// Logs like [`LogReporter`] and keeps every failure for later inspection.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    errors: Mutex<Vec<AssetLoadError>>,
}

impl CollectingReporter {
    /// Drains the collected failures.
    pub fn take(&self) -> Vec<AssetLoadError> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<AssetLoadError>> {
        // Pushing a clone cannot leave the vector half-written, so a poisoned
        // lock still holds consistent data.
        self.errors.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&self, error: &AssetLoadError) {
        LogReporter.report(error);
        self.lock().push(error.clone());
    }
}
