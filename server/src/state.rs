use std::path::Path;

use log::{info, warn};
use regression::LinearModel;

/// Shared application state: the model loaded once at startup and held
/// read-only for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct AppState {
    model: Option<LinearModel>,
}

impl AppState {
    /// Creates a state with an explicitly provided model (or none).
    pub fn new(model: Option<LinearModel>) -> Self {
        Self { model }
    }

    /// Builds the state by attempting to load the artifact at `path`.
    ///
    /// A missing or unreadable artifact is downgraded to "model
    /// unavailable": the service still starts and keeps the info and
    /// health endpoints usable.
    pub fn from_artifact(path: &Path) -> Self {
        match pipeline::artifact::load(path) {
            Ok(model) => {
                info!("model loaded from {}", path.display());
                Self::new(Some(model))
            }
            Err(e) => {
                warn!("serving without a model: {e}");
                Self::new(None)
            }
        }
    }

    /// Returns the loaded model, if any.
    #[inline]
    pub fn model(&self) -> Option<&LinearModel> {
        self.model.as_ref()
    }
}
