//! Application state management

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn docs_dir(&self) -> &PathBuf {
        &self.inner.config.paths.docs_dir
    }

    pub fn frontend_dir(&self) -> &PathBuf {
        &self.inner.config.paths.frontend_dir
    }

    /// Directory the generated QR code PNGs are written to and served from.
    pub fn qr_dir(&self) -> PathBuf {
        self.inner.config.paths.static_dir.join("qr_code")
    }

    /// Directory holding per-document logos, matched by naming convention.
    pub fn logos_dir(&self) -> PathBuf {
        self.inner.config.paths.static_dir.join("logos")
    }
}
