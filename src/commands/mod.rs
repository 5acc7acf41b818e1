//! Tauri commands driving the uploader and the analysis shell

pub mod analysis;
pub mod uploader;

pub use analysis::*;
pub use uploader::*;

use crate::analysis::{RequestState, Shell};
use std::path::PathBuf;
use tauri::{AppHandle, Emitter};
use tokio::sync::Mutex;

/// Event emitted on every request-state transition
const STATE_EVENT: &str = "analysis:state";

/// Managed state wrapping the analysis shell
pub struct ShellState {
    pub(crate) shell: Mutex<Shell>,
    /// Where preview copies live for this session
    pub(crate) cache_dir: PathBuf,
}

impl Default for ShellState {
    fn default() -> Self {
        let cache_dir = crate::uploader::default_cache_dir().unwrap_or_else(|| {
            tracing::warn!("[Shell] No platform cache dir, using temp dir for previews");
            std::env::temp_dir().join("resume-analyzer-previews")
        });

        Self {
            shell: Mutex::new(Shell::new()),
            cache_dir,
        }
    }
}

/// Notify the webview of a request-state transition
pub(crate) fn emit_state(app: &AppHandle, state: &RequestState) {
    if let Err(e) = app.emit(STATE_EVENT, state) {
        tracing::warn!("[Shell] Failed to emit state event: {}", e);
    }
}
