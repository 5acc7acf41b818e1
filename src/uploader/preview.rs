//! Transient preview resource
//!
//! A validated selection gets a session-scoped copy in the app cache dir that
//! the webview embeds as an inline PDF preview. The copy is the resource: it
//! is created on acceptance and removed on clear, on replacement, and on drop,
//! so no copy outlives the selection that produced it.

use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Default cache directory for preview copies
pub fn default_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("com.resume-analyzer.app").join("previews"))
}

/// Distinguishes successive acquisitions, so re-selecting the same source
/// never produces a copy at the path a dropped handle is about to remove
static ACQUISITION_SEQ: AtomicU64 = AtomicU64::new(0);

/// Cache key derived from the source path and the acquisition sequence
fn cache_key(source: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source.to_string_lossy().as_bytes());
    let hash = hasher.finalize();
    let seq = ACQUISITION_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}_{}.pdf", hex::encode(&hash[..8]), seq)
}

/// A cached copy of the selected artifact, removed when the handle goes away
#[derive(Debug)]
pub struct PreviewResource {
    path: PathBuf,
}

impl PreviewResource {
    /// Copy the artifact into the cache directory
    pub fn create(source: &Path, cache_dir: &Path) -> Result<Self, String> {
        fs::create_dir_all(cache_dir)
            .map_err(|e| format!("Failed to create preview cache dir: {}", e))?;

        let path = cache_dir.join(cache_key(source));
        fs::copy(source, &path).map_err(|e| format!("Failed to cache preview: {}", e))?;

        Ok(Self { path })
    }

    /// Path of the cached copy
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base64-encoded content for a `data:application/pdf;base64,` embed
    pub fn data_base64(&self) -> Result<String, String> {
        fs::read(&self.path)
            .map(|bytes| STANDARD.encode(&bytes))
            .map_err(|e| format!("Failed to read preview: {}", e))
    }
}

impl Drop for PreviewResource {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::debug!("[Preview] Could not remove cached copy {:?}: {}", self.path, e);
        }
    }
}
