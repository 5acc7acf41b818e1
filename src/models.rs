use chrono::{DateTime, Utc};
use serde::Serialize;

/// A validated resume artifact held as the current selection
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    /// File name without directory components
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Human-readable size ("1.5 KB")
    pub size_display: String,
    /// Detected media type, always "application/pdf" once validated
    pub media_type: String,
    /// Source path on disk
    pub path: String,
    /// When the selection was made (session-only metadata)
    pub selected_at: DateTime<Utc>,
}

/// Result of a selection attempt reported to the webview
///
/// Rejection is a recoverable outcome, not a command error: `file` is `None`
/// and `error` carries the user-facing message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionOutcome {
    pub file: Option<SelectedFile>,
    pub error: Option<String>,
}

impl SelectionOutcome {
    pub fn accepted(file: SelectedFile) -> Self {
        Self {
            file: Some(file),
            error: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            file: None,
            error: Some(message.into()),
        }
    }

    pub fn cleared() -> Self {
        Self {
            file: None,
            error: None,
        }
    }
}
