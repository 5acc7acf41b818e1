//! Uploader commands
//!
//! Selection attempts come in as paths (native drag-drop or the file picker
//! dialog both yield one). A media-type rejection is a recoverable outcome
//! carried in the `SelectionOutcome` payload; only I/O failures are command
//! errors.

use super::{emit_state, ShellState};
use crate::analysis::Selection;
use crate::models::{SelectedFile, SelectionOutcome};
use crate::uploader::{validate_candidate, PreviewResource};
use std::path::Path;
use tauri::{AppHandle, State};

/// Validate a candidate and make it the current selection
#[tauri::command]
pub async fn select_resume(
    path: String,
    state: State<'_, ShellState>,
    app: AppHandle,
) -> Result<SelectionOutcome, String> {
    let candidate = Path::new(&path);

    let file = match validate_candidate(candidate) {
        Ok(file) => file,
        Err(e) if e.is_recoverable() => {
            tracing::info!("[Uploader] Rejected candidate {:?}: {}", candidate, e);
            return Ok(SelectionOutcome::rejected(e.to_string()));
        }
        Err(e) => return Err(e.to_string()),
    };

    let preview = PreviewResource::create(candidate, &state.cache_dir)?;

    let mut shell = state.shell.lock().await;
    shell.file_selected(Some(Selection {
        file: file.clone(),
        preview,
    }));
    emit_state(&app, shell.request_state());

    tracing::info!("[Uploader] Selected {} ({})", file.name, file.size_display);
    Ok(SelectionOutcome::accepted(file))
}

/// Discard the current selection and its preview copy
#[tauri::command]
pub async fn clear_selection(
    state: State<'_, ShellState>,
    app: AppHandle,
) -> Result<SelectionOutcome, String> {
    let mut shell = state.shell.lock().await;
    shell.file_selected(None);
    emit_state(&app, shell.request_state());

    tracing::info!("[Uploader] Selection cleared");
    Ok(SelectionOutcome::cleared())
}

/// Snapshot of the current selection, if any
#[tauri::command]
pub async fn get_selection(state: State<'_, ShellState>) -> Result<Option<SelectedFile>, String> {
    let shell = state.shell.lock().await;
    Ok(shell.selection().cloned())
}

/// Base64 content of the preview copy for inline embedding
#[tauri::command]
pub async fn get_resume_preview(state: State<'_, ShellState>) -> Result<Option<String>, String> {
    let shell = state.shell.lock().await;
    shell.preview().map(|p| p.data_base64()).transpose()
}
