//! Analysis commands
//!
//! `analyze_resume` drives one full request: transition to Loading, upload,
//! apply the completion. The shell lock is released before the network await,
//! so selection and query commands stay responsive while a request runs.

use super::{emit_state, ShellState};
use crate::analysis::{AnalyzeDecision, RagClient, RequestState};
use tauri::{AppHandle, State};

/// Trigger analysis of the current selection and return the final state
#[tauri::command]
pub async fn analyze_resume(
    state: State<'_, ShellState>,
    app: AppHandle,
) -> Result<RequestState, String> {
    let (upload_path, file_name, generation) = {
        let mut shell = state.shell.lock().await;
        let decision = shell.analyze_requested();
        emit_state(&app, shell.request_state());

        match decision {
            AnalyzeDecision::Issue {
                upload_path,
                file_name,
                generation,
            } => (upload_path, file_name, generation),
            AnalyzeDecision::NoSelection | AnalyzeDecision::InFlight => {
                return Ok(shell.request_state().clone());
            }
        }
    }; // lock released before the long-running upload

    let result = match tokio::fs::read(&upload_path).await {
        Ok(bytes) => RagClient::from_env().analyze(&file_name, bytes).await,
        Err(e) => Err(format!("Failed to read selection: {}", e)),
    };

    let mut shell = state.shell.lock().await;
    if shell.request_completed(generation, result) {
        emit_state(&app, shell.request_state());
    } else {
        tracing::info!(
            "[Analysis] Dropped stale completion for generation {}",
            generation
        );
    }
    Ok(shell.request_state().clone())
}

/// Snapshot of the request lifecycle for the webview
#[tauri::command]
pub async fn get_request_state(state: State<'_, ShellState>) -> Result<RequestState, String> {
    let shell = state.shell.lock().await;
    Ok(shell.request_state().clone())
}
