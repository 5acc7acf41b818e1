//! RAG backend client
//!
//! One outbound operation: upload the selected resume as multipart form data
//! to `POST {base}/rag-query` and interpret the response. Interpretation is
//! kept in pure helpers so the fallback rules are testable without a server.
//!
//! Answer interpretation:
//! - JSON body with a string `answer` field: that string
//! - non-string `answer`, or no `answer` field: pretty-printed JSON dump
//! - non-JSON body: the raw text
//! - empty body: "No answer returned."
//!
//! Error interpretation, in priority order: server-supplied `error` field,
//! transport-level failure message, generic "Analysis failed.".

use super::http_client::{rag_client, REQUEST_TIMEOUT};
use crate::uploader::PDF_MEDIA_TYPE;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

/// Fallback when no more specific failure message is available
const GENERIC_FAILURE: &str = "Analysis failed.";

/// Fallback when a successful response carries no body at all
const NO_ANSWER: &str = "No answer returned.";

/// Default backend address, overridable via `RAG_API_URL`
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Multipart field name the backend expects
const FILE_FIELD: &str = "file";

pub struct RagClient {
    base_url: String,
}

impl RagClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Build a client from `RAG_API_URL`, falling back to the local default
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("RAG_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Upload the artifact and return the displayable answer or failure message
    pub async fn analyze(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, String> {
        let url = format!("{}/rag-query", self.base_url);
        tracing::info!("[RagClient] Uploading {} ({} bytes) to {}", file_name, bytes.len(), url);

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(PDF_MEDIA_TYPE)
            .map_err(|e| format!("Failed to build upload: {}", e))?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = rag_client()
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_message(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| transport_message(&e))?;

        if status.is_success() {
            Ok(interpret_answer(&body))
        } else {
            tracing::warn!("[RagClient] Backend returned {}: {}", status, body);
            Err(interpret_error(status, &body))
        }
    }
}

/// Render a transport-level failure as a user-facing message
fn transport_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return format!(
            "Analysis request timed out after {} seconds.",
            REQUEST_TIMEOUT.as_secs()
        );
    }
    or_generic(err.to_string())
}

/// Extract the displayable answer from a successful response body
fn interpret_answer(body: &str) -> String {
    if body.is_empty() {
        return NO_ANSWER.to_string();
    }

    match serde_json::from_str::<Value>(body) {
        Ok(json) => match json.get("answer").filter(|v| !v.is_null()) {
            Some(answer) => display_value(answer),
            None => display_value(&json),
        },
        // not JSON: show the raw body
        Err(_) => body.to_string(),
    }
}

/// Extract the failure message from an error response
fn interpret_error(status: reqwest::StatusCode, body: &str) -> String {
    let server_error = serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|json| json.get("error"))
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_string());

    match server_error {
        Some(message) => message,
        None => or_generic(format!("Analysis request failed with status {}", status)),
    }
}

/// Strings render as-is, anything structured as a pretty JSON dump
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

fn or_generic(message: String) -> String {
    if message.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        message
    }
}
