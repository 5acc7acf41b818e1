//! Analysis shell state machine
//!
//! Holds the current selection and the lifecycle of the single analysis
//! request. The state is a tagged enum so impossible combinations (loading
//! and failed at once) cannot be represented, and two guards harden the
//! original UI-affordance-only design:
//! - an explicit in-flight guard: analyze while Loading is a no-op
//! - a generation counter: a completion issued under an older selection is
//!   dropped instead of overwriting the newer selection's state

use crate::models::SelectedFile;
use crate::uploader::PreviewResource;
use serde::Serialize;
use std::path::PathBuf;

/// Message shown when analysis is triggered without a selection
pub const NO_FILE_SELECTED: &str = "No file selected.";

/// Lifecycle of the analysis request
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RequestState {
    Idle,
    Loading,
    Succeeded { answer: String },
    Failed { message: String },
}

/// A validated selection together with its preview resource
///
/// Dropping the selection releases the preview copy.
#[derive(Debug)]
pub struct Selection {
    pub file: SelectedFile,
    pub preview: PreviewResource,
}

/// Outcome of an analyze trigger
#[derive(Debug, PartialEq)]
pub enum AnalyzeDecision {
    /// Issue the outbound request for this artifact under this generation
    Issue {
        upload_path: PathBuf,
        file_name: String,
        generation: u64,
    },
    /// No selection present, state moved to Failed
    NoSelection,
    /// A request is already in flight, trigger ignored
    InFlight,
}

#[derive(Debug)]
pub struct Shell {
    selection: Option<Selection>,
    request: RequestState,
    generation: u64,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            selection: None,
            request: RequestState::Idle,
            generation: 0,
        }
    }

    /// A new selection (or a cleared one) arrived from the uploader
    ///
    /// Always resets the request state, and bumps the generation so that any
    /// in-flight completion becomes stale. Replacing the selection drops the
    /// previous preview resource.
    pub fn file_selected(&mut self, selection: Option<Selection>) {
        self.selection = selection;
        self.request = RequestState::Idle;
        self.generation += 1;
    }

    /// The user triggered analysis
    pub fn analyze_requested(&mut self) -> AnalyzeDecision {
        if self.request == RequestState::Loading {
            return AnalyzeDecision::InFlight;
        }

        match &self.selection {
            Some(selection) => {
                self.request = RequestState::Loading;
                AnalyzeDecision::Issue {
                    upload_path: selection.preview.path().to_path_buf(),
                    file_name: selection.file.name.clone(),
                    generation: self.generation,
                }
            }
            None => {
                self.request = RequestState::Failed {
                    message: NO_FILE_SELECTED.to_string(),
                };
                AnalyzeDecision::NoSelection
            }
        }
    }

    /// The outbound request finished; returns whether the completion applied
    ///
    /// A completion carrying a stale generation (the selection changed while
    /// the request was in flight) is discarded.
    pub fn request_completed(&mut self, generation: u64, result: Result<String, String>) -> bool {
        if generation != self.generation {
            return false;
        }

        self.request = match result {
            Ok(answer) => RequestState::Succeeded { answer },
            Err(message) => RequestState::Failed { message },
        };
        true
    }

    pub fn selection(&self) -> Option<&SelectedFile> {
        self.selection.as_ref().map(|s| &s.file)
    }

    pub fn preview(&self) -> Option<&PreviewResource> {
        self.selection.as_ref().map(|s| &s.preview)
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uploader::validate_candidate;
    use std::fs;
    use std::path::Path;

    fn make_selection(dir: &Path, name: &str) -> Selection {
        let source = dir.join(name);
        fs::write(&source, b"%PDF-1.4 fixture").unwrap();
        let file = validate_candidate(&source).unwrap();
        let preview = PreviewResource::create(&source, &dir.join("cache")).unwrap();
        Selection { file, preview }
    }

    fn issued_generation(shell: &mut Shell) -> u64 {
        match shell.analyze_requested() {
            AnalyzeDecision::Issue { generation, .. } => generation,
            other => panic!("expected Issue, got {:?}", other),
        }
    }

    #[test]
    fn test_starts_idle_without_selection() {
        let shell = Shell::new();
        assert_eq!(shell.request_state(), &RequestState::Idle);
        assert!(shell.selection().is_none());
    }

    #[test]
    fn test_analyze_without_selection_fails_without_request() {
        let mut shell = Shell::new();
        let decision = shell.analyze_requested();

        assert_eq!(decision, AnalyzeDecision::NoSelection);
        assert_eq!(
            shell.request_state(),
            &RequestState::Failed {
                message: "No file selected.".to_string()
            }
        );
    }

    #[test]
    fn test_selection_resets_answer_and_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::new();

        shell.analyze_requested();
        assert!(matches!(shell.request_state(), RequestState::Failed { .. }));

        shell.file_selected(Some(make_selection(dir.path(), "resume.pdf")));
        assert_eq!(shell.request_state(), &RequestState::Idle);
        assert_eq!(shell.selection().unwrap().name, "resume.pdf");
    }

    #[test]
    fn test_analyze_with_selection_goes_loading() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::new();
        shell.file_selected(Some(make_selection(dir.path(), "resume.pdf")));

        match shell.analyze_requested() {
            AnalyzeDecision::Issue {
                upload_path,
                file_name,
                ..
            } => {
                assert_eq!(file_name, "resume.pdf");
                assert!(upload_path.exists(), "upload should come from the preview copy");
            }
            other => panic!("expected Issue, got {:?}", other),
        }
        assert_eq!(shell.request_state(), &RequestState::Loading);
    }

    #[test]
    fn test_completion_applies_answer() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::new();
        shell.file_selected(Some(make_selection(dir.path(), "resume.pdf")));
        let generation = issued_generation(&mut shell);

        assert!(shell.request_completed(generation, Ok("X".to_string())));
        assert_eq!(
            shell.request_state(),
            &RequestState::Succeeded {
                answer: "X".to_string()
            }
        );
    }

    #[test]
    fn test_completion_applies_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::new();
        shell.file_selected(Some(make_selection(dir.path(), "resume.pdf")));
        let generation = issued_generation(&mut shell);

        assert!(shell.request_completed(generation, Err("bad file".to_string())));
        assert_eq!(
            shell.request_state(),
            &RequestState::Failed {
                message: "bad file".to_string()
            }
        );
    }

    #[test]
    fn test_analyze_while_loading_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::new();
        shell.file_selected(Some(make_selection(dir.path(), "resume.pdf")));
        issued_generation(&mut shell);

        assert_eq!(shell.analyze_requested(), AnalyzeDecision::InFlight);
        assert_eq!(shell.request_state(), &RequestState::Loading);
    }

    #[test]
    fn test_retrigger_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::new();
        shell.file_selected(Some(make_selection(dir.path(), "resume.pdf")));
        let generation = issued_generation(&mut shell);
        shell.request_completed(generation, Err("timeout".to_string()));

        // a fresh trigger from Failed is allowed
        issued_generation(&mut shell);
        assert_eq!(shell.request_state(), &RequestState::Loading);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::new();
        shell.file_selected(Some(make_selection(dir.path(), "first.pdf")));
        let stale = issued_generation(&mut shell);

        // selection changes while the request is in flight
        shell.file_selected(Some(make_selection(dir.path(), "second.pdf")));

        assert!(!shell.request_completed(stale, Ok("old answer".to_string())));
        assert_eq!(
            shell.request_state(),
            &RequestState::Idle,
            "stale completion must not overwrite the new selection's state"
        );
        assert_eq!(shell.selection().unwrap().name, "second.pdf");
    }

    #[test]
    fn test_clearing_selection_releases_preview() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::new();
        shell.file_selected(Some(make_selection(dir.path(), "resume.pdf")));
        let cached = shell.preview().unwrap().path().to_path_buf();
        assert!(cached.exists());

        shell.file_selected(None);
        assert!(!cached.exists(), "preview copy should be released on clear");
        assert!(shell.selection().is_none());
    }

    #[test]
    fn test_reselecting_same_path_keeps_fresh_preview() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::new();
        let source = dir.path().join("resume.pdf");
        fs::write(&source, b"%PDF-1.4 fixture").unwrap();
        let cache = dir.path().join("cache");

        let file = validate_candidate(&source).unwrap();
        let preview = PreviewResource::create(&source, &cache).unwrap();
        shell.file_selected(Some(Selection {
            file: file.clone(),
            preview,
        }));

        // same order as the selection command: the replacement copy is
        // created before the old selection is dropped
        let preview = PreviewResource::create(&source, &cache).unwrap();
        shell.file_selected(Some(Selection { file, preview }));

        let kept = shell.preview().unwrap();
        assert!(
            kept.path().exists(),
            "fresh preview copy must exist after re-selecting the same file"
        );
        assert!(kept.data_base64().is_ok());
    }

    #[test]
    fn test_rejection_leaves_previous_selection_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::new();
        shell.file_selected(Some(make_selection(dir.path(), "resume.pdf")));
        let cached = shell.preview().unwrap().path().to_path_buf();

        // a rejected candidate never reaches file_selected
        let bogus = dir.path().join("notes.txt");
        fs::write(&bogus, b"plain text").unwrap();
        assert!(validate_candidate(&bogus).is_err());

        assert_eq!(shell.selection().unwrap().name, "resume.pdf");
        assert!(cached.exists(), "prior preview must remain after a rejection");
        assert_eq!(shell.request_state(), &RequestState::Idle);
    }

    #[test]
    fn test_replacing_selection_releases_old_preview() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::new();
        shell.file_selected(Some(make_selection(dir.path(), "first.pdf")));
        let old = shell.preview().unwrap().path().to_path_buf();

        shell.file_selected(Some(make_selection(dir.path(), "second.pdf")));
        assert!(!old.exists(), "old preview copy should be released on replace");
        assert!(shell.preview().unwrap().path().exists());
    }
}
