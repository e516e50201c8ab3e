//! Upload widget state machine.
//!
//! ```text
//!            choose file                 valid name
//!   Idle ───────────────▶ (validate) ─────────────▶ Submitting
//!    ▲                        │                         │
//!    │      "Please select    │ bad suffix              │ response / failure
//!    └──── a valid JSON file" ┘                         ▼
//!                                             Succeeded │ Failed
//! ```
//!
//! [`WidgetState`] holds everything the page renders and is updated by
//! plain synchronous methods, so it can live inside a reactive signal.
//! [`UploadWidget`] wires a [`StateStore`] holding it to an
//! [`UploadClient`] and a [`Navigator`].

use crate::client::{FileHandle, Navigator, UploadClient};
use crate::config::{Endpoints, ACCEPTED_EXTENSION};
use crate::error::{SubmitError, SubmitResult};
use crate::response::{HttpReply, UploadResult};
use crate::store::StateStore;

/// Banner text while the server is working.
pub const LOADING_MESSAGE: &str = "Processing character data...";

/// Banner text after a sheet was generated.
pub const SUCCESS_MESSAGE: &str = "Character sheet generated successfully!";

/// Shown when a successful response omits the character name.
pub const UNKNOWN_CHARACTER: &str = "Unknown";

// =============================================================================
// Status banner
// =============================================================================

/// Visual classification of the status banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Success,
    Error,
}

impl StatusKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Loading => "loading",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// Current content of the status banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Loading,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    /// Full class attribute of the banner element.
    pub fn class_name(&self) -> String {
        format!("status-message {}", self.kind.css_class())
    }
}

// =============================================================================
// Widget state
// =============================================================================

/// Where the widget is in the upload flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Everything one widget instance renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetState {
    phase: Phase,
    status: Option<Status>,
    result_visible: bool,
    character_label: String,
    output_file: Option<String>,
    dragging: bool,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    /// `Character: {name}` of the last successful upload.
    pub fn character_label(&self) -> &str {
        &self.character_label
    }

    /// Identifier of the last generated sheet, if any.
    pub fn output_file(&self) -> Option<&str> {
        self.output_file.as_deref().filter(|file| !file.is_empty())
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Validate a chosen file and enter the submitting phase.
    ///
    /// On `Ok` the caller must send the file and report the outcome through
    /// [`complete_submission`](Self::complete_submission).
    pub fn begin_submission(&mut self, file_name: &str) -> SubmitResult<()> {
        if !file_name.ends_with(ACCEPTED_EXTENSION) {
            log::warn!("Rejected '{}': not a JSON file", file_name);
            let err = SubmitError::InvalidFileType {
                name: file_name.to_string(),
            };
            self.status = err.banner_text().map(Status::error);
            // a pending request still owns the phase
            if !self.is_submitting() {
                self.phase = Phase::Idle;
            }
            return Err(err);
        }

        if self.is_submitting() {
            log::warn!("⏳ Ignoring '{}': an upload is already in progress", file_name);
            return Err(SubmitError::Busy);
        }

        log::info!("📤 Uploading '{}'", file_name);
        self.result_visible = false;
        self.status = Some(Status::loading(LOADING_MESSAGE));
        self.phase = Phase::Submitting;
        Ok(())
    }

    /// Apply the outcome of the request started by
    /// [`begin_submission`](Self::begin_submission).
    ///
    /// Returns the parsed result on success, or the error shown in the
    /// banner. A failure leaves the stored output file and the result panel
    /// untouched.
    pub fn complete_submission(
        &mut self,
        outcome: SubmitResult<HttpReply>,
    ) -> SubmitResult<UploadResult> {
        let classified = outcome.and_then(classify_reply);

        match &classified {
            Ok(result) => {
                let name = result
                    .character_name
                    .as_deref()
                    .unwrap_or(UNKNOWN_CHARACTER);
                log::info!("✅ Character sheet generated for {}", name);
                self.output_file = result.output_file.clone();
                self.character_label = format!("Character: {}", name);
                self.status = Some(Status::success(SUCCESS_MESSAGE));
                self.result_visible = true;
                self.phase = Phase::Succeeded;
            }
            Err(err) => {
                log::warn!("❌ Upload failed: {}", err);
                if let Some(text) = err.banner_text() {
                    self.status = Some(Status::error(text));
                }
                self.phase = Phase::Failed;
            }
        }

        classified
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Clear the drag indicator and pick the file to submit.
    ///
    /// Only the first dropped file is kept.
    pub fn drop_files<F>(&mut self, files: impl IntoIterator<Item = F>) -> Option<F> {
        self.dragging = false;
        files.into_iter().next()
    }

    /// Target of the view action, once a sheet exists.
    pub fn view_url(&self, endpoints: &Endpoints) -> Option<String> {
        self.output_file().map(|file| endpoints.view_url(file))
    }

    /// Target of the download action, once a sheet exists.
    pub fn download_url(&self, endpoints: &Endpoints) -> Option<String> {
        self.output_file().map(|file| endpoints.download_url(file))
    }
}

/// Success requires both a 2xx status and a truthy `success` field.
///
/// The body is parsed first, so an unparsable body is reported as a parse
/// error whatever the status.
fn classify_reply(reply: HttpReply) -> SubmitResult<UploadResult> {
    let result = UploadResult::parse(&reply.body)?;
    if reply.is_ok() && result.success {
        Ok(result)
    } else {
        Err(SubmitError::Rejected {
            status: reply.status,
            message: result.failure_message(),
        })
    }
}

// =============================================================================
// Widget
// =============================================================================

/// An upload widget bound to its collaborators.
///
/// All methods take `&self`: the state lives in a [`StateStore`], so one
/// widget can be shared by several event handlers while a request is
/// pending.
pub struct UploadWidget<S, C, N> {
    store: S,
    endpoints: Endpoints,
    client: C,
    navigator: N,
}

impl<S, C, N> UploadWidget<S, C, N>
where
    S: StateStore,
    C: UploadClient,
    N: Navigator,
{
    pub fn new(store: S, endpoints: Endpoints, client: C, navigator: N) -> Self {
        Self {
            store,
            endpoints,
            client,
            navigator,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Validate and upload one file.
    pub async fn submit(&self, file: C::File) -> SubmitResult<UploadResult> {
        let name = file.name();
        self.store
            .update(|s| s.begin_submission(&name))
            .ok_or(SubmitError::Detached)??;

        let outcome = self
            .client
            .upload(&self.endpoints.upload_url(), &file)
            .await;

        self.store
            .update(|s| s.complete_submission(outcome))
            .ok_or(SubmitError::Detached)?
    }

    pub fn drag_over(&self) {
        self.store.update(|s| s.drag_over());
    }

    pub fn drag_leave(&self) {
        self.store.update(|s| s.drag_leave());
    }

    /// Submit the first dropped file; `None` when nothing was dropped.
    pub async fn drop_files(
        &self,
        files: impl IntoIterator<Item = C::File>,
    ) -> Option<SubmitResult<UploadResult>> {
        let file = self.store.update(|s| s.drop_files(files)).flatten()?;
        Some(self.submit(file).await)
    }

    /// Open the generated sheet in a new tab. Returns `false` when there is
    /// nothing to show yet.
    pub fn view(&self) -> bool {
        match self.store.with(|s| s.view_url(&self.endpoints)).flatten() {
            Some(url) => {
                self.navigator.open_in_new_tab(&url);
                true
            }
            None => false,
        }
    }

    /// Navigate to the download URL of the generated sheet.
    pub fn download(&self) -> bool {
        match self.store.with(|s| s.download_url(&self.endpoints)).flatten() {
            Some(url) => {
                self.navigator.navigate(&url);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INVALID_FILE_MESSAGE;

    fn submitting_state() -> WidgetState {
        let mut state = WidgetState::new();
        state.begin_submission("hero.json").unwrap();
        state
    }

    #[test]
    fn test_initial_state() {
        let state = WidgetState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.status().is_none());
        assert!(!state.result_visible());
        assert!(state.output_file().is_none());
        assert!(state.view_url(&Endpoints::default()).is_none());
    }

    #[test]
    fn test_suffix_check_is_case_sensitive() {
        let mut state = WidgetState::new();
        let err = state.begin_submission("hero.JSON").unwrap_err();
        assert!(matches!(err, SubmitError::InvalidFileType { .. }));
        assert_eq!(state.status(), Some(&Status::error(INVALID_FILE_MESSAGE)));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_suffix_only_match() {
        let mut state = WidgetState::new();
        assert!(state.begin_submission("hero.json.txt").is_err());
        assert!(state.begin_submission(".json").is_ok());
    }

    #[test]
    fn test_begin_hides_result_and_shows_loading() {
        let mut state = submitting_state();
        state
            .complete_submission(Ok(HttpReply::new(
                200,
                r#"{"success": true, "output_file": "a.html", "character_name": "A"}"#,
            )))
            .unwrap();
        assert!(state.result_visible());

        state.begin_submission("next.json").unwrap();
        assert!(!state.result_visible());
        assert_eq!(state.status(), Some(&Status::loading(LOADING_MESSAGE)));
        assert!(state.is_submitting());
        // previous sheet stays reachable until overwritten
        assert_eq!(state.output_file(), Some("a.html"));
    }

    #[test]
    fn test_rejected_file_leaves_result_panel() {
        let mut state = submitting_state();
        state
            .complete_submission(Ok(HttpReply::new(
                200,
                r#"{"success": true, "output_file": "a.html", "character_name": "A"}"#,
            )))
            .unwrap();

        let _ = state.begin_submission("notes.txt");
        assert!(state.result_visible());
        assert_eq!(state.status().map(|s| s.kind), Some(StatusKind::Error));
    }

    #[test]
    fn test_second_submission_is_refused_while_pending() {
        let mut state = submitting_state();
        let err = state.begin_submission("other.json").unwrap_err();
        assert!(matches!(err, SubmitError::Busy));
        assert_eq!(state.status(), Some(&Status::loading(LOADING_MESSAGE)));

        state
            .complete_submission(Err(SubmitError::Transport("offline".into())))
            .unwrap_err();
        assert!(state.begin_submission("other.json").is_ok());
    }

    #[test]
    fn test_wrong_file_type_while_pending_is_reported() {
        let mut state = submitting_state();
        let err = state.begin_submission("notes.txt").unwrap_err();
        assert!(matches!(err, SubmitError::InvalidFileType { .. }));
        assert_eq!(state.status(), Some(&Status::error(INVALID_FILE_MESSAGE)));
        assert!(state.is_submitting());

        // the pending request still settles the widget
        state
            .complete_submission(Ok(HttpReply::new(
                200,
                r#"{"success": true, "output_file": "a.html", "character_name": "A"}"#,
            )))
            .unwrap();
        assert_eq!(state.phase(), Phase::Succeeded);
    }

    #[test]
    fn test_non_object_body_shows_fallback() {
        for body in ["[]", "42", r#""ok""#, "true"] {
            let mut state = submitting_state();
            state
                .complete_submission(Ok(HttpReply::new(200, body)))
                .unwrap_err();
            assert_eq!(
                state.status(),
                Some(&Status::error("Error: Failed to generate character sheet")),
                "{}",
                body
            );
        }
    }

    #[test]
    fn test_falsy_error_shows_fallback() {
        for body in [
            r#"{"success": false, "error": 0}"#,
            r#"{"success": false, "error": false}"#,
        ] {
            let mut state = submitting_state();
            state
                .complete_submission(Ok(HttpReply::new(200, body)))
                .unwrap_err();
            assert_eq!(
                state.status(),
                Some(&Status::error("Error: Failed to generate character sheet")),
                "{}",
                body
            );
        }
    }

    #[test]
    fn test_http_error_with_json_body_uses_server_message() {
        let mut state = submitting_state();
        let err = state
            .complete_submission(Ok(HttpReply::new(400, r#"{"error": "No file selected"}"#)))
            .unwrap_err();
        assert!(matches!(err, SubmitError::Rejected { status: 400, .. }));
        assert_eq!(state.status(), Some(&Status::error("Error: No file selected")));
        assert_eq!(state.phase(), Phase::Failed);
    }

    #[test]
    fn test_non_2xx_with_success_true_is_failure() {
        let mut state = submitting_state();
        state
            .complete_submission(Ok(HttpReply::new(
                500,
                r#"{"success": true, "output_file": "x.html"}"#,
            )))
            .unwrap_err();
        assert!(!state.result_visible());
        assert!(state.output_file().is_none());
        assert_eq!(
            state.status(),
            Some(&Status::error("Error: Failed to generate character sheet"))
        );
    }

    #[test]
    fn test_missing_character_name_and_output_file() {
        let mut state = submitting_state();
        state
            .complete_submission(Ok(HttpReply::new(200, r#"{"success": true}"#)))
            .unwrap();
        assert_eq!(state.character_label(), "Character: Unknown");
        assert!(state.output_file().is_none());
        assert!(state.download_url(&Endpoints::default()).is_none());
    }

    #[test]
    fn test_drag_indicator() {
        let mut state = WidgetState::new();
        state.drag_over();
        assert!(state.is_dragging());
        state.drag_leave();
        assert!(!state.is_dragging());

        state.drag_over();
        let first = state.drop_files(vec!["a.json", "b.json", "c.json"]);
        assert_eq!(first, Some("a.json"));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_empty_drop() {
        let mut state = WidgetState::new();
        state.drag_over();
        assert_eq!(state.drop_files(Vec::<String>::new()), None);
        assert!(!state.is_dragging());
        assert!(state.status().is_none());
    }

    #[test]
    fn test_status_class_name() {
        assert_eq!(Status::loading("x").class_name(), "status-message loading");
        assert_eq!(Status::success("x").class_name(), "status-message success");
        assert_eq!(Status::error("x").class_name(), "status-message error");
    }
}
