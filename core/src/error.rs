//! Error types for the upload flow.
//!
//! Three kinds of failure reach the user, all through the same status
//! banner:
//!
//! - [`SubmitError::InvalidFileType`] - caught locally, before any request
//! - [`SubmitError::Rejected`] - the server answered and reported failure
//! - [`SubmitError::Transport`] / [`SubmitError::Parse`] - the exchange
//!   itself broke down
//!
//! [`SubmitError::Busy`] and [`SubmitError::Detached`] are never shown;
//! they only tell the caller why a selection or a response was dropped.

use thiserror::Error;

/// Message shown when the selected file is not a `.json` file.
pub const INVALID_FILE_MESSAGE: &str = "Please select a valid JSON file";

/// Why a submission did not produce a character sheet.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// File name does not end with `.json`.
    #[error("Please select a valid JSON file")]
    InvalidFileType { name: String },

    /// Another upload has not completed yet.
    #[error("An upload is already in progress")]
    Busy,

    /// The widget's state store was disposed (e.g. the page section was
    /// unmounted while a request was pending).
    #[error("Upload widget is no longer mounted")]
    Detached,

    /// Network failure or request construction failure.
    #[error("{0}")]
    Transport(String),

    /// Response body is not a JSON object.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// Server responded but did not report success.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl SubmitError {
    /// Text for the error banner, or `None` when nothing should be shown.
    pub fn banner_text(&self) -> Option<String> {
        match self {
            SubmitError::InvalidFileType { .. } => Some(self.to_string()),
            SubmitError::Busy | SubmitError::Detached => None,
            _ => Some(format!("Error: {}", self)),
        }
    }
}

/// Result type for upload operations.
pub type SubmitResult<T> = Result<T, SubmitError>;
