//! # Charsheet - character sheet upload widget
//!
//! Logic behind the page that turns a character JSON file into a printable
//! sheet. The user picks or drops a file, the widget posts it to the server
//! and then offers to view or download the generated sheet.
//!
//! ```text
//! ┌──────────────┐  POST /upload   ┌──────────────┐
//! │ UploadWidget │────────────────▶│    server    │
//! │ (WidgetState)│◀────────────────│              │
//! └──────┬───────┘   JSON result   └──────────────┘
//!        │ view / download
//!        ▼
//!   /view/{file}  /download/{file}
//! ```
//!
//! This crate has no DOM code; the Leptos frontend supplies the browser
//! implementations of [`UploadClient`] and [`Navigator`].
//!
//! ## Modules
//!
//! - [`config`] - Server routes and accepted file type
//! - [`error`] - Submission errors
//! - [`response`] - Upload response model
//! - [`client`] - Collaborator traits
//! - [`store`] - State holder shared by event handlers
//! - [`widget`] - State machine

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod store;
pub mod widget;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{FileHandle, Navigator, UploadClient};
pub use config::{Endpoints, ACCEPTED_EXTENSION, FILE_FIELD};
pub use error::{SubmitError, SubmitResult, INVALID_FILE_MESSAGE};
pub use response::{HttpReply, UploadResult, FALLBACK_FAILURE_MESSAGE};
pub use store::StateStore;
pub use widget::{
    Phase, Status, StatusKind, UploadWidget, WidgetState, LOADING_MESSAGE, SUCCESS_MESSAGE,
};
