//! Endpoint configuration.
//!
//! The widget only knows the server through three routes. By default they
//! are root-relative, so the page talks to whatever origin served it.

/// Route accepting the multipart upload.
pub const UPLOAD_PATH: &str = "/upload";

/// Route rendering a generated sheet in the browser.
pub const VIEW_PATH: &str = "/view";

/// Route serving a generated sheet as an attachment.
pub const DOWNLOAD_PATH: &str = "/download";

/// Only file names ending with this suffix are submitted (case-sensitive).
pub const ACCEPTED_EXTENSION: &str = ".json";

/// Multipart form field carrying the selected file.
pub const FILE_FIELD: &str = "file";

/// Server routes used by the widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Build endpoints rooted at `base` (e.g. `http://localhost:5000`).
    ///
    /// An empty base keeps every URL root-relative.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base, UPLOAD_PATH)
    }

    /// URL opened in a new tab by the "view" action.
    pub fn view_url(&self, output_file: &str) -> String {
        format!("{}{}/{}", self.base, VIEW_PATH, output_file)
    }

    /// URL the current page navigates to for the "download" action.
    pub fn download_url(&self, output_file: &str) -> String {
        format!("{}{}/{}", self.base, DOWNLOAD_PATH, output_file)
    }
}
