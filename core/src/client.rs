//! Seams between the widget and the page it lives in.
//!
//! The widget never touches the network or the browser directly: the
//! frontend plugs in a `gloo-net` client and a `web-sys` navigator, tests
//! plug in recording fakes.

use crate::error::SubmitResult;
use crate::response::HttpReply;

/// A file chosen by the user.
pub trait FileHandle {
    /// File name as reported by the picker or the drop event.
    fn name(&self) -> String;
}

/// Sends a selected file to the upload endpoint.
///
/// Implementations issue exactly one multipart `POST` with the file in the
/// `file` field. Any answer from the server, including non-2xx statuses, is
/// `Ok`; only failures to complete the exchange are errors.
#[allow(async_fn_in_trait)]
pub trait UploadClient {
    type File: FileHandle;

    async fn upload(&self, url: &str, file: &Self::File) -> SubmitResult<HttpReply>;
}

/// Browser navigation used by the view and download actions.
pub trait Navigator {
    /// Open `url` in a new browsing context.
    fn open_in_new_tab(&self, url: &str);

    /// Send the current browsing context to `url`.
    fn navigate(&self, url: &str);
}
