//! HTTP upload of character files to the backend.

use charsheet::{FileHandle, HttpReply, SubmitError, SubmitResult, UploadClient, FILE_FIELD};
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// A file picked or dropped by the user.
#[derive(Clone, Debug)]
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn as_file(&self) -> &File {
        &self.0
    }
}

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        Self(file)
    }
}

impl FileHandle for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }
}

/// Multipart body with the file in the `file` field.
pub fn build_form_data(file: &BrowserFile) -> SubmitResult<FormData> {
    let form_data = FormData::new()
        .map_err(|e| SubmitError::Transport(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(FILE_FIELD, file.as_file(), &file.name())
        .map_err(|e| SubmitError::Transport(format!("Failed to append file: {:?}", e)))?;

    Ok(form_data)
}

/// Posts files with the browser's `fetch` through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooUploadClient;

impl UploadClient for GlooUploadClient {
    type File = BrowserFile;

    async fn upload(&self, url: &str, file: &BrowserFile) -> SubmitResult<HttpReply> {
        let form_data = build_form_data(file)?;

        let request = Request::post(url)
            .body(form_data)
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        log::debug!("POST {} -> {}", url, status);
        Ok(HttpReply::new(status, body))
    }
}
