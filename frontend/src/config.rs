//! Application configuration.
//!
//! The page normally talks to the server that served it. Set
//! `CHARSHEET_BACKEND_URL` when building (e.g. `CHARSHEET_BACKEND_URL=http://localhost:5000 trunk serve`)
//! to point the widget at another origin.

use charsheet::Endpoints;

/// Backend base URL, empty for same-origin requests.
pub const BACKEND_URL: &str = match option_env!("CHARSHEET_BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Application name, used as the page title.
pub const APP_NAME: &str = "Character Sheet Generator";

/// Console log level.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Server routes derived from [`BACKEND_URL`].
pub fn endpoints() -> Endpoints {
    Endpoints::new(BACKEND_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_follow_backend_url() {
        let endpoints = endpoints();
        assert_eq!(endpoints.upload_url(), format!("{}/upload", BACKEND_URL.trim_end_matches('/')));
    }
}
