//! Window navigation for the view and download actions.

use charsheet::Navigator;

/// Navigates the page's own window.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn open_in_new_tab(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to open {}", url);
            return;
        };
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::error!("Failed to open {}: {:?}", url, e);
        }
    }

    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to navigate to {}", url);
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::error!("Failed to navigate to {}: {:?}", url, e);
        }
    }
}
