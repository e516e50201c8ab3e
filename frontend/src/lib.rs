//! Character Sheet Generator - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a character JSON file and opening
//! the sheet the server generates from it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadSection                                          │
//! │      ├── drop zone + hidden file input                      │
//! │      ├── StatusBanner                                       │
//! │      └── ResultPanel (view / download)                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Backend URL and app settings
//! - [`components`] - UI components
//! - [`services`] - Browser HTTP client and navigation

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use components::*;
pub use config::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
///
/// Called from the `charsheet-frontend` binary that trunk builds; exported
/// so a hand-written loader can call it on the `cdylib` build.
#[wasm_bindgen]
pub fn run() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let endpoints = endpoints();
    log::debug!("Backend: '{}'", endpoints.base());

    view! {
        <div class="container">
            <Hero/>
            <UploadSection endpoints=endpoints/>
        </div>

        <Footer/>
    }
}
