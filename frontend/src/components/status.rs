//! Status banner.

use charsheet::Status;
use leptos::*;

/// Single-line banner for the loading, success and error messages.
#[component]
pub fn StatusBanner(status: Signal<Option<Status>>) -> impl IntoView {
    view! {
        <div
            id="statusMessage"
            class=move || {
                status
                    .get()
                    .map(|s| s.class_name())
                    .unwrap_or_else(|| "status-message hidden".to_string())
            }
        >
            {move || status.get().map(|s| s.message).unwrap_or_default()}
        </div>
    }
}
