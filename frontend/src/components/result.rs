//! Result panel shown after a sheet was generated.

use leptos::*;

#[component]
pub fn ResultPanel(
    /// Whether the last upload succeeded
    visible: Signal<bool>,
    /// `Character: {name}`
    character_label: Signal<String>,
    /// Open the sheet in a new tab
    on_view: Callback<()>,
    /// Download the sheet
    on_download: Callback<()>,
) -> impl IntoView {
    view! {
        <div id="resultSection" class="result-section" class:hidden=move || !visible.get()>
            <h2>"Your character sheet is ready"</h2>
            <p id="characterName" class="character-name">{move || character_label.get()}</p>
            <div class="result-actions">
                <button id="viewBtn" class="btn btn-primary" on:click=move |_| on_view.call(())>
                    "View Sheet"
                </button>
                <button id="downloadBtn" class="btn btn-secondary" on:click=move |_| on_download.call(())>
                    "Download"
                </button>
            </div>
        </div>
    }
}
