//! Character file upload with drag & drop support.
//!
//! Owns one [`PageWidget`] and drives it from the DOM events; the status
//! banner and result panel render from the signal behind its store.

use std::rc::Rc;

use charsheet::{Endpoints, UploadWidget};
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::components::{ResultPanel, StatusBanner};
use crate::services::{BrowserFile, GlooUploadClient, SignalStore, WindowNavigator};

/// The widget as mounted in the page.
pub type PageWidget = UploadWidget<SignalStore, GlooUploadClient, WindowNavigator>;

#[component]
pub fn UploadSection(
    /// Server routes for upload, view and download
    endpoints: Endpoints,
) -> impl IntoView {
    let store = SignalStore::new();
    let state = store.signal();
    let widget = store_value(Rc::new(PageWidget::new(
        store,
        endpoints,
        GlooUploadClient,
        WindowNavigator,
    )));
    let file_input = create_node_ref::<html::Input>();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            let widget = widget.get_value();
            spawn_local(async move {
                let _ = widget.submit(BrowserFile::from(file)).await;
            });
        }
    };

    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        widget.with_value(|w| w.drag_over());
    };

    let on_drag_leave = move |_: ev::DragEvent| {
        widget.with_value(|w| w.drag_leave());
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        let files = ev.data_transfer().and_then(|dt| dt.files());
        let dropped = files.into_iter().flat_map(|list| {
            (0..list.length()).filter_map(move |i| list.get(i).map(BrowserFile::from))
        });

        let widget = widget.get_value();
        spawn_local(async move {
            let _ = widget.drop_files(dropped).await;
        });
    };

    let on_view = Callback::new(move |_| {
        widget.with_value(|w| w.view());
    });

    let on_download = Callback::new(move |_| {
        widget.with_value(|w| w.download());
    });

    view! {
        <div class="upload-section">
            <div
                class="upload-box"
                class:dragging=move || state.with(|s| s.is_dragging())
                id="uploadBox"
                on:click=trigger_file_input
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-icon">"📜"</div>
                <div class="upload-text">"Drop your character JSON file here"</div>
                <div class="upload-hint">"or click to browse"</div>
            </div>

            <input
                type="file"
                id="fileInput"
                accept=".json"
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <StatusBanner status=Signal::derive(move || state.with(|s| s.status().cloned()))/>

            <ResultPanel
                visible=Signal::derive(move || state.with(|s| s.result_visible()))
                character_label=Signal::derive(move || state.with(|s| s.character_label().to_string()))
                on_view=on_view
                on_download=on_download
            />
        </div>
    }
}
