//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Character Sheet Generator"</h1>
            <p class="subtitle">
                "Upload a character exported as JSON and get a printable character sheet. "
                "Classes, spells, inventory and features are laid out for you."
            </p>
        </div>
    }
}
