//! Reactive state store for the upload widget.

use charsheet::{StateStore, WidgetState};
use leptos::*;

/// Keeps the widget state in a Leptos signal so the view re-renders on
/// every transition.
#[derive(Clone, Copy, Debug)]
pub struct SignalStore(RwSignal<WidgetState>);

impl SignalStore {
    pub fn new() -> Self {
        Self(create_rw_signal(WidgetState::new()))
    }

    pub fn signal(&self) -> RwSignal<WidgetState> {
        self.0
    }
}

impl Default for SignalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for SignalStore {
    fn with<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
