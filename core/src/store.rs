//! Where a widget keeps its [`WidgetState`].
//!
//! The state is only touched through short synchronous closures, never
//! across an `.await`, so a reactive signal and a plain `RefCell` work
//! equally well.

use std::cell::RefCell;

use crate::widget::WidgetState;

/// Shared, interior-mutable holder of one widget's state.
pub trait StateStore {
    /// Read the state. `None` once the store has been disposed.
    fn with<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> Option<R>;

    /// Mutate the state. `None` once the store has been disposed.
    fn update<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R>;
}

impl StateStore for RefCell<WidgetState> {
    fn with<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn update<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
