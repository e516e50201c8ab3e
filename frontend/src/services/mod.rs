//! Browser-backed implementations of the widget's collaborators.
//!
//! # Services
//!
//! - [`upload`] - multipart upload through `gloo-net`
//! - [`navigation`] - view / download navigation through `web-sys`
//! - [`store`] - widget state kept in a Leptos signal

pub mod navigation;
pub mod store;
pub mod upload;

pub use navigation::*;
pub use store::*;
pub use upload::*;
