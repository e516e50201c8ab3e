//! UI Components for the character sheet generator.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - JSON file upload with drag & drop
//! - [`StatusBanner`] - Loading / success / error message
//! - [`ResultPanel`] - Character name with view and download actions

mod footer;
mod hero;
mod result;
mod status;
mod upload;

pub use footer::*;
pub use hero::*;
pub use result::*;
pub use status::*;
pub use upload::*;
