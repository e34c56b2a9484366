//! Uniform text extraction and injection over the three editable-surface
//! kinds a host page can present: single-line inputs, textareas and
//! rich-text contenteditable regions.

pub mod classify;
pub mod errors;
pub mod extract;
pub mod inject;

pub use classify::{classify, SurfaceKind};
pub use errors::InjectError;
pub use extract::{read_rich_text, read_surface, read_value};
pub use inject::{inject, InjectRequest};
