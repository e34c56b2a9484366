//! Named placeholders (`{{name}}`) inside stored prompt text: discovery,
//! per-placeholder configuration merge, and expansion into the final text.
//!
//! Everything here is a pure function over strings; nothing touches the
//! page or the store.

pub mod discover;
pub mod expand;
pub mod merge;

pub use discover::parse_variables;
pub use expand::{expand_prompt, format_value};
pub use merge::{merge_variable_configs, sync_configs};
