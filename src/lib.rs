//! PromptStash core: store prompts typed into third-party AI chat pages
//! and re-inject them, with optional named placeholders, into whichever
//! editable surface is currently focused on the host page.
//!
//! The workspace splits along the seams of that flow: `site-adapters`
//! resolves per-host capabilities, `caret-tracker` follows the selection,
//! `surface-io` reads and writes the editable surface, `variable-engine`
//! handles `{{name}}` placeholders, `prompt-match` and `prompt-rank`
//! drive autocomplete. This crate wires them into [`PromptCore`], the
//! object a presentation layer talks to.

pub mod config;
pub mod core;
pub mod errors;
pub mod store;
pub mod telemetry;

pub use crate::config::{CoreConfig, HistoryOrder};
pub use crate::core::{InsertOptions, PromptCore, Suggestion};
pub use crate::errors::PromptStashError;
pub use crate::store::{MemoryStore, PromptStore, WatchGuard};

pub use caret_tracker::CaretTracker;
pub use dom_bridge::{DomEvents, DomPort, NodeId, PageEvent};
pub use promptstash_core_types::{
    InsertionMode, KeyEvent, PromptEntry, PromptId, VariableConfig, VariableKind,
};
pub use prompt_match::{find_best_match, similarity};
pub use prompt_rank::{group_prompts, sort_prompts, PromptGroup, ScoreCache, SortOrder};
pub use site_adapters::{resolve, SiteCapability};
pub use variable_engine::{expand_prompt, format_value, parse_variables, sync_configs};
