//! Deterministic ordering and bucketing of the stored prompt set, feeding
//! the candidate list the autocomplete matcher and the history UI consume.

pub mod group;
pub mod order;
pub mod score;

pub use group::{group_prompts, PromptGroup};
pub use order::{sort_prompts, SortOrder};
pub use score::{composite_score, recency_score, ScoreCache};
