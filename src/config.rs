//! Runtime tunables for the core, layered from the environment.

use serde::Deserialize;

use prompt_rank::SortOrder;

/// Ordering used for the autocomplete candidate list, as stored in
/// configuration.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOrder {
    Recency,
    Frequency,
    Name,
    Composite,
}

impl From<HistoryOrder> for SortOrder {
    fn from(order: HistoryOrder) -> Self {
        match order {
            HistoryOrder::Recency => SortOrder::Recency,
            HistoryOrder::Frequency => SortOrder::Frequency,
            HistoryOrder::Name => SortOrder::Name,
            HistoryOrder::Composite => SortOrder::Composite,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Minimum similarity for an autocomplete suggestion.
    pub autocomplete_threshold: f64,
    /// Ordering of the candidate list feeding the matcher.
    pub history_order: HistoryOrder,
    /// At most this many ranked candidates are scored per keystroke.
    pub max_candidates: usize,
    /// Selector of the extension's own overlay container, excluded from
    /// caret tracking.
    pub overlay_selector: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            autocomplete_threshold: prompt_match::DEFAULT_THRESHOLD,
            history_order: HistoryOrder::Composite,
            max_candidates: 200,
            overlay_selector: "#promptstash-root".to_string(),
        }
    }
}

impl CoreConfig {
    /// Environment overrides, `PROMPTSTASH_`-prefixed. Missing variables
    /// fall back to the defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("PROMPTSTASH").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
