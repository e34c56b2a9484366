//! The object a presentation layer talks to: one [`PromptCore`] per
//! mounted page, wiring adapter resolution, caret tracking, extraction,
//! variable expansion, injection and history together.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use url::Url;

use caret_tracker::CaretTracker;
use dom_bridge::{DomEvents, DomPort, NodeId};
use prompt_match::find_best_match;
use prompt_rank::{group_prompts, sort_prompts, PromptGroup, ScoreCache, SortOrder};
use promptstash_core_types::{KeyEvent, PromptEntry, PromptId};
use site_adapters::{resolve, select_input, SiteCapability};
use surface_io::{inject, InjectRequest};
use variable_engine::{expand_prompt, sync_configs};

use crate::config::CoreConfig;
use crate::errors::PromptStashError;
use crate::store::PromptStore;

/// Options for one insertion.
#[derive(Clone, Debug, Default)]
pub struct InsertOptions {
    /// Placeholder values, in the order they should appear in the
    /// appended block. Empty values are dropped during expansion.
    pub values: Vec<(String, String)>,
    /// Whether the insertion counts as an execution of the prompt.
    pub record_execution: bool,
}

/// An autocomplete hit: the stored prompt plus its similarity score.
#[derive(Clone, Debug)]
pub struct Suggestion {
    pub prompt: PromptEntry,
    pub score: f64,
}

pub struct PromptCore {
    dom: Arc<dyn DomPort>,
    store: Arc<dyn PromptStore>,
    capability: Option<&'static SiteCapability>,
    tracker: Option<Arc<CaretTracker>>,
    cache: ScoreCache,
    config: CoreConfig,
}

impl PromptCore {
    /// Build the core for one page. An unsupported host yields an inert
    /// core: every operation becomes a silent no-op, never an error.
    pub fn new(
        dom: Arc<dyn DomPort>,
        store: Arc<dyn PromptStore>,
        events: Arc<DomEvents>,
        page_url: &str,
        config: CoreConfig,
    ) -> Self {
        let capability = Url::parse(page_url)
            .ok()
            .and_then(|url| resolve(url.host_str()?, url.path()));
        match capability {
            Some(cap) => info!(service = cap.service.name(), "prompt core active"),
            None => debug!(page_url, "no adapter for page, core is inert"),
        }
        let tracker = capability
            .map(|cap| Arc::new(CaretTracker::new(Arc::clone(&dom), events, cap)));
        Self {
            dom,
            store,
            capability,
            tracker,
            cache: ScoreCache::new(),
            config,
        }
    }

    pub fn is_active(&self) -> bool {
        self.capability.is_some()
    }

    pub fn capability(&self) -> Option<&'static SiteCapability> {
        self.capability
    }

    /// Subscribe the caret tracker and register the overlay root so
    /// selections inside the extension's own UI are ignored.
    pub fn mount(&self) {
        if let Some(tracker) = &self.tracker {
            tracker.set_overlay_root(self.dom.query_selector(&self.config.overlay_selector));
            tracker.start();
        }
    }

    pub fn unmount(&self) {
        if let Some(tracker) = &self.tracker {
            tracker.stop();
        }
    }

    /// Current caret node, for the UI collaborator.
    pub fn node_at_caret(&self) -> Option<NodeId> {
        self.tracker.as_ref()?.node_at_caret()
    }

    /// Re-resolve the input surface. Never cached; host re-renders
    /// replace nodes between operations.
    fn surface(&self) -> Option<NodeId> {
        let cap = self.capability?;
        select_input(self.dom.as_ref(), cap)
    }

    /// Extract the surface's current content as normalized plain text.
    pub fn current_text(&self) -> Option<String> {
        let cap = self.capability?;
        let surface = self.surface()?;
        (cap.extract)(self.dom.as_ref(), surface)
    }

    /// Load a stored prompt, expand its placeholder values, and write the
    /// result into the focused surface. Returns `Ok(false)` when there is
    /// nothing to do (unsupported host, no surface on the page).
    pub async fn insert_prompt(
        &self,
        id: &PromptId,
        caller_node: Option<NodeId>,
        options: InsertOptions,
    ) -> Result<bool, PromptStashError> {
        if self.capability.is_none() {
            return Ok(false);
        }
        let entry = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| PromptStashError::PromptNotFound(id.clone()))?;
        let text = expand_prompt(&entry.content, &options.values);
        if !self.write_to_surface(&text, caller_node)? {
            return Ok(false);
        }
        if options.record_execution {
            self.record_execution(entry).await?;
        }
        Ok(true)
    }

    /// Write literal content into the focused surface, expanding any
    /// supplied placeholder values first.
    pub async fn set_prompt(
        &self,
        content: &str,
        options: InsertOptions,
    ) -> Result<bool, PromptStashError> {
        let text = expand_prompt(content, &options.values);
        self.write_to_surface(&text, None)
    }

    fn write_to_surface(
        &self,
        text: &str,
        caller_node: Option<NodeId>,
    ) -> Result<bool, PromptStashError> {
        let Some(cap) = self.capability else {
            return Ok(false);
        };
        let Some(surface) = self.surface() else {
            debug!("no live input surface, skipping injection");
            return Ok(false);
        };
        let caret = caller_node.or_else(|| self.tracker.as_ref().and_then(|t| t.recompute()));
        inject(
            self.dom.as_ref(),
            InjectRequest {
                surface,
                caret,
                text,
                mode: cap.insertion_mode,
            },
        )?;
        Ok(true)
    }

    async fn record_execution(&self, mut entry: PromptEntry) -> Result<(), PromptStashError> {
        entry.execution_count += 1;
        entry.last_executed_at = Some(Utc::now());
        self.cache.invalidate(&entry.id);
        self.store.set(entry).await?;
        Ok(())
    }

    /// Best stored prompt for a typed fragment, or `None` when nothing
    /// reaches the configured threshold.
    pub async fn autocomplete(&self, typed: &str) -> Result<Option<Suggestion>, PromptStashError> {
        if typed.is_empty() {
            return Ok(None);
        }
        let entries = self.store.get_all().await?;
        let mut ranked = sort_prompts(
            &entries,
            self.config.history_order.into(),
            &self.cache,
            Utc::now(),
        );
        // The ranked list is ascending, best candidates at the tail; cap
        // from the front so the top-ranked prompts stay in the set.
        if ranked.len() > self.config.max_candidates {
            let cut = ranked.len() - self.config.max_candidates;
            ranked.drain(..cut);
        }
        let contents: Vec<&str> = ranked.iter().map(|e| e.content.as_str()).collect();
        let best = find_best_match(typed, &contents, self.config.autocomplete_threshold);
        Ok(best.map(|m| Suggestion {
            prompt: ranked[m.index].clone(),
            score: m.score,
        }))
    }

    /// Feed a key event through the adapter's trigger predicate. On a
    /// submit gesture the current surface content is captured into
    /// history; returns the id of the recorded prompt.
    pub async fn handle_key(
        &self,
        event: &KeyEvent,
    ) -> Result<Option<PromptId>, PromptStashError> {
        let Some(cap) = self.capability else {
            return Ok(None);
        };
        if !(cap.key_trigger)(event) {
            return Ok(None);
        }
        let Some(content) = self.current_text() else {
            return Ok(None);
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        self.capture(content).await.map(Some)
    }

    /// Record an executed prompt: bump the existing entry with identical
    /// content, or append a fresh one.
    async fn capture(&self, content: String) -> Result<PromptId, PromptStashError> {
        let entries = self.store.get_all().await?;
        if let Some(existing) = entries.into_iter().find(|e| e.content == content) {
            let id = existing.id.clone();
            self.record_execution(existing).await?;
            return Ok(id);
        }
        let mut entry = PromptEntry::new(derive_name(&content), content.clone());
        entry.variables = sync_configs(&content, &[]);
        entry.execution_count = 1;
        entry.last_executed_at = Some(Utc::now());
        let id = entry.id.clone();
        self.store.set(entry).await?;
        debug!(%id, "captured new prompt from submit");
        Ok(id)
    }

    /// Sorted, bucketed view of the stored prompts for the history UI.
    pub async fn grouped_history(
        &self,
        order: SortOrder,
    ) -> Result<Vec<PromptGroup>, PromptStashError> {
        let entries = self.store.get_all().await?;
        let now = Utc::now();
        let sorted = sort_prompts(&entries, order, &self.cache, now);
        Ok(group_prompts(&sorted, order, now))
    }
}

/// Display name for a captured prompt: its first line, truncated.
fn derive_name(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or_default();
    let mut name: String = first_line.chars().take(60).collect();
    if name.len() < first_line.len() {
        name.push('…');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_name_truncates_on_char_boundary() {
        let short = derive_name("hello world");
        assert_eq!(short, "hello world");

        let long = derive_name(&"x".repeat(100));
        assert_eq!(long.chars().count(), 61);
        assert!(long.ends_with('…'));
    }

    #[test]
    fn derive_name_uses_first_line_only() {
        assert_eq!(derive_name("title\nbody body body"), "title");
    }
}
