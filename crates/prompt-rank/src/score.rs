use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::trace;

use promptstash_core_types::{PromptEntry, PromptId};

/// Recency component: `max(0, 100 - days_since_last_execution)`.
/// A prompt that was never executed scores 0.
pub fn recency_score(entry: &PromptEntry, now: DateTime<Utc>) -> f64 {
    match entry.last_executed_at {
        Some(at) => {
            let days = (now - at).num_days();
            (100 - days).max(0) as f64
        }
        None => 0.0,
    }
}

/// Composite ranking value: execution count weighted 1.0 plus the recency
/// score weighted 0.5.
pub fn composite_score(entry: &PromptEntry, now: DateTime<Utc>) -> f64 {
    entry.execution_count as f64 + recency_score(entry, now) * 0.5
}

/// Identity-keyed memo for composite scores.
///
/// Entries live until explicitly invalidated; there is no implicit expiry.
/// Callers must invalidate after mutating a prompt's execution count or
/// the cached value goes stale by design.
#[derive(Default)]
pub struct ScoreCache {
    inner: Mutex<HashMap<PromptId, f64>>,
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, entry: &PromptEntry, now: DateTime<Utc>) -> f64 {
        let mut cache = self.inner.lock();
        if let Some(score) = cache.get(&entry.id) {
            return *score;
        }
        let score = composite_score(entry, now);
        trace!(id = %entry.id, score, "composite score memoized");
        cache.insert(entry.id.clone(), score);
        score
    }

    pub fn invalidate(&self, id: &PromptId) {
        self.inner.lock().remove(id);
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn executed(count: u32, days_ago: i64, now: DateTime<Utc>) -> PromptEntry {
        let mut entry = PromptEntry::new("p", "content");
        entry.execution_count = count;
        entry.last_executed_at = Some(now - Duration::days(days_ago));
        entry
    }

    #[test]
    fn more_recent_execution_scores_strictly_higher() {
        let now = Utc::now();
        let recent = executed(5, 1, now);
        let stale = executed(5, 30, now);
        assert!(composite_score(&recent, now) > composite_score(&stale, now));
    }

    #[test]
    fn recency_floors_at_zero_after_a_hundred_days() {
        let now = Utc::now();
        let ancient = executed(3, 400, now);
        assert_eq!(recency_score(&ancient, now), 0.0);
        assert_eq!(composite_score(&ancient, now), 3.0);
    }

    #[test]
    fn never_executed_scores_only_its_count() {
        let now = Utc::now();
        let mut entry = PromptEntry::new("p", "content");
        entry.execution_count = 2;
        assert_eq!(composite_score(&entry, now), 2.0);
    }

    #[test]
    fn cache_returns_stale_value_until_invalidated() {
        let now = Utc::now();
        let cache = ScoreCache::new();
        let mut entry = executed(1, 200, now);

        assert_eq!(cache.score(&entry, now), 1.0);

        entry.execution_count = 10;
        // No invalidation yet: the memo wins.
        assert_eq!(cache.score(&entry, now), 1.0);

        cache.invalidate(&entry.id);
        assert_eq!(cache.score(&entry, now), 10.0);
    }
}
