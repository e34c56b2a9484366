use chrono::{DateTime, Utc};

use promptstash_core_types::PromptEntry;

use crate::score::ScoreCache;

/// The four interchangeable orderings of the stored prompt set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortOrder {
    Recency,
    Frequency,
    Name,
    Composite,
}

/// Sort prompts under the given ordering.
///
/// Each ordering sorts descending and then reverses, surfacing the
/// oldest/least-used items first. The reversal looks backwards but is the
/// existing contract consumers rely on; keep it.
pub fn sort_prompts(
    entries: &[PromptEntry],
    order: SortOrder,
    cache: &ScoreCache,
    now: DateTime<Utc>,
) -> Vec<PromptEntry> {
    let mut sorted = entries.to_vec();
    match order {
        SortOrder::Recency => {
            sorted.sort_by(|a, b| b.last_executed_at.cmp(&a.last_executed_at));
        }
        SortOrder::Frequency => {
            sorted.sort_by(|a, b| b.execution_count.cmp(&a.execution_count));
        }
        SortOrder::Name => {
            sorted.sort_by(|a, b| b.name.cmp(&a.name));
        }
        SortOrder::Composite => {
            sorted.sort_by(|a, b| {
                cache
                    .score(b, now)
                    .partial_cmp(&cache.score(a, now))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
    }
    sorted.reverse();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry(name: &str, count: u32, days_ago: Option<i64>, now: DateTime<Utc>) -> PromptEntry {
        let mut e = PromptEntry::new(name, "content");
        e.execution_count = count;
        e.last_executed_at = days_ago.map(|d| now - Duration::days(d));
        e
    }

    #[test]
    fn recency_surfaces_oldest_first() {
        let now = Utc::now();
        let cache = ScoreCache::new();
        let entries = vec![
            entry("new", 0, Some(1), now),
            entry("old", 0, Some(30), now),
            entry("never", 0, None, now),
        ];
        let sorted = sort_prompts(&entries, SortOrder::Recency, &cache, now);
        let names: Vec<&str> = sorted.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["never", "old", "new"]);
    }

    #[test]
    fn frequency_surfaces_least_used_first() {
        let now = Utc::now();
        let cache = ScoreCache::new();
        let entries = vec![
            entry("hot", 40, None, now),
            entry("cold", 1, None, now),
            entry("warm", 10, None, now),
        ];
        let sorted = sort_prompts(&entries, SortOrder::Frequency, &cache, now);
        let names: Vec<&str> = sorted.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["cold", "warm", "hot"]);
    }

    #[test]
    fn name_order_is_ascending_after_reversal() {
        let now = Utc::now();
        let cache = ScoreCache::new();
        let entries = vec![
            entry("beta", 0, None, now),
            entry("alpha", 0, None, now),
            entry("gamma", 0, None, now),
        ];
        let sorted = sort_prompts(&entries, SortOrder::Name, &cache, now);
        let names: Vec<&str> = sorted.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn composite_blends_count_and_recency() {
        let now = Utc::now();
        let cache = ScoreCache::new();
        // Same count: recency decides. 5 + 0.5*99 > 5 + 0.5*70.
        let entries = vec![
            entry("recent", 5, Some(1), now),
            entry("stale", 5, Some(30), now),
        ];
        let sorted = sort_prompts(&entries, SortOrder::Composite, &cache, now);
        let names: Vec<&str> = sorted.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["stale", "recent"]);
    }
}
