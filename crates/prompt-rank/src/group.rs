use chrono::{DateTime, Datelike, Utc};

use promptstash_core_types::PromptEntry;

use crate::order::SortOrder;

/// One labeled bucket of the grouped view. Empty buckets are never
/// emitted.
#[derive(Clone, Debug, PartialEq)]
pub struct PromptGroup {
    pub label: String,
    pub prompts: Vec<PromptEntry>,
}

/// Partition an already-sorted sequence into labeled buckets.
///
/// Buckets appear in the order their first member appears in `sorted`, so
/// the grouped view never reorders prompts within or across buckets.
pub fn group_prompts(
    sorted: &[PromptEntry],
    order: SortOrder,
    now: DateTime<Utc>,
) -> Vec<PromptGroup> {
    match order {
        SortOrder::Composite => quintile_groups(sorted),
        _ => {
            let mut groups: Vec<PromptGroup> = Vec::new();
            for entry in sorted {
                let label = match order {
                    SortOrder::Recency => recency_label(entry, now),
                    SortOrder::Frequency => frequency_label(entry),
                    SortOrder::Name => script_label(entry),
                    SortOrder::Composite => unreachable!(),
                };
                match groups.iter_mut().find(|g| g.label == label) {
                    Some(group) => group.prompts.push(entry.clone()),
                    None => groups.push(PromptGroup {
                        label,
                        prompts: vec![entry.clone()],
                    }),
                }
            }
            groups
        }
    }
}

fn recency_label(entry: &PromptEntry, now: DateTime<Utc>) -> String {
    let Some(at) = entry.last_executed_at else {
        return "never".to_string();
    };
    let today = now.date_naive();
    let day = at.date_naive();
    if day == today {
        return "today".to_string();
    }
    if today.pred_opt() == Some(day) {
        return "yesterday".to_string();
    }
    let days_ago = (today - day).num_days();
    if (0..7).contains(&days_ago) {
        return "this week".to_string();
    }
    if day.year() == today.year() && day.month() == today.month() {
        return "this month".to_string();
    }
    day.year().to_string()
}

fn frequency_label(entry: &PromptEntry) -> String {
    match entry.execution_count {
        0 => "not yet run".to_string(),
        1..=9 => "1-9 runs".to_string(),
        10..=49 => "10-49 runs".to_string(),
        _ => "50+ runs".to_string(),
    }
}

/// Script class of the name's first character. CJK ranges are checked
/// before the generic alphabetic test since kanji count as alphabetic in
/// Unicode.
fn script_label(entry: &PromptEntry) -> String {
    let Some(first) = entry.name.chars().next() else {
        return "other".to_string();
    };
    let label = match first {
        '\u{3041}'..='\u{309F}' => "hiragana",
        '\u{30A0}'..='\u{30FF}' | '\u{FF66}'..='\u{FF9D}' => "katakana",
        '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' => "kanji",
        c if c.is_numeric() => "numeric",
        c if c.is_alphabetic() => "alphabetic",
        _ => "other",
    };
    label.to_string()
}

/// Five contiguous chunks of the sorted sequence, lowest scores first
/// (the input is ascending). Short inputs simply produce fewer chunks.
fn quintile_groups(sorted: &[PromptEntry]) -> Vec<PromptGroup> {
    if sorted.is_empty() {
        return Vec::new();
    }
    let chunk = sorted.len().div_ceil(5);
    sorted
        .chunks(chunk)
        .enumerate()
        .map(|(i, prompts)| PromptGroup {
            label: format!("quintile {}", i + 1),
            prompts: prompts.to_vec(),
        })
        .collect()
}
