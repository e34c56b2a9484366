//! Lexical similarity scoring for autocomplete.
//!
//! The metric is positional, not edit distance: characters are compared
//! at the same index up to the shorter string, and the match count is
//! divided by the longer length. This is tolerant of trailing differences
//! and intolerant of insertions, a deliberate trade-off tuned for
//! near-identical id-like strings. Downstream thresholds were calibrated
//! against this exact formula; do not swap in edit distance.

use tracing::trace;

/// Default acceptance threshold for [`find_best_match`].
pub const DEFAULT_THRESHOLD: f64 = 90.0;

/// Positional similarity of two strings in `[0, 100]`.
///
/// Exact equality short-circuits to 100; either string empty yields 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 100.0;
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let matches = a_chars
        .iter()
        .zip(b_chars.iter())
        .filter(|(x, y)| x == y)
        .count();
    matches as f64 / a_chars.len().max(b_chars.len()) as f64 * 100.0
}

/// The winning candidate from one [`find_best_match`] scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BestMatch<'a> {
    pub index: usize,
    pub candidate: &'a str,
    pub score: f64,
}

/// Candidate with the highest similarity to `target` at or above
/// `threshold`, or `None` when no candidate qualifies.
///
/// Stable left-to-right scan; a later candidate replaces the current best
/// only with a strictly greater score, so ties keep the first one seen.
pub fn find_best_match<'a, S: AsRef<str>>(
    target: &str,
    candidates: &'a [S],
    threshold: f64,
) -> Option<BestMatch<'a>> {
    let mut best: Option<BestMatch<'a>> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let candidate = candidate.as_ref();
        let score = similarity(target, candidate);
        trace!(index, score, "scored candidate");
        if score >= threshold && best.map_or(true, |b| score > b.score) {
            best = Some(BestMatch {
                index,
                candidate,
                score,
            });
        }
    }
    best
}
