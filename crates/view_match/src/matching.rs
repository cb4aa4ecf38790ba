//! Fuzzy matching of view labels
//!
//! Ranks candidate labels (text, content description, resource id) by their
//! edit distance to the label a script asked for.

use std::borrow::Cow;
use tracing::debug;

use crate::config::MATCHING_CONFIG;
use crate::distance::text_distance;

/// A candidate together with its distance to the wanted value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedCandidate<T> {
    pub distance: usize,
    pub candidate: T,
}

/// Options for `suggest`
#[derive(Debug, Clone)]
pub struct MatchOptions {
    pub max_distance: usize,
    pub limit: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_distance: MATCHING_CONFIG.max_distance,
            limit: MATCHING_CONFIG.suggest_limit,
        }
    }
}

impl MatchOptions {
    /// Create options from the global configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest accepted distance
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set the maximum number of suggestions
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Rank `candidates` by the distance between `wanted` and `key(candidate)`
///
/// The result is sorted by ascending distance. Candidates at the same
/// distance keep their original order.
pub fn rank<'a, T, F>(wanted: &str, candidates: &'a [T], key: F) -> Vec<RankedCandidate<&'a T>>
where
    F: Fn(&T) -> Cow<'_, str>,
{
    let mut ranked: Vec<RankedCandidate<&'a T>> = candidates
        .iter()
        .map(|candidate| RankedCandidate {
            distance: text_distance(wanted, &key(candidate)),
            candidate,
        })
        .collect();

    ranked.sort_by_key(|r| r.distance);
    ranked
}

/// Rank plain labels against `wanted`
pub fn rank_labels<'a, S: AsRef<str>>(wanted: &str, labels: &'a [S]) -> Vec<RankedCandidate<&'a str>> {
    rank(wanted, labels, |label| Cow::Borrowed(label.as_ref()))
        .into_iter()
        .map(|r| RankedCandidate {
            distance: r.distance,
            candidate: r.candidate.as_ref(),
        })
        .collect()
}

/// The closest label within `max_distance`
///
/// Returns `None` when the closest label is an exact match (nothing to
/// suggest) or when every label is too far away.
pub fn best_match<'a, S: AsRef<str>>(
    wanted: &str,
    labels: &'a [S],
    max_distance: usize,
) -> Option<&'a str> {
    let best = rank_labels(wanted, labels).into_iter().next()?;
    debug!(
        "best match for {:?}: {:?} at distance {}",
        wanted, best.candidate, best.distance
    );

    if best.distance > 0 && best.distance <= max_distance {
        Some(best.candidate)
    } else {
        None
    }
}

/// Up to `options.limit` labels within `options.max_distance`, closest first
pub fn suggest<'a, S: AsRef<str>>(
    wanted: &str,
    labels: &'a [S],
    options: &MatchOptions,
) -> Vec<RankedCandidate<&'a str>> {
    rank_labels(wanted, labels)
        .into_iter()
        .filter(|r| r.distance <= options.max_distance)
        .take(options.limit)
        .collect()
}
