//! Levenshtein edit distance
//!
//! The number of single-element insertions, deletions and substitutions
//! needed to turn one sequence into another. Text is compared by `char`,
//! binary data by byte.

use std::borrow::Cow;
use tracing::debug;

use crate::config::{MatchingConfig, MATCHING_CONFIG};
use crate::error::{MatchError, Result};

/// Input to a distance computation: either text or raw bytes
///
/// Both sides of a comparison need not share a representation. Text is
/// compared by Unicode scalar value, bytes by byte, and a text/bytes pair
/// decodes the byte side as UTF-8 before comparing chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sequence<'a> {
    Text(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
}

impl Sequence<'_> {
    /// Number of elements: chars for text, bytes for binary
    pub fn len(&self) -> usize {
        match self {
            Sequence::Text(s) => s.chars().count(),
            Sequence::Bytes(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Sequence::Text(s) => s.is_empty(),
            Sequence::Bytes(b) => b.is_empty(),
        }
    }

    /// Edit distance to `other`
    ///
    /// Fails with `MatchError::InvalidEncoding` only when one side is text,
    /// the other is bytes, and the bytes are not valid UTF-8.
    pub fn distance(&self, other: &Sequence<'_>) -> Result<usize> {
        match (self, other) {
            (Sequence::Text(a), Sequence::Text(b)) => Ok(text_distance(a, b)),
            (Sequence::Bytes(a), Sequence::Bytes(b)) => Ok(bytes_distance(a, b)),
            (Sequence::Text(a), Sequence::Bytes(b)) => {
                Ok(text_distance(a, std::str::from_utf8(b)?))
            }
            (Sequence::Bytes(a), Sequence::Text(b)) => {
                Ok(text_distance(std::str::from_utf8(a)?, b))
            }
        }
    }
}

impl<'a> From<&'a str> for Sequence<'a> {
    fn from(s: &'a str) -> Self {
        Sequence::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Sequence<'a> {
    fn from(s: &'a String) -> Self {
        Sequence::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Sequence<'static> {
    fn from(s: String) -> Self {
        Sequence::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a [u8]> for Sequence<'a> {
    fn from(b: &'a [u8]) -> Self {
        Sequence::Bytes(Cow::Borrowed(b))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Sequence<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Sequence::Bytes(Cow::Borrowed(b.as_slice()))
    }
}

impl From<Vec<u8>> for Sequence<'static> {
    fn from(b: Vec<u8>) -> Self {
        Sequence::Bytes(Cow::Owned(b))
    }
}

/// Edit distance between two possibly absent sequences
///
/// An absent argument (`None`) is an error; an empty sequence is not.
///
/// # Examples
///
/// ```
/// use view_match::{levenshtein_distance, Sequence};
///
/// let d = levenshtein_distance(Some("hippo".into()), Some(Sequence::from(b"zzzzzzzz"))).unwrap();
/// assert_eq!(d, 8);
/// assert!(levenshtein_distance(None, Some("any".into())).is_err());
/// ```
pub fn levenshtein_distance(a: Option<Sequence<'_>>, b: Option<Sequence<'_>>) -> Result<usize> {
    match (a, b) {
        (Some(a), Some(b)) => a.distance(&b),
        (None, _) => Err(MatchError::InvalidArgument(
            "first sequence must not be None".to_string(),
        )),
        (_, None) => Err(MatchError::InvalidArgument(
            "second sequence must not be None".to_string(),
        )),
    }
}

/// Edit distance between two strings, compared by `char`
pub fn text_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(&a, &b)
}

/// Edit distance between two byte strings
pub fn bytes_distance(a: &[u8], b: &[u8]) -> usize {
    edit_distance(a, b)
}

/// Edit distance between two slices of comparable elements
///
/// Keeps two rows sized to the shorter input, so memory is
/// O(min(len(a), len(b))).
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    edit_distance_with(a, b, &MATCHING_CONFIG)
}

fn edit_distance_with<T: PartialEq>(a: &[T], b: &[T], config: &MatchingConfig) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut cur = vec![0usize; short.len() + 1];

    for (j, item) in long.iter().enumerate() {
        if config.debug_progress && j > 0 && j % config.progress_interval == 0 {
            debug!("edit distance: {}% ({}/{})", j * 100 / long.len(), j, long.len());
        }

        cur[0] = j + 1;
        for (i, s) in short.iter().enumerate() {
            let cost = if s == item { 0 } else { 1 };
            // left + 1, up + 1, diagonal + cost
            cur[i + 1] = (cur[i] + 1).min(prev[i + 1] + 1).min(prev[i] + cost);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[short.len()]
}
