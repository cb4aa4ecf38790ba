//! view_match: approximate matching for Android view automation
//!
//! This library provides the fuzzy-matching core used when scripting views:
//! - Levenshtein distance over text, raw bytes, or a mix of both
//! - Hamming and normalized distance between view-tree snapshots
//! - Ranking and best-match lookup of candidate labels
//! - Kato selector suggestions after a failed lookup
//!
//! # Example
//!
//! ```
//! use view_match::{best_match, levenshtein_distance, text_distance};
//!
//! assert_eq!(text_distance("elephant", "hippo"), 7);
//! assert_eq!(levenshtein_distance(Some("frog".into()), Some("fog".into())).unwrap(), 1);
//!
//! let labels = ["Display", "Sound", "Storage"];
//! assert_eq!(best_match("Sond", &labels, 2), Some("Sound"));
//! ```

// Core modules
pub mod error;

// Configuration module
pub mod config;

// Core functionality
pub mod distance;
pub mod kato;
pub mod matching;

// Re-export commonly used types and functions
pub use error::{MatchError, Result};

pub use config::{MatchingConfig, MATCHING_CONFIG};

pub use distance::{
    bytes_distance, edit_distance, hamming_distance, levenshtein_distance, normalized_distance,
    snapshot_distance, text_distance, Sequence,
};

pub use kato::{Kato, Selector};

pub use matching::{best_match, rank, rank_labels, suggest, MatchOptions, RankedCandidate};
