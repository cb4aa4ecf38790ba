//! Distance computations over view text, labels and snapshots
//!
//! This module provides:
//! - `levenshtein`: Edit distance over text, bytes or mixed sequences
//! - `hamming`: Positional distance for equal-length sequences
//! - `snapshot`: Normalized distance between serialized view-tree snapshots

mod hamming;
mod levenshtein;
mod snapshot;

pub use hamming::hamming_distance;
pub use levenshtein::{bytes_distance, edit_distance, levenshtein_distance, text_distance, Sequence};
pub use snapshot::{normalized_distance, snapshot_distance};
