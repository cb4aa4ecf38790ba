//! Normalized distance between two view-tree snapshots
//!
//! Snapshots are compared as bytes. Equal-length snapshots use the Hamming
//! distance, anything else falls back to Levenshtein. Either way the result is
//! divided by the longer length, giving a value in `[0.0, 1.0]`.

use serde::Serialize;
use tracing::debug;

use super::hamming::hamming_distance;
use super::levenshtein::bytes_distance;
use crate::error::Result;

/// Normalized distance between two serialized snapshots
pub fn normalized_distance(a: &[u8], b: &[u8]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 0.0;
    }

    let distance = if a.len() == b.len() {
        debug!("snapshot distance: same length ({}), using Hamming distance", a.len());
        // lengths are equal, so this cannot fail
        hamming_distance(a, b).unwrap_or(longest)
    } else {
        debug!(
            "snapshot distance: lengths differ ({} vs {}), using Levenshtein distance",
            a.len(),
            b.len()
        );
        bytes_distance(a, b)
    };

    distance as f64 / longest as f64
}

/// Serialize both snapshots to JSON and return their normalized distance
pub fn snapshot_distance<T: Serialize + ?Sized>(a: &T, b: &T) -> Result<f64> {
    let left = serde_json::to_vec(a)?;
    let right = serde_json::to_vec(b)?;
    Ok(normalized_distance(&left, &right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_snapshots_are_identical() {
        assert_eq!(normalized_distance(b"", b""), 0.0);
    }

    #[test]
    fn same_length_uses_positions() {
        // "abcd" vs "badc" is 4 substitutions by position, 3 by Levenshtein
        assert_eq!(normalized_distance(b"abcd", b"badc"), 1.0);
    }

    #[test]
    fn different_length_uses_edits() {
        assert_eq!(normalized_distance(b"abcd", b"abc"), 0.25);
        assert_eq!(normalized_distance(b"", b"abc"), 1.0);
    }

    #[test]
    fn serialized_trees() {
        let tree = json!([{"id": "id/no_id/1", "text": "OK"}]);
        let other = json!([{"id": "id/no_id/1", "text": "Cancel"}]);
        assert_eq!(snapshot_distance(&tree, &tree).unwrap(), 0.0);
        let d = snapshot_distance(&tree, &other).unwrap();
        assert!(d > 0.0 && d < 1.0);
    }
}
