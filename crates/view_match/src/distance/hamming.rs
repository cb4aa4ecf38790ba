//! Hamming distance for equal-length sequences

use crate::error::{MatchError, Result};

/// Number of positions at which `a` and `b` differ
///
/// Both inputs must have the same length.
pub fn hamming_distance<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize> {
    if a.len() != b.len() {
        return Err(MatchError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_differing_positions() {
        assert_eq!(hamming_distance(b"karolin", b"kathrin").unwrap(), 3);
        assert_eq!(hamming_distance(b"", b"").unwrap(), 0);
        assert_eq!(hamming_distance(&[1, 2, 3], &[1, 2, 3]).unwrap(), 0);
    }

    #[test]
    fn rejects_unequal_lengths() {
        match hamming_distance(b"abc", b"ab") {
            Err(MatchError::LengthMismatch { left, right }) => {
                assert_eq!((left, right), (3, 2));
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }
}
