//! Configuration module for view_match
//!
//! This module contains:
//! - `matching`: Thresholds and debug settings for distance and matching

mod matching;

pub use matching::{MatchingConfig, MATCHING_CONFIG};
