//! Matching configuration read from the environment

use lazy_static::lazy_static;
use std::env;
use std::str::FromStr;

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Settings for label matching, Kato suggestions and distance debugging
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Largest distance still considered a match
    pub max_distance: usize,
    /// Number of suggestions returned by default
    pub suggest_limit: usize,
    /// Whether new `Kato` helpers start enabled
    pub kato_enabled: bool,
    /// Emit progress while computing long distances
    pub debug_progress: bool,
    /// Rows between two progress lines
    pub progress_interval: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_distance: 3,
            suggest_limit: 5,
            kato_enabled: false,
            debug_progress: false,
            progress_interval: 100,
        }
    }
}

impl MatchingConfig {
    /// Build the configuration from `VIEW_MATCH_*` environment variables,
    /// falling back to defaults for missing or unparseable values
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_distance: env_or("VIEW_MATCH_MAX_DISTANCE", defaults.max_distance),
            suggest_limit: env_or("VIEW_MATCH_SUGGEST_LIMIT", defaults.suggest_limit),
            kato_enabled: env_flag("VIEW_MATCH_KATO_ENABLED", defaults.kato_enabled),
            debug_progress: env_flag("VIEW_MATCH_DEBUG_DISTANCE", defaults.debug_progress),
            progress_interval: env_or("VIEW_MATCH_PROGRESS_INTERVAL", defaults.progress_interval)
                .max(1),
        }
    }
}

lazy_static! {
    /// Global matching configuration instance
    pub static ref MATCHING_CONFIG: MatchingConfig = MatchingConfig::from_env();
}
