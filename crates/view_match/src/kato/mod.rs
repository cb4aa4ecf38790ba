//! Kato: selector suggestions after a failed lookup
//!
//! When a script asks for a view with a selector that matches nothing on
//! screen, Kato ranks every selector of the current window by its edit
//! distance to the one requested, so the script author can see what they
//! probably meant.

mod selector;

pub use selector::Selector;

use tracing::{debug, info};

use crate::config::{MatchingConfig, MATCHING_CONFIG};
use crate::distance::text_distance;
use crate::matching::RankedCandidate;

const REPORT_HEADER: &str = "Kato: selector distances:\n";

/// Failed-lookup helper holding the last window's selectors and their distances
#[derive(Debug, Clone)]
pub struct Kato {
    pub enabled: bool,
    /// Selectors of the window seen by the last lookup, in window order
    pub selectors: Vec<Selector>,
    /// The same selectors ranked by distance to the wanted one
    pub distances: Vec<RankedCandidate<Selector>>,
}

impl Default for Kato {
    fn default() -> Self {
        Self::from_config(&MATCHING_CONFIG)
    }
}

impl Kato {
    /// Create a Kato helper, enabled according to `VIEW_MATCH_KATO_ENABLED`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Kato helper enabled according to `config`
    pub fn from_config(config: &MatchingConfig) -> Self {
        Self {
            enabled: config.kato_enabled,
            selectors: Vec::new(),
            distances: Vec::new(),
        }
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Rank the selectors of `window` against `wanted`
    ///
    /// Returns the report listing `distance -> selector` for every selector
    /// in window order, or `None` when Kato is disabled. The ranked result is
    /// kept in `distances`, closest first.
    pub fn find_me_the_selectors(
        &mut self,
        wanted: &Selector,
        window: Vec<Selector>,
    ) -> Option<String> {
        if !self.enabled {
            debug!("kato disabled, not ranking {} selectors", window.len());
            return None;
        }

        let wanted_key = wanted.to_string();
        let mut report = String::new();
        let mut distances = Vec::with_capacity(window.len());

        for (n, selector) in window.iter().enumerate() {
            if n == 0 {
                report.push_str(REPORT_HEADER);
            }
            let distance = text_distance(&wanted_key, &selector.to_string());
            report.push_str(&format!("{} -> {}\n", distance, selector));
            distances.push(RankedCandidate {
                distance,
                candidate: selector.clone(),
            });
        }

        distances.sort_by_key(|r| r.distance);
        if let Some(best) = distances.first() {
            info!(
                "kato: closest selector to {} is {} (distance {})",
                wanted_key, best.candidate, best.distance
            );
        }

        self.selectors = window;
        self.distances = distances;
        Some(report)
    }

    /// The selector closest to the last wanted one
    pub fn closest(&self) -> Option<&Selector> {
        self.distances.first().map(|r| &r.candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Vec<Selector> {
        vec![
            Selector::new().with_text("Cancel").with_clazz("android.widget.Button"),
            Selector::new().with_text("OK").with_clazz("android.widget.Button"),
            Selector::new().with_desc("Navigate up"),
        ]
    }

    #[test]
    fn follows_configured_enabled_flag() {
        let enabled = MatchingConfig {
            kato_enabled: true,
            ..MatchingConfig::default()
        };
        assert!(Kato::from_config(&enabled).enabled);
        assert!(!Kato::from_config(&MatchingConfig::default()).enabled);
        assert_eq!(Kato::new().enabled, MATCHING_CONFIG.kato_enabled);
    }

    #[test]
    fn disabled_by_config_ignores_lookups() {
        let mut kato = Kato::from_config(&MatchingConfig::default());
        let wanted = Selector::new().with_text("Ok");
        assert_eq!(kato.find_me_the_selectors(&wanted, window()), None);
        assert!(kato.selectors.is_empty());
    }

    #[test]
    fn disabled_is_a_no_op() {
        let mut kato = Kato::new();
        kato.disable();
        let wanted = Selector::new().with_text("Ok");
        assert_eq!(kato.find_me_the_selectors(&wanted, window()), None);
        assert!(kato.selectors.is_empty());
        assert!(kato.distances.is_empty());
    }

    #[test]
    fn ranks_window_selectors() {
        let mut kato = Kato::new();
        kato.enable();
        let wanted = Selector::new().with_text("Ok").with_clazz("android.widget.Button");

        let report = kato.find_me_the_selectors(&wanted, window()).unwrap();
        assert!(report.starts_with(REPORT_HEADER));
        assert_eq!(report.lines().count(), 4);
        assert_eq!(kato.selectors.len(), 3);
        assert_eq!(kato.closest().and_then(|s| s.text.as_deref()), Some("OK"));
        assert!(kato
            .distances
            .windows(2)
            .all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn report_lines_follow_window_order() {
        let mut kato = Kato::new();
        kato.enable();
        let wanted = Selector::new().with_text("OK").with_clazz("android.widget.Button");

        let report = kato.find_me_the_selectors(&wanted, window()).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines[2],
            r#"0 -> {"clazz":"android.widget.Button","text":"OK"}"#
        );
        assert!(lines[1].ends_with(r#"{"clazz":"android.widget.Button","text":"Cancel"}"#));
    }

    #[test]
    fn empty_window_gives_empty_report() {
        let mut kato = Kato::new();
        kato.enable();
        let report = kato.find_me_the_selectors(&Selector::new(), Vec::new());
        assert_eq!(report.as_deref(), Some(""));
        assert_eq!(kato.closest(), None);
    }
}
