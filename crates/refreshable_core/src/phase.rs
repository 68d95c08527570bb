//! Gesture phases of the pull-to-refresh state machine
//!
//! ```text
//!          offset <= -threshold          offset >= 0
//!   Idle ───────────────────────▶ Pulling ─────────────▶ Refreshing
//!    ▲                                                       │
//!    └──────────────────── ActionSettled ────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::config::RefreshConfig;
use crate::events::RefreshEvent;

/// Discrete phase of the refresh gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshPhase {
    /// Nothing armed, no refresh in flight
    #[default]
    Idle,
    /// Pulled past the threshold, waiting for the content to return to rest
    Pulling,
    /// The refresh action is in flight
    Refreshing,
}

impl RefreshPhase {
    /// Map an event to the next phase, or `None` if the event causes no transition
    pub fn on_event(&self, event: RefreshEvent, config: &RefreshConfig) -> Option<Self> {
        match (self, event) {
            (RefreshPhase::Pulling, RefreshEvent::OffsetChanged(offset)) if offset >= 0.0 => {
                Some(RefreshPhase::Refreshing)
            }
            (RefreshPhase::Idle, RefreshEvent::OffsetChanged(offset))
                if offset <= config.pull_offset() =>
            {
                Some(RefreshPhase::Pulling)
            }
            (RefreshPhase::Refreshing, RefreshEvent::ActionSettled) => Some(RefreshPhase::Idle),
            // Samples while refreshing only move the content
            (RefreshPhase::Refreshing, RefreshEvent::OffsetChanged(_)) => None,
            _ => None,
        }
    }

    /// Whether the gesture has committed (spinner pinned, spacer reserved)
    pub fn is_engaged(&self) -> bool {
        matches!(self, RefreshPhase::Pulling | RefreshPhase::Refreshing)
    }

    /// Whether a refresh action is in flight
    pub fn is_refreshing(&self) -> bool {
        matches!(self, RefreshPhase::Refreshing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(value: f32) -> RefreshEvent {
        RefreshEvent::OffsetChanged(value)
    }

    #[test]
    fn test_idle_arms_at_threshold() {
        let config = RefreshConfig::default();
        assert_eq!(RefreshPhase::Idle.on_event(offset(-99.9), &config), None);
        assert_eq!(
            RefreshPhase::Idle.on_event(offset(-100.0), &config),
            Some(RefreshPhase::Pulling)
        );
        assert_eq!(
            RefreshPhase::Idle.on_event(offset(-300.0), &config),
            Some(RefreshPhase::Pulling)
        );
    }

    #[test]
    fn test_pulling_commits_at_rest() {
        let config = RefreshConfig::default();
        assert_eq!(RefreshPhase::Pulling.on_event(offset(-0.5), &config), None);
        assert_eq!(RefreshPhase::Pulling.on_event(offset(-200.0), &config), None);
        assert_eq!(
            RefreshPhase::Pulling.on_event(offset(0.0), &config),
            Some(RefreshPhase::Refreshing)
        );
        assert_eq!(
            RefreshPhase::Pulling.on_event(offset(35.0), &config),
            Some(RefreshPhase::Refreshing)
        );
    }

    #[test]
    fn test_refreshing_ignores_offsets() {
        let config = RefreshConfig::default();
        for value in [-500.0, -100.0, 0.0, 100.0] {
            assert_eq!(RefreshPhase::Refreshing.on_event(offset(value), &config), None);
        }
        assert_eq!(
            RefreshPhase::Refreshing.on_event(RefreshEvent::ActionSettled, &config),
            Some(RefreshPhase::Idle)
        );
    }

    #[test]
    fn test_zero_threshold_never_arms_at_rest() {
        let config = RefreshConfig::default().pull_threshold(0.0);
        assert_eq!(RefreshPhase::Idle.on_event(offset(0.0), &config), None);
        assert_eq!(RefreshPhase::Idle.on_event(offset(12.0), &config), None);
        assert_eq!(
            RefreshPhase::Idle.on_event(offset(-1.0), &config),
            Some(RefreshPhase::Pulling)
        );
    }

    #[test]
    fn test_phase_names_in_toml() {
        #[derive(Deserialize, Serialize)]
        struct Snapshot {
            phase: RefreshPhase,
        }

        let snapshot: Snapshot = toml::from_str("phase = \"pulling\"").unwrap();
        assert_eq!(snapshot.phase, RefreshPhase::Pulling);
        let text = toml::to_string(&Snapshot {
            phase: RefreshPhase::Refreshing,
        })
        .unwrap();
        assert!(text.contains("\"refreshing\""));
    }

    #[test]
    fn test_settled_outside_refresh_is_ignored() {
        let config = RefreshConfig::default();
        assert_eq!(RefreshPhase::Idle.on_event(RefreshEvent::ActionSettled, &config), None);
        assert_eq!(
            RefreshPhase::Pulling.on_event(RefreshEvent::ActionSettled, &config),
            None
        );
    }
}
