//! Visual values derived from `(phase, offset)`
//!
//! These are recomputed on every sample and never stored, so they cannot
//! drift away from the phase.

use serde::{Deserialize, Serialize};

use crate::config::RefreshConfig;
use crate::phase::RefreshPhase;

/// Presentational values for the spinner and the leading spacer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RefreshVisuals {
    /// Vertical offset of the spinner; slides in from `-catch_height` to 0
    pub spinner_offset_y: f32,
    /// Spinner opacity in `0.0..=1.0`
    pub spinner_opacity: f32,
    /// Extra space reserved above the content while the gesture is engaged
    pub spacer_height: f32,
}

impl RefreshVisuals {
    /// Derive all visuals for a phase and offset
    pub fn derive(phase: RefreshPhase, scroll_offset: f32, config: &RefreshConfig) -> Self {
        Self {
            spinner_offset_y: spinner_offset_y(phase, scroll_offset, config),
            spinner_opacity: spinner_opacity(phase, scroll_offset, config),
            spacer_height: spacer_height(phase, scroll_offset, config),
        }
    }

    /// Visuals of a container with nothing to refresh: idle, content at rest
    pub fn hidden(config: &RefreshConfig) -> Self {
        Self::derive(RefreshPhase::Idle, 0.0, config)
    }
}

/// How far of the catch region has been pulled through, in `0..=catch_height`
fn caught(scroll_offset: f32, config: &RefreshConfig) -> f32 {
    let catch = config.catch_height.max(0.0);
    (catch + scroll_offset).clamp(0.0, catch)
}

/// Spinner vertical offset: pinned at 0 once engaged, otherwise slides in from above
pub fn spinner_offset_y(phase: RefreshPhase, scroll_offset: f32, config: &RefreshConfig) -> f32 {
    if phase.is_engaged() {
        0.0
    } else {
        -caught(scroll_offset, config)
    }
}

/// Spinner opacity: opaque once engaged, otherwise fades in over `fade_distance`
pub fn spinner_opacity(phase: RefreshPhase, scroll_offset: f32, config: &RefreshConfig) -> f32 {
    if phase.is_engaged() {
        1.0
    } else {
        let fade = config.fade_distance.max(f32::EPSILON);
        (-scroll_offset / fade).clamp(0.0, 1.0)
    }
}

/// Leading spacer height: only reserved while the gesture is engaged
pub fn spacer_height(phase: RefreshPhase, scroll_offset: f32, config: &RefreshConfig) -> f32 {
    if phase.is_engaged() {
        caught(scroll_offset, config)
    } else {
        0.0
    }
}
