//! Threshold and scale configuration for the refresh gesture

use serde::{Deserialize, Serialize};

/// Smallest pull that can arm a refresh; a sample at rest never arms
const MIN_PULL_THRESHOLD: f32 = f32::EPSILON;

/// Configuration for pull-to-refresh thresholds
///
/// Distances are in logical units along the scroll axis. Offsets reported by
/// the host are negative while the content is pulled past its top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Pulled distance that arms a refresh (offset <= -pull_threshold)
    pub pull_threshold: f32,
    /// Height of the region the spinner slides through, and the maximum
    /// spacer reserved above the content while refreshing
    pub catch_height: f32,
    /// Pulled distance over which the spinner fades in from 0 to 1
    pub fade_distance: f32,
    /// Resting spinner scale
    pub spinner_scale: f32,
    /// Spinner scale the instant a pull is armed, springs back to `spinner_scale`
    pub spinner_bump_scale: f32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            pull_threshold: 100.0,
            catch_height: 60.0,
            fade_distance: 250.0,
            spinner_scale: 1.5,
            spinner_bump_scale: 1.6,
        }
    }
}

impl RefreshConfig {
    /// Config that arms after a short pull (touch-pad friendly)
    pub fn sensitive() -> Self {
        Self {
            pull_threshold: 60.0,
            fade_distance: 150.0,
            ..Default::default()
        }
    }

    /// Config that needs a long, deliberate pull
    pub fn deliberate() -> Self {
        Self {
            pull_threshold: 160.0,
            fade_distance: 400.0,
            ..Default::default()
        }
    }

    /// Set the pull threshold
    pub fn pull_threshold(mut self, distance: f32) -> Self {
        self.pull_threshold = distance;
        self
    }

    /// Set the catch height
    pub fn catch_height(mut self, height: f32) -> Self {
        self.catch_height = height;
        self
    }

    /// Set the fade-in distance
    pub fn fade_distance(mut self, distance: f32) -> Self {
        self.fade_distance = distance;
        self
    }

    /// Set the resting and bumped spinner scales
    pub fn spinner_scales(mut self, resting: f32, bumped: f32) -> Self {
        self.spinner_scale = resting;
        self.spinner_bump_scale = bumped;
        self
    }

    /// Offset at or below which an idle gesture becomes a pull
    ///
    /// Zero and NaN thresholds fall back to the smallest possible pull.
    pub fn pull_offset(&self) -> f32 {
        -self.pull_threshold.abs().max(MIN_PULL_THRESHOLD)
    }
}
