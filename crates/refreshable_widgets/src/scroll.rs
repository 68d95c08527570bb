//! Scroll primitive configuration forwarded to the host container

use serde::{Deserialize, Serialize};

/// Scroll direction(s) enabled on the host container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAxis {
    /// Vertical scrolling only (default)
    #[default]
    Vertical,
    /// Horizontal scrolling only
    Horizontal,
    /// Both directions (free scroll)
    Both,
}

/// Host scroll container settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Scroll direction(s)
    pub axis: ScrollAxis,
    /// Show native scrollbar indicators
    pub shows_indicators: bool,
    /// Clip the spinner and content to the container bounds
    pub clip_to_bounds: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            axis: ScrollAxis::Vertical,
            shows_indicators: true,
            clip_to_bounds: true,
        }
    }
}
