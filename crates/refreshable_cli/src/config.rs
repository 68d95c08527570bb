//! Demo configuration file handling (refresh.toml)

use crate::gesture::OverscrollConfig;
use anyhow::{Context, Result};
use refreshable_core::RefreshConfig;
use refreshable_widgets::SpinnerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level demo configuration
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DemoFile {
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub spinner: SpinnerConfig,
    #[serde(default)]
    pub overscroll: OverscrollConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Simulated gesture and refresh settings
#[derive(Debug, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Number of list rows after row 0
    #[serde(default = "default_items")]
    pub items: u32,
    /// How long the simulated refresh takes
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,
    /// Finger travel of the simulated pull
    #[serde(default = "default_pull_distance")]
    pub pull_distance: f32,
    /// Height of the simulated viewport
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,
    /// Simulated frames per second
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Make the refresh action fail
    #[serde(default)]
    pub fail: bool,
}

const MIN_FRAME_RATE: u32 = 1;
const MAX_FRAME_RATE: u32 = 1000;

fn default_items() -> u32 {
    100
}

fn default_refresh_ms() -> u64 {
    1000
}

fn default_pull_distance() -> f32 {
    400.0
}

fn default_viewport_height() -> f32 {
    800.0
}

fn default_frame_rate() -> u32 {
    60
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            items: default_items(),
            refresh_ms: default_refresh_ms(),
            pull_distance: default_pull_distance(),
            viewport_height: default_viewport_height(),
            frame_rate: default_frame_rate(),
            fail: false,
        }
    }
}

impl DemoConfig {
    /// Seconds per simulated frame, with the rate clamped to `1..=1000` fps
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE) as f32
    }
}

impl DemoFile {
    /// Load configuration from a file, or `refresh.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("refresh.toml")
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!("No config found at {}", config_path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = DemoFile::parse("").unwrap();
        assert_eq!(file.refresh, RefreshConfig::default());
        assert_eq!(file.spinner, SpinnerConfig::default());
        assert_eq!(file.demo.items, 100);
        assert_eq!(file.demo.refresh_ms, 1000);
        assert!(!file.demo.fail);
    }

    #[test]
    fn test_partial_tables() {
        let file = DemoFile::parse(
            r#"
            [refresh]
            pull_threshold = 80.0

            [spinner]
            padding_vertical = 12.0

            [demo]
            refresh_ms = 250
            fail = true
            "#,
        )
        .unwrap();

        assert_eq!(file.refresh.pull_threshold, 80.0);
        assert_eq!(file.refresh.catch_height, 60.0);
        assert_eq!(file.spinner.padding_vertical, 12.0);
        assert_eq!(file.overscroll, OverscrollConfig::default());
        assert_eq!(file.demo.refresh_ms, 250);
        assert!(file.demo.fail);
        assert_eq!(file.demo.frame_rate, 60);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let file = DemoFile::default();
        let text = file.to_toml().unwrap();
        let parsed = DemoFile::parse(&text).unwrap();
        assert_eq!(parsed.refresh, file.refresh);
        assert_eq!(parsed.demo.pull_distance, file.demo.pull_distance);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = DemoFile::load(Path::new("/nonexistent/refresh.toml")).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }

    #[test]
    fn test_frame_dt_never_divides_by_zero() {
        let demo = DemoConfig {
            frame_rate: 0,
            ..Default::default()
        };
        assert_eq!(demo.frame_dt(), 1.0);
    }

    #[test]
    fn test_huge_frame_rate_keeps_a_usable_period() {
        let file = DemoFile::parse("[demo]\nframe_rate = 4000000000").unwrap();
        let dt = file.demo.frame_dt();
        assert_eq!(dt, 1.0 / 1000.0);
        assert!(!std::time::Duration::from_secs_f32(dt).is_zero());
    }
}
