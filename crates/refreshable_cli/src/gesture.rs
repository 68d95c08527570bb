//! Simulated pull gesture
//!
//! Stands in for the host scroll view: a finger drags the content down past
//! the top edge with rubber-band resistance, lets go, and the content springs
//! back to rest. Each frame produces one scroll offset sample, negative while
//! the content is pulled down.

use refreshable_animation::{AnimationScheduler, Spring, SpringConfig, SpringId};
use serde::{Deserialize, Serialize};

/// Longest the release spring may run before the content is snapped to rest
const MAX_RELEASE_SECONDS: f32 = 5.0;

/// Time the simulated finger takes to cover the pull distance
const DRAG_SECONDS: f32 = 0.4;

/// Overscroll behavior at the top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverscrollConfig {
    /// Maximum overscroll distance as fraction of viewport height
    pub max_overscroll: f32,
    /// Spring that returns the content to rest after release
    pub bounce_spring: SpringConfig,
}

impl Default for OverscrollConfig {
    fn default() -> Self {
        Self {
            max_overscroll: 0.3,
            // Slightly overdamped: fast return with no rebound past the edge
            bounce_spring: SpringConfig::new(3000.0, 110.0, 1.0),
        }
    }
}

/// Rubber-band overscroll at the top edge of a vertical scroll view
pub struct PullSimulator {
    config: OverscrollConfig,
    viewport_height: f32,
    /// Distance the content is pulled down past the top edge (>= 0)
    overscroll: f32,
    scheduler: AnimationScheduler,
    bounce: Option<SpringId>,
}

impl PullSimulator {
    pub fn new(viewport_height: f32, config: OverscrollConfig) -> Self {
        Self {
            config,
            viewport_height: viewport_height.max(1.0),
            overscroll: 0.0,
            scheduler: AnimationScheduler::new(),
            bounce: None,
        }
    }

    /// Scroll offset as reported to the refresh container
    pub fn offset(&self) -> f32 {
        -self.overscroll
    }

    fn max_overscroll(&self) -> f32 {
        self.viewport_height * self.config.max_overscroll
    }

    /// Move the finger down by `delta` pixels
    pub fn drag(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        if let Some(id) = self.bounce.take() {
            self.scheduler.remove_spring(id);
        }

        let max_over = self.max_overscroll();
        if self.overscroll > 0.0 && delta > 0.0 {
            // Start at 55% effect, decrease to 10% at max stretch
            let stretch_ratio = (self.overscroll / max_over).min(1.0);
            let resistance = 0.55 - stretch_ratio * 0.45;
            self.overscroll += delta * resistance;
        } else {
            self.overscroll += delta;
        }
        self.overscroll = self.overscroll.clamp(0.0, max_over);

        tracing::trace!("Drag delta={:.1} overscroll={:.1}", delta, self.overscroll);
    }

    /// Lift the finger; the content springs back to rest
    pub fn release(&mut self) {
        if self.overscroll <= 0.0 || self.bounce.is_some() {
            return;
        }
        let mut spring = Spring::new(self.config.bounce_spring, self.overscroll);
        spring.set_target(0.0);
        self.bounce = Some(self.scheduler.add_spring(spring));
    }

    /// Advance the release animation; returns true while still moving
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(id) = self.bounce else {
            return false;
        };
        self.scheduler.tick(dt);

        match self.scheduler.get_spring(id) {
            Some(spring) if !spring.is_settled() => {
                self.overscroll = spring.value().max(0.0);
                true
            }
            _ => {
                self.scheduler.remove_spring(id);
                self.bounce = None;
                self.overscroll = 0.0;
                false
            }
        }
    }

    /// Offsets for a full drag-and-release of `distance` finger pixels
    ///
    /// The last sample is always exactly at rest.
    pub fn pull_and_release(&mut self, distance: f32, dt: f32) -> Vec<f32> {
        let dt = if dt > 0.0 && dt.is_finite() { dt } else { 1.0 / 60.0 };
        let frames = (DRAG_SECONDS / dt).ceil().max(1.0) as usize;
        let step = distance.max(0.0) / frames as f32;

        let mut samples = Vec::with_capacity(frames * 2);
        for _ in 0..frames {
            self.drag(step);
            samples.push(self.offset());
        }

        self.release();
        let mut elapsed = 0.0;
        while self.tick(dt) {
            samples.push(self.offset());
            elapsed += dt;
            if elapsed >= MAX_RELEASE_SECONDS {
                break;
            }
        }

        self.overscroll = 0.0;
        samples.push(self.offset());
        samples
    }
}
