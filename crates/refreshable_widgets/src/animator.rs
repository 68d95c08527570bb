//! Presentation layer for the spinner and spacer
//!
//! The derived visuals from `refreshable_core` are targets. Most of the time
//! the presented values snap straight to them so the spinner tracks the
//! finger exactly. Two cases animate instead:
//!
//! - the pull "click": the scale jumps to the bump scale and springs back
//! - the return to idle after a refresh: spacer, offset and opacity ease
//!   toward their idle targets instead of collapsing in one frame

use refreshable_animation::{AnimationScheduler, Spring, SpringConfig, SpringId};
use refreshable_core::{RefreshConfig, RefreshVisuals};
use serde::{Deserialize, Serialize};

/// Appearance and animation settings for the spinner overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinnerConfig {
    /// Vertical padding around the spinner inside the overlay
    pub padding_vertical: f32,
    /// Spring used for the scale "click" when a pull arms
    pub bump_spring: SpringConfig,
    /// Spring used when visuals animate between phases
    pub phase_spring: SpringConfig,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            padding_vertical: 25.0,
            bump_spring: SpringConfig::snappy(),
            phase_spring: SpringConfig::stiff(),
        }
    }
}

/// Spinner values as they should be drawn this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentedSpinner {
    pub offset_y: f32,
    pub opacity: f32,
    pub scale: f32,
    pub spacer_height: f32,
}

/// Springs backing the presented spinner values
pub struct SpinnerAnimator {
    scheduler: AnimationScheduler,
    scale: SpringId,
    offset_y: SpringId,
    opacity: SpringId,
    spacer: SpringId,
    resting_scale: f32,
    /// Set while a phase change animates; cleared once every spring settles
    transitioning: bool,
}

impl SpinnerAnimator {
    pub fn new(spinner: &SpinnerConfig, refresh: &RefreshConfig, initial: RefreshVisuals) -> Self {
        let mut scheduler = AnimationScheduler::new();
        let scale = scheduler.add_spring(Spring::new(spinner.bump_spring, refresh.spinner_scale));
        let offset_y =
            scheduler.add_spring(Spring::new(spinner.phase_spring, initial.spinner_offset_y));
        let opacity =
            scheduler.add_spring(Spring::new(spinner.phase_spring, initial.spinner_opacity));
        let spacer = scheduler.add_spring(Spring::new(spinner.phase_spring, initial.spacer_height));

        Self {
            scheduler,
            scale,
            offset_y,
            opacity,
            spacer,
            resting_scale: refresh.spinner_scale,
            transitioning: false,
        }
    }

    /// Jump the spinner to `bump_scale`; it springs back to the resting scale
    pub fn bump(&mut self, bump_scale: f32) {
        if let Some(spring) = self.scheduler.get_spring_mut(self.scale) {
            spring.set_target(self.resting_scale);
            spring.set_value(bump_scale);
        }
    }

    /// Track new derived visuals
    ///
    /// Snaps unless a phase change is still animating, in which case only
    /// the targets move.
    pub fn follow(&mut self, visuals: RefreshVisuals) {
        if self.transitioning {
            self.retarget(visuals);
            return;
        }
        for (id, value) in self.visual_springs(visuals) {
            if let Some(spring) = self.scheduler.get_spring_mut(id) {
                spring.snap_to(value);
            }
        }
    }

    /// Animate from the current presented values toward new derived visuals
    pub fn animate_to(&mut self, visuals: RefreshVisuals) {
        self.transitioning = true;
        self.retarget(visuals);
    }

    /// Advance all springs; returns true while anything is still moving
    pub fn update(&mut self, dt: f32) -> bool {
        self.scheduler.tick(dt);
        let active = self.scheduler.has_active_animations();
        if self.transitioning && !active {
            self.transitioning = false;
        }
        active
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.has_active_animations()
    }

    pub fn presented(&self) -> PresentedSpinner {
        PresentedSpinner {
            offset_y: self.scheduler.value_or(self.offset_y, 0.0),
            opacity: self.scheduler.value_or(self.opacity, 0.0).clamp(0.0, 1.0),
            scale: self.scheduler.value_or(self.scale, self.resting_scale),
            spacer_height: self.scheduler.value_or(self.spacer, 0.0).max(0.0),
        }
    }

    fn retarget(&mut self, visuals: RefreshVisuals) {
        for (id, value) in self.visual_springs(visuals) {
            if let Some(spring) = self.scheduler.get_spring_mut(id) {
                spring.set_target(value);
            }
        }
    }

    fn visual_springs(&self, visuals: RefreshVisuals) -> [(SpringId, f32); 3] {
        [
            (self.offset_y, visuals.spinner_offset_y),
            (self.opacity, visuals.spinner_opacity),
            (self.spacer, visuals.spacer_height),
        ]
    }
}
