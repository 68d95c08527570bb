//! Spring physics
//!
//! Damped harmonic oscillator integrated with RK4. Large frame deltas are
//! split into fixed sub-steps so stiff springs stay stable at low frame rates.
//! Deltas longer than a second (a suspended app, a debugger pause) jump
//! straight to rest.

use serde::{Deserialize, Serialize};

/// Largest integration step in seconds
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Longest frame delta that is integrated; longer stalls jump to rest
const MAX_FRAME_DT: f32 = 1.0;

/// Distance and speed below which a spring counts as settled
const REST_EPSILON: f32 = 0.001;

/// Physical parameters of a spring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::snappy()
    }
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Fast, no visible overshoot
    pub const fn stiff() -> Self {
        Self::new(400.0, 40.0, 1.0)
    }

    /// Quick with a hint of overshoot (button presses, spinner clicks)
    pub const fn snappy() -> Self {
        Self::new(300.0, 24.0, 1.0)
    }

    /// Slow and soft
    pub const fn gentle() -> Self {
        Self::new(120.0, 20.0, 1.0)
    }

    /// Visible bounce
    pub const fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    /// Damping ratio (1.0 = critically damped)
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// A single animated value driven toward a target
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring resting at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Retarget the spring, keeping the current position and velocity
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to a position with zero velocity, keeping the target
    ///
    /// The spring animates from here back to its target.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
    }

    /// Jump to a position and rest there
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Check if the spring is at rest on its target
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        if dt > MAX_FRAME_DT || self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let steps = (dt / MAX_SUBSTEP).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        for _ in 0..steps {
            self.rk4(h);
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, position: f32, velocity: f32) -> f32 {
        let displacement = position - self.target;
        let mass = self.config.mass.max(f32::EPSILON);
        (-self.config.stiffness * displacement - self.config.damping * velocity) / mass
    }

    fn rk4(&mut self, h: f32) {
        let x = self.value;
        let v = self.velocity;

        let k1x = v;
        let k1v = self.acceleration(x, v);

        let k2x = v + 0.5 * h * k1v;
        let k2v = self.acceleration(x + 0.5 * h * k1x, k2x);

        let k3x = v + 0.5 * h * k2v;
        let k3v = self.acceleration(x + 0.5 * h * k2x, k3x);

        let k4x = v + h * k3v;
        let k4v = self.acceleration(x + h * k3x, k4x);

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}
