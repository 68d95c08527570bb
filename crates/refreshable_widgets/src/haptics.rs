//! Haptic feedback port
//!
//! The component never talks to a vibration API directly. Hosts inject a
//! [`HapticFeedback`] implementation; platforms without haptics use
//! [`NoHaptics`].

use serde::{Deserialize, Serialize};

/// Strength of an impact haptic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStyle {
    #[default]
    Light,
    Medium,
    Heavy,
}

/// A reusable impact feedback generator
pub trait HapticFeedback {
    /// Warm up the generator. Called once when the component is built.
    fn prepare(&mut self);

    /// Fire one impact. Fire-and-forget.
    fn impact_occurred(&mut self);

    /// Impact strength this generator produces
    fn style(&self) -> ImpactStyle {
        ImpactStyle::Light
    }
}

/// Generator for hosts without haptics; only logs the impacts
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn prepare(&mut self) {}

    fn impact_occurred(&mut self) {
        tracing::trace!("Haptic impact skipped: no haptics available");
    }
}
