//! Animation scheduler
//!
//! Owns a group of springs and advances them together each frame.

use crate::spring::Spring;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct SpringId;
}

/// Ticks every spring it owns
pub struct AnimationScheduler {
    springs: SlotMap<SpringId, Spring>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
        }
    }

    pub fn add_spring(&mut self, spring: Spring) -> SpringId {
        self.springs.insert(spring)
    }

    pub fn get_spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id)
    }

    pub fn get_spring_mut(&mut self, id: SpringId) -> Option<&mut Spring> {
        self.springs.get_mut(id)
    }

    pub fn remove_spring(&mut self, id: SpringId) -> Option<Spring> {
        self.springs.remove(id)
    }

    /// Current value of a spring, or `fallback` if it was removed
    pub fn value_or(&self, id: SpringId, fallback: f32) -> f32 {
        self.springs.get(id).map(Spring::value).unwrap_or(fallback)
    }

    /// Advance all springs by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        for (_, spring) in self.springs.iter_mut() {
            spring.step(dt);
        }
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.is_settled())
    }

    /// Get the number of springs in the scheduler
    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spring::SpringConfig;

    #[test]
    fn test_tick_advances_all_springs() {
        let mut scheduler = AnimationScheduler::new();
        let a = scheduler.add_spring(Spring::new(SpringConfig::stiff(), 0.0));
        let b = scheduler.add_spring(Spring::new(SpringConfig::stiff(), 10.0));

        if let Some(spring) = scheduler.get_spring_mut(a) {
            spring.set_target(1.0);
        }
        if let Some(spring) = scheduler.get_spring_mut(b) {
            spring.set_target(0.0);
        }
        assert!(scheduler.has_active_animations());

        for _ in 0..120 {
            scheduler.tick(1.0 / 60.0);
        }

        assert!(!scheduler.has_active_animations());
        assert_eq!(scheduler.value_or(a, -1.0), 1.0);
        assert_eq!(scheduler.value_or(b, -1.0), 0.0);
    }

    #[test]
    fn test_removed_spring_uses_fallback() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add_spring(Spring::new(SpringConfig::snappy(), 3.0));
        assert_eq!(scheduler.spring_count(), 1);

        assert!(scheduler.remove_spring(id).is_some());
        assert_eq!(scheduler.spring_count(), 0);
        assert_eq!(scheduler.value_or(id, 7.0), 7.0);
        assert!(scheduler.get_spring(id).is_none());
    }
}
