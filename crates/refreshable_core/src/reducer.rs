//! Pure reducer for the refresh state
//!
//! `reduce` never performs side effects. Transitions that need one (haptic
//! feedback, starting the refresh action, animating the spinner) describe it
//! as a [`RefreshEffect`] that the owning component executes.

use smallvec::SmallVec;

use crate::config::RefreshConfig;
use crate::events::RefreshEvent;
use crate::phase::RefreshPhase;
use crate::visuals::RefreshVisuals;

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshEffect {
    /// Fire the light impact haptic
    Haptic,
    /// Jump the spinner to its bump scale and spring back to rest
    BumpSpinner,
    /// Start the refresh action (exactly once per pull-release cycle)
    InvokeRefresh,
    /// Animate the visuals toward the new phase instead of snapping
    AnimatePhaseChange,
}

/// Transient refresh state owned by a single component
///
/// The phase can only change through [`reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RefreshState {
    scroll_offset: f32,
    phase: RefreshPhase,
}

impl RefreshState {
    /// Initial state: idle, content at rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content offset (negative while pulled)
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Current gesture phase
    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    /// Record an offset without evaluating transitions
    ///
    /// Used by containers with pull-to-refresh disabled, which still track
    /// the offset but never leave `Idle`.
    pub fn with_offset(self, scroll_offset: f32) -> Self {
        Self {
            scroll_offset,
            ..self
        }
    }

    /// Derived visuals for this state
    pub fn visuals(&self, config: &RefreshConfig) -> RefreshVisuals {
        RefreshVisuals::derive(self.phase, self.scroll_offset, config)
    }
}

/// Result of reducing one event
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// The next state
    pub state: RefreshState,
    /// Effects the owner must run, in order
    pub effects: SmallVec<[RefreshEffect; 2]>,
}

impl Reduction {
    fn unchanged(state: RefreshState) -> Self {
        Self {
            state,
            effects: SmallVec::new(),
        }
    }
}

/// Apply an event to the state
pub fn reduce(state: RefreshState, event: RefreshEvent, config: &RefreshConfig) -> Reduction {
    let mut next = state;

    if let Some(offset) = event.offset() {
        if !offset.is_finite() {
            tracing::trace!("Dropping non-finite scroll offset {}", offset);
            return Reduction::unchanged(state);
        }
        next.scroll_offset = offset;
    }

    let Some(phase) = state.phase.on_event(event, config) else {
        return Reduction::unchanged(next);
    };

    let mut effects = SmallVec::new();
    match (state.phase, phase) {
        (RefreshPhase::Idle, RefreshPhase::Pulling) => {
            effects.push(RefreshEffect::Haptic);
            effects.push(RefreshEffect::BumpSpinner);
        }
        (RefreshPhase::Pulling, RefreshPhase::Refreshing) => {
            effects.push(RefreshEffect::InvokeRefresh);
        }
        (RefreshPhase::Refreshing, RefreshPhase::Idle) => {
            effects.push(RefreshEffect::AnimatePhaseChange);
        }
        _ => {}
    }

    tracing::debug!(
        "Refresh phase {:?} -> {:?} at offset {:.1}",
        state.phase,
        phase,
        next.scroll_offset
    );

    next.phase = phase;
    Reduction {
        state: next,
        effects,
    }
}
