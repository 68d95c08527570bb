//! Refreshable Core
//!
//! Framework-independent pieces of the pull-to-refresh scroll container:
//!
//! - **Phase machine**: `Idle`, `Pulling` and `Refreshing` gesture phases
//! - **Reducer**: a pure `(state, event) -> state` function that also
//!   describes the side effects a transition requires
//! - **Derived visuals**: spinner offset, opacity and spacer height computed
//!   from `(phase, offset)` on every sample
//!
//! # Example
//!
//! ```rust
//! use refreshable_core::{reduce, RefreshConfig, RefreshEffect, RefreshEvent, RefreshPhase, RefreshState};
//!
//! let config = RefreshConfig::default();
//! let mut state = RefreshState::new();
//!
//! for offset in [-50.0, -120.0, -10.0, 0.0] {
//!     let reduction = reduce(state, RefreshEvent::OffsetChanged(offset), &config);
//!     if reduction.effects.contains(&RefreshEffect::InvokeRefresh) {
//!         println!("start refreshing");
//!     }
//!     state = reduction.state;
//! }
//!
//! assert_eq!(state.phase(), RefreshPhase::Refreshing);
//!
//! state = reduce(state, RefreshEvent::ActionSettled, &config).state;
//! assert_eq!(state.phase(), RefreshPhase::Idle);
//! ```

pub mod config;
pub mod events;
pub mod phase;
pub mod reducer;
pub mod visuals;

pub use config::RefreshConfig;
pub use events::RefreshEvent;
pub use phase::RefreshPhase;
pub use reducer::{reduce, Reduction, RefreshEffect, RefreshState};
pub use visuals::RefreshVisuals;
