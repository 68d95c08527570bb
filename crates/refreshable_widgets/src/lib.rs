//! Refreshable Widget Library
//!
//! A scroll container with FSM-driven pull-to-refresh.
//!
//! # Architecture
//!
//! The widget is split along three seams:
//!
//! 1. **Reducer**: `refreshable_core` turns offset samples into phase
//!    transitions and effect descriptions, with no side effects of its own.
//!
//! 2. **Ports**: haptic feedback and the refresh action are injected, so the
//!    container runs the same on hosts with and without haptics and in tests.
//!
//! 3. **Presentation**: springs from `refreshable_animation` smooth the pull
//!    "click" and the return to idle; everything else is derived per sample.
//!
//! # Example
//!
//! ```ignore
//! use refreshable_widgets::prelude::*;
//!
//! let mut feed = refreshable(posts)
//!     .on_refresh(|| async { Ok(()) })
//!     .build();
//!
//! // Scroll callback from the host framework
//! let _ = feed.handle_offset(offset);
//!
//! // Each frame
//! feed.update(dt);
//! let layout = feed.build();
//! ```

pub mod animator;
pub mod error;
pub mod haptics;
pub mod layout;
pub mod refreshable;
pub mod scroll;

pub use animator::{PresentedSpinner, SpinnerAnimator, SpinnerConfig};
pub use error::{RefreshError, Result};
pub use haptics::{HapticFeedback, ImpactStyle, NoHaptics};
pub use layout::{RefreshLayout, SpinnerLayout};
pub use refreshable::{
    refreshable, RefreshFuture, RefreshHandle, RefreshableScroll, RefreshableScrollBuilder,
};
pub use scroll::{ScrollAxis, ScrollConfig};

pub mod prelude {
    pub use crate::{
        refreshable, HapticFeedback, ImpactStyle, NoHaptics, RefreshError, RefreshHandle,
        RefreshLayout, RefreshableScroll, ScrollAxis, ScrollConfig, SpinnerConfig,
    };
    pub use refreshable_core::{RefreshConfig, RefreshPhase, RefreshVisuals};
}
