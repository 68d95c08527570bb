//! Scroll container with pull-to-refresh
//!
//! `RefreshableScroll` wraps host scroll content and provides:
//! - A phase machine driven by content offset samples (Idle, Pulling, Refreshing)
//! - A spinner overlay that slides and fades in while pulling
//! - A single in-flight async refresh action per pull-release cycle
//! - Spring animations for the pull "click" and the return to idle
//!
//! The host forwards every offset report to [`RefreshableScroll::handle_offset`],
//! ticks [`RefreshableScroll::update`] each frame and draws the
//! [`RefreshLayout`] returned by [`RefreshableScroll::build`].
//!
//! Refresh actions are spawned with `tokio::task::spawn_local`, so offset
//! handling must run inside a `tokio::task::LocalSet`.
//!
//! # Example
//!
//! ```rust,ignore
//! use refreshable_widgets::prelude::*;
//!
//! let mut list = refreshable(items)
//!     .shows_indicators(false)
//!     .on_refresh(|| async {
//!         reload().await.map_err(RefreshError::from_error)
//!     })
//!     .build();
//!
//! // From the host's scroll callback
//! if let Some(handle) = list.handle_offset(offset) {
//!     tokio::task::spawn_local(async move {
//!         if let Err(err) = handle.await {
//!             show_toast(err.to_string());
//!         }
//!     });
//! }
//! ```

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};
use std::task::{Context, Poll};

use refreshable_core::{
    reduce, Reduction, RefreshConfig, RefreshEffect, RefreshEvent, RefreshPhase, RefreshState,
    RefreshVisuals,
};
use tokio::task::JoinHandle;

use crate::animator::{PresentedSpinner, SpinnerAnimator, SpinnerConfig};
use crate::error::{RefreshError, Result};
use crate::haptics::{HapticFeedback, NoHaptics};
use crate::layout::{RefreshLayout, SpinnerLayout};
use crate::scroll::{ScrollAxis, ScrollConfig};

/// Boxed future returned by a refresh action
pub type RefreshFuture = Pin<Box<dyn Future<Output = Result<()>>>>;

type RefreshAction = Rc<dyn Fn() -> RefreshFuture>;

/// State shared between the container and its in-flight refresh task
struct Inner {
    state: RefreshState,
    config: RefreshConfig,
    animator: SpinnerAnimator,
    /// Cleared on unmount; deferred updates check it before touching state
    mounted: bool,
}

impl Inner {
    /// Reduce an event and apply the effects that only touch presentation
    fn dispatch(&mut self, event: RefreshEvent) -> Reduction {
        let reduction = reduce(self.state, event, &self.config);
        self.state = reduction.state;

        let visuals = self.state.visuals(&self.config);
        let mut animated = false;
        for effect in &reduction.effects {
            match effect {
                RefreshEffect::BumpSpinner => {
                    self.animator.bump(self.config.spinner_bump_scale);
                }
                RefreshEffect::AnimatePhaseChange => {
                    self.animator.animate_to(visuals);
                    animated = true;
                }
                RefreshEffect::Haptic | RefreshEffect::InvokeRefresh => {}
            }
        }
        if !animated {
            self.animator.follow(visuals);
        }

        reduction
    }
}

/// Settles the refresh when dropped
///
/// Lives inside the spawned task so the phase returns to `Idle` whether the
/// action succeeds, fails, panics, or the task is dropped unpolled.
struct SettleOnDrop {
    inner: Weak<RefCell<Inner>>,
}

impl Drop for SettleOnDrop {
    fn drop(&mut self) {
        let Some(inner) = self.inner.upgrade() else {
            tracing::debug!("Refresh settled after its container was dropped");
            return;
        };
        let Ok(mut inner) = inner.try_borrow_mut() else {
            tracing::warn!("Refresh settled while its container was borrowed; state not updated");
            return;
        };
        if !inner.mounted {
            tracing::debug!("Refresh settled after unmount; state left untouched");
            return;
        }
        inner.dispatch(RefreshEvent::ActionSettled);
    }
}

/// Completion of one refresh action
///
/// Resolves to the action's own result. Dropping the handle does not cancel
/// the refresh.
#[derive(Debug)]
pub struct RefreshHandle {
    task: JoinHandle<Result<()>>,
}

impl RefreshHandle {
    /// Check if the action has finished
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Future for RefreshHandle {
    type Output = Result<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task).poll(cx).map(|joined| {
            joined.unwrap_or_else(|err| Err(RefreshError::TaskFailed(err.to_string())))
        })
    }
}

/// Scroll container with pull-to-refresh
pub struct RefreshableScroll<C> {
    content: C,
    scroll: ScrollConfig,
    spinner: SpinnerConfig,
    action: Option<RefreshAction>,
    haptics: Box<dyn HapticFeedback>,
    inner: Rc<RefCell<Inner>>,
}

impl<C> RefreshableScroll<C> {
    /// Start building a container around `content`
    pub fn builder(content: C) -> RefreshableScrollBuilder<C> {
        refreshable(content)
    }

    /// Handle a content offset reported by the host scroll container
    ///
    /// Returns a handle on the sample that starts a refresh.
    ///
    /// # Panics
    ///
    /// Starting a refresh panics when called outside a `tokio::task::LocalSet`.
    pub fn handle_offset(&mut self, offset: f32) -> Option<RefreshHandle> {
        let reduction = {
            let mut inner = self.inner.borrow_mut();
            if !inner.mounted {
                tracing::trace!("Ignoring scroll offset {:.1} after unmount", offset);
                return None;
            }

            tracing::trace!("Scroll offset {:.1}", offset);

            if self.action.is_none() {
                if offset.is_finite() {
                    inner.state = inner.state.with_offset(offset);
                }
                return None;
            }

            inner.dispatch(RefreshEvent::OffsetChanged(offset))
        };

        let mut handle = None;
        for effect in reduction.effects {
            match effect {
                RefreshEffect::Haptic => {
                    tracing::trace!("Haptic impact ({:?})", self.haptics.style());
                    self.haptics.impact_occurred();
                }
                RefreshEffect::InvokeRefresh => handle = self.spawn_refresh(),
                RefreshEffect::BumpSpinner | RefreshEffect::AnimatePhaseChange => {}
            }
        }
        handle
    }

    fn spawn_refresh(&self) -> Option<RefreshHandle> {
        let action = self.action.as_ref()?;
        let guard = SettleOnDrop {
            inner: Rc::downgrade(&self.inner),
        };

        tracing::debug!("Starting refresh action");
        let future = action();
        let task = tokio::task::spawn_local(async move {
            let result = future.await;
            match &result {
                Ok(()) => tracing::debug!("Refresh action completed"),
                Err(err) => tracing::warn!("Refresh action failed: {}", err),
            }
            drop(guard);
            result
        });

        Some(RefreshHandle { task })
    }

    /// Advance animations by `dt` seconds; returns true while anything moves
    pub fn update(&mut self, dt: f32) -> bool {
        self.inner.borrow_mut().animator.update(dt)
    }

    /// Describe the container for this frame
    pub fn build(&self) -> RefreshLayout<'_, C> {
        let enabled = self.is_enabled();
        let presented = self.inner.borrow().animator.presented();

        RefreshLayout {
            content: &self.content,
            spinner: SpinnerLayout {
                visible: enabled,
                offset_y: presented.offset_y,
                opacity: if enabled { presented.opacity } else { 0.0 },
                scale: presented.scale,
                padding_vertical: self.spinner.padding_vertical,
            },
            spacer_height: if enabled {
                presented.spacer_height
            } else {
                0.0
            },
            scroll: self.scroll,
        }
    }

    /// Stop reacting to offsets and completions
    ///
    /// An in-flight action keeps running to completion, but its settlement no
    /// longer touches this container.
    pub fn unmount(&mut self) {
        let mut inner = self.inner.borrow_mut();
        if inner.mounted {
            tracing::debug!(
                "Unmounting refreshable scroll in phase {:?}",
                inner.state.phase()
            );
            inner.mounted = false;
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().mounted
    }

    /// Whether a refresh action was supplied
    pub fn is_enabled(&self) -> bool {
        self.action.is_some()
    }

    pub fn phase(&self) -> RefreshPhase {
        self.inner.borrow().state.phase()
    }

    pub fn is_refreshing(&self) -> bool {
        self.phase().is_refreshing()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.inner.borrow().state.scroll_offset()
    }

    /// Derived visual targets for the current state
    pub fn visuals(&self) -> RefreshVisuals {
        let inner = self.inner.borrow();
        if self.is_enabled() {
            inner.state.visuals(&inner.config)
        } else {
            RefreshVisuals::hidden(&inner.config)
        }
    }

    /// Spinner values as presented this frame, including running animations
    pub fn presented(&self) -> PresentedSpinner {
        self.inner.borrow().animator.presented()
    }

    pub fn config(&self) -> RefreshConfig {
        self.inner.borrow().config
    }

    pub fn scroll_config(&self) -> &ScrollConfig {
        &self.scroll
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }
}

impl<C> Drop for RefreshableScroll<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Create a refreshable scroll container around `content`
pub fn refreshable<C>(content: C) -> RefreshableScrollBuilder<C> {
    RefreshableScrollBuilder {
        content,
        scroll: ScrollConfig::default(),
        refresh: RefreshConfig::default(),
        spinner: SpinnerConfig::default(),
        action: None,
        haptics: None,
    }
}

/// Builder for creating refreshable scroll containers
pub struct RefreshableScrollBuilder<C> {
    content: C,
    scroll: ScrollConfig,
    refresh: RefreshConfig,
    spinner: SpinnerConfig,
    action: Option<RefreshAction>,
    haptics: Option<Box<dyn HapticFeedback>>,
}

impl<C> RefreshableScrollBuilder<C> {
    /// Set the scroll axis
    pub fn axis(mut self, axis: ScrollAxis) -> Self {
        self.scroll.axis = axis;
        self
    }

    /// Set whether native scroll indicators are shown
    pub fn shows_indicators(mut self, shows: bool) -> Self {
        self.scroll.shows_indicators = shows;
        self
    }

    /// Replace the whole scroll configuration
    pub fn scroll_config(mut self, config: ScrollConfig) -> Self {
        self.scroll = config;
        self
    }

    /// Set the gesture thresholds
    pub fn config(mut self, config: RefreshConfig) -> Self {
        self.refresh = config;
        self
    }

    /// Set the spinner appearance
    pub fn spinner(mut self, config: SpinnerConfig) -> Self {
        self.spinner = config;
        self
    }

    /// Set the refresh action; without one the container is a plain scroll view
    pub fn on_refresh<F, Fut>(mut self, action: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<()>> + 'static,
    {
        self.action = Some(Rc::new(move || -> RefreshFuture { Box::pin(action()) }));
        self
    }

    /// Set the haptic feedback generator
    pub fn haptics<H: HapticFeedback + 'static>(mut self, haptics: H) -> Self {
        self.haptics = Some(Box::new(haptics));
        self
    }

    /// Build the container, preparing the haptic generator once
    pub fn build(self) -> RefreshableScroll<C> {
        let mut haptics = self
            .haptics
            .unwrap_or_else(|| Box::new(NoHaptics));
        haptics.prepare();

        let state = RefreshState::new();
        let initial = if self.action.is_some() {
            state.visuals(&self.refresh)
        } else {
            RefreshVisuals::hidden(&self.refresh)
        };

        tracing::debug!(
            "Building refreshable scroll: axis={:?}, refresh enabled={}",
            self.scroll.axis,
            self.action.is_some()
        );

        RefreshableScroll {
            content: self.content,
            scroll: self.scroll,
            spinner: self.spinner,
            action: self.action,
            haptics,
            inner: Rc::new(RefCell::new(Inner {
                state,
                config: self.refresh,
                animator: SpinnerAnimator::new(&self.spinner, &self.refresh, initial),
                mounted: true,
            })),
        }
    }
}
