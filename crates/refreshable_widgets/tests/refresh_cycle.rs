//! Integration tests for the refresh action lifecycle
//!
//! These tests verify that:
//! - A pull-release cycle invokes the action exactly once
//! - Failures reach the awaiting caller while the container recovers
//! - A slow action serializes further pulls
//! - Dropping the container mid-refresh lets the action finish untouched

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use refreshable_widgets::prelude::*;
use tokio::sync::Notify;
use tokio::task::LocalSet;

fn counter() -> Rc<Cell<usize>> {
    Rc::new(Cell::new(0))
}

/// Test the concrete pull sequence from idle through refresh and back
#[tokio::test]
async fn test_pull_sequence_phases() {
    LocalSet::new()
        .run_until(async {
            let calls = counter();
            let calls_in_action = calls.clone();
            let mut list = refreshable((0..=100).collect::<Vec<u32>>())
                .on_refresh(move || {
                    calls_in_action.set(calls_in_action.get() + 1);
                    async { Ok::<(), RefreshError>(()) }
                })
                .build();

            let mut phases = vec![list.phase()];
            let mut handle = None;
            for offset in [-50.0, -120.0, -10.0, 0.0] {
                if let Some(started) = list.handle_offset(offset) {
                    handle = Some(started);
                }
                phases.push(list.phase());
            }

            assert_eq!(
                phases,
                vec![
                    RefreshPhase::Idle,
                    RefreshPhase::Idle,
                    RefreshPhase::Pulling,
                    RefreshPhase::Pulling,
                    RefreshPhase::Refreshing,
                ]
            );

            handle.expect("release starts a refresh").await.unwrap();
            assert_eq!(list.phase(), RefreshPhase::Idle);
            assert_eq!(calls.get(), 1);
        })
        .await;
}

/// Test that a failing action surfaces its error and still returns to idle
#[tokio::test]
async fn test_failed_refresh_recovers() {
    LocalSet::new()
        .run_until(async {
            let mut list = refreshable(())
                .on_refresh(|| async {
                    Err::<(), RefreshError>(RefreshError::action("network unreachable"))
                })
                .build();

            list.handle_offset(-140.0);
            let handle = list.handle_offset(0.0).expect("release starts a refresh");
            assert!(list.is_refreshing());

            let err = handle.await.unwrap_err();
            assert!(matches!(err, RefreshError::Action(ref msg) if msg == "network unreachable"));
            assert_eq!(list.phase(), RefreshPhase::Idle);

            // The next pull works normally
            list.handle_offset(-140.0);
            assert_eq!(list.phase(), RefreshPhase::Pulling);
        })
        .await;
}

/// Test that a panicking action is reported and does not wedge the container
#[tokio::test]
async fn test_panicking_refresh_recovers() {
    LocalSet::new()
        .run_until(async {
            let mut list = refreshable(())
                .on_refresh(|| async {
                    if true {
                        panic!("refresh exploded");
                    }
                    Ok::<(), RefreshError>(())
                })
                .build();

            list.handle_offset(-140.0);
            let handle = list.handle_offset(0.0).expect("release starts a refresh");

            let err = handle.await.unwrap_err();
            assert!(matches!(err, RefreshError::TaskFailed(_)));
            assert_eq!(list.phase(), RefreshPhase::Idle);
        })
        .await;
}

/// Test that pulls during a slow refresh never start a second action
#[tokio::test]
async fn test_slow_refresh_serializes_pulls() {
    LocalSet::new()
        .run_until(async {
            let calls = counter();
            let calls_in_action = calls.clone();
            let release = Rc::new(Notify::new());
            let release_in_action = release.clone();

            let mut list = refreshable(())
                .on_refresh(move || {
                    calls_in_action.set(calls_in_action.get() + 1);
                    let release = release_in_action.clone();
                    async move {
                        release.notified().await;
                        Ok::<(), RefreshError>(())
                    }
                })
                .build();

            list.handle_offset(-130.0);
            let handle = list.handle_offset(0.0).expect("release starts a refresh");

            // Let the action start and park
            tokio::task::yield_now().await;

            for offset in [-160.0, -20.0, 0.0, -300.0, 0.0] {
                assert!(list.handle_offset(offset).is_none());
                assert_eq!(list.phase(), RefreshPhase::Refreshing);
            }
            // Offset keeps updating for display while refreshing
            assert_eq!(list.scroll_offset(), 0.0);
            assert!(!handle.is_finished());
            assert_eq!(calls.get(), 1);

            release.notify_one();
            handle.await.unwrap();
            assert_eq!(list.phase(), RefreshPhase::Idle);
            assert_eq!(calls.get(), 1);
        })
        .await;
}

/// Test that an action that never settles keeps the container refreshing
#[tokio::test]
async fn test_pending_refresh_stays_refreshing() {
    LocalSet::new()
        .run_until(async {
            let mut list = refreshable(())
                .on_refresh(|| std::future::pending::<refreshable_widgets::Result<()>>())
                .build();

            list.handle_offset(-101.0);
            let handle = list.handle_offset(0.0).expect("release starts a refresh");

            tokio::time::sleep(Duration::from_millis(20)).await;
            assert!(list.is_refreshing());
            assert!(!handle.is_finished());
        })
        .await;
}

/// Test that dropping the container mid-refresh lets the action finish
#[tokio::test]
async fn test_drop_during_refresh_runs_action_to_completion() {
    LocalSet::new()
        .run_until(async {
            let finished = counter();
            let finished_in_action = finished.clone();
            let release = Rc::new(Notify::new());
            let release_in_action = release.clone();

            let mut list = refreshable(())
                .on_refresh(move || {
                    let release = release_in_action.clone();
                    let finished = finished_in_action.clone();
                    async move {
                        release.notified().await;
                        finished.set(finished.get() + 1);
                        Ok::<(), RefreshError>(())
                    }
                })
                .build();

            list.handle_offset(-150.0);
            let handle = list.handle_offset(0.0).expect("release starts a refresh");
            drop(list);

            release.notify_one();
            handle.await.unwrap();
            assert_eq!(finished.get(), 1);
        })
        .await;
}

/// Test that the return to idle animates the spacer closed
#[tokio::test]
async fn test_settle_animates_spacer() {
    LocalSet::new()
        .run_until(async {
            let mut list = refreshable(())
                .on_refresh(|| async { Ok::<(), RefreshError>(()) })
                .build();

            list.handle_offset(-150.0);
            let handle = list.handle_offset(0.0).expect("release starts a refresh");
            assert_eq!(list.build().spacer_height, 60.0);
            assert_eq!(list.build().spinner.opacity, 1.0);

            handle.await.unwrap();
            assert_eq!(list.phase(), RefreshPhase::Idle);
            // Target is already idle, presentation still shows the gap
            assert_eq!(list.visuals().spacer_height, 0.0);
            assert_eq!(list.build().spacer_height, 60.0);

            let mut frames = 0;
            while list.update(1.0 / 60.0) {
                frames += 1;
                assert!(frames < 600, "phase animation never settled");
            }
            assert!(frames > 1);
            assert_eq!(list.build().spacer_height, 0.0);
            assert_eq!(list.build().spinner.opacity, 0.0);
        })
        .await;
}
