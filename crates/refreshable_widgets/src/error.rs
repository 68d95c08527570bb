//! Refresh error types

use thiserror::Error;

/// Errors surfaced through a [`RefreshHandle`](crate::RefreshHandle)
#[derive(Error, Debug)]
pub enum RefreshError {
    /// The refresh action reported a failure
    #[error("Refresh failed: {0}")]
    Action(String),

    /// The refresh action failed with an underlying error
    #[error("Refresh failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The spawned refresh task panicked or was aborted
    #[error("Refresh task did not complete: {0}")]
    TaskFailed(String),
}

impl RefreshError {
    /// Create an action failure from a message
    pub fn action(message: impl Into<String>) -> Self {
        RefreshError::Action(message.into())
    }

    /// Wrap an arbitrary error raised by the refresh action
    pub fn from_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        RefreshError::Source(Box::new(error))
    }
}

/// Result type for refresh actions
pub type Result<T> = std::result::Result<T, RefreshError>;
