//! Events consumed by the refresh reducer

/// An input to the refresh state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RefreshEvent {
    /// The host scroll container reported a new content offset
    ///
    /// Negative values mean the content is pulled down past its top edge.
    OffsetChanged(f32),
    /// The in-flight refresh action finished, successfully or not
    ActionSettled,
}

impl RefreshEvent {
    /// The offset carried by this event, if any
    pub fn offset(&self) -> Option<f32> {
        match self {
            RefreshEvent::OffsetChanged(offset) => Some(*offset),
            RefreshEvent::ActionSettled => None,
        }
    }
}
