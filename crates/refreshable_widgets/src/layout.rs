//! Render description handed to the host framework each frame

use crate::scroll::ScrollConfig;

/// Spinner overlay, drawn above the scrolling content at the top edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerLayout {
    /// False when pull-to-refresh is disabled; the overlay should not be drawn
    pub visible: bool,
    /// Vertical translation of the overlay
    pub offset_y: f32,
    /// Overlay opacity in `0.0..=1.0`
    pub opacity: f32,
    /// Uniform scale applied around the spinner center
    pub scale: f32,
    /// Padding above and below the spinner
    pub padding_vertical: f32,
}

/// Everything the host needs to draw the container
///
/// The host stacks `spinner` over a scroll view configured by `scroll`,
/// whose content is a vertical stack of a spacer of `spacer_height`
/// followed by `content`.
#[derive(Debug)]
pub struct RefreshLayout<'a, C> {
    pub content: &'a C,
    pub spinner: SpinnerLayout,
    pub spacer_height: f32,
    pub scroll: ScrollConfig,
}
