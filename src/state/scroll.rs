//! Floating scroll-control visibility derived from viewport metrics.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollThresholds;

/// Snapshot of the viewport taken inside one scroll/resize handler.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset_from_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset_from_top: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            offset_from_top: offset_from_top.max(0.0),
            viewport_height,
            document_height,
        }
    }
}

/// Derived visibility flags for the floating controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    pub show_floating_control: bool,
    pub is_near_bottom: bool,
}

impl VisibilityState {
    pub fn from_metrics(metrics: &ScrollMetrics, thresholds: &ScrollThresholds) -> Self {
        let show_floating_control = metrics.offset_from_top > thresholds.show_after_px;
        // True while there is still more than the margin left to scroll.
        let is_near_bottom = metrics.offset_from_top + metrics.viewport_height
            < metrics.document_height - thresholds.near_bottom_margin_px;
        Self {
            show_floating_control,
            is_near_bottom,
        }
    }

    pub fn shows_scroll_to_top(self) -> bool {
        self.show_floating_control && !self.is_near_bottom
    }

    pub fn shows_scroll_to_bottom(self) -> bool {
        self.show_floating_control
    }
}

/// Destination of a floating-control click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Bottom,
}

impl ScrollTarget {
    /// Viewport offset the smooth scroll should end at.
    pub fn offset(self, metrics: &ScrollMetrics) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Bottom => metrics.document_height,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "맨 위로",
            Self::Bottom => "맨 아래로",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Top => "\u{2191}",
            Self::Bottom => "\u{2193}",
        }
    }
}
