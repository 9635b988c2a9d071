//! Table-of-contents scroll-spy.
//!
//! Anchors are kept in document order. The active section is the last
//! anchor whose top has crossed the activation line; above the first anchor
//! the first one stays active.

#[cfg(test)]
#[path = "toc_test.rs"]
mod toc_test;

use crate::config::TocConfig;

/// A heading the sidebar can jump to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionAnchor {
    pub id: &'static str,
    pub title: &'static str,
}

impl SectionAnchor {
    pub const fn new(id: &'static str, title: &'static str) -> Self {
        Self { id, title }
    }
}

/// Index of the active anchor given each anchor's viewport-relative top.
///
/// `None` only when `tops` is empty.
pub fn active_index(tops: &[f64], activation_line: f64) -> Option<usize> {
    if tops.is_empty() {
        return None;
    }
    let passed = tops.iter().rposition(|top| *top <= activation_line);
    Some(passed.unwrap_or(0))
}

/// Scroll-spy over one page's anchors.
#[derive(Clone, Debug, PartialEq)]
pub struct TocTracker {
    anchors: Vec<SectionAnchor>,
    config: TocConfig,
}

impl TocTracker {
    pub fn new(anchors: impl Into<Vec<SectionAnchor>>, config: TocConfig) -> Self {
        Self {
            anchors: anchors.into(),
            config,
        }
    }

    pub fn anchors(&self) -> &[SectionAnchor] {
        &self.anchors
    }

    /// An empty tracker renders nothing and listens to nothing.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Section shown when nothing has been measured yet.
    pub fn initial_id(&self) -> Option<&'static str> {
        self.anchors.first().map(|a| a.id)
    }

    /// Active section id for viewport-relative tops (one per anchor, same
    /// order). Missing measurements are treated as "below the viewport".
    pub fn active_id(&self, tops: &[f64]) -> Option<&'static str> {
        let tops: Vec<f64> = (0..self.anchors.len())
            .map(|i| tops.get(i).copied().unwrap_or(f64::INFINITY))
            .collect();
        active_index(&tops, self.config.activation_line_px).map(|i| self.anchors[i].id)
    }

    /// Document offset to scroll to so the heading sits under the fixed
    /// chrome instead of behind it.
    pub fn scroll_target(&self, anchor_document_top: f64) -> f64 {
        (anchor_document_top - self.config.scroll_padding_px).max(0.0)
    }
}

/// Convert document offsets to viewport-relative tops at `scroll_y`.
pub fn viewport_tops(document_tops: &[f64], scroll_y: f64) -> Vec<f64> {
    document_tops.iter().map(|top| top - scroll_y).collect()
}
