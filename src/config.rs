//! Presentation constants and site metadata.
//!
//! The scroll thresholds have no derivation behind them; they are kept at
//! their literal values so floating controls and section highlighting
//! behave the same on every page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Scroll distance after which the floating controls appear.
pub const SCROLL_SHOW_THRESHOLD_PX: f64 = 300.0;

/// Distance from the document end that counts as "near the bottom".
pub const NEAR_BOTTOM_MARGIN_PX: f64 = 100.0;

/// Viewport offset of the section activation line; matches the stylesheet's
/// `html { scroll-padding-top }` so a clicked heading lands exactly on the line.
pub const TOC_ACTIVATION_LINE_PX: f64 = 100.0;

/// Thresholds for the floating scroll controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub show_after_px: f64,
    pub near_bottom_margin_px: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            show_after_px: SCROLL_SHOW_THRESHOLD_PX,
            near_bottom_margin_px: NEAR_BOTTOM_MARGIN_PX,
        }
    }
}

/// Table-of-contents tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TocConfig {
    /// Anchors whose viewport top is at or above this line count as passed.
    pub activation_line_px: f64,
    /// Upward offset applied when scrolling to a clicked section.
    pub scroll_padding_px: f64,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            activation_line_px: TOC_ACTIVATION_LINE_PX,
            scroll_padding_px: TOC_ACTIVATION_LINE_PX,
        }
    }
}

/// Static site metadata shown in the header and document title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: &'static str,
    pub owner: &'static str,
    pub tagline: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Backend Portfolio",
            owner: "김개발",
            tagline: "Spring Boot · JPA · MySQL · Redis 기반 백엔드 개발자",
        }
    }
}

impl SiteConfig {
    /// Document title for a page, e.g. `"이력서 | Backend Portfolio"`.
    pub fn page_title(&self, page: &str) -> String {
        if page.is_empty() {
            self.title.to_owned()
        } else {
            format!("{page} | {}", self.title)
        }
    }
}
