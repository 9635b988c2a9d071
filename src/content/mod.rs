//! Static page content.
//!
//! Everything under this module is configuration data: prose authored as
//! Markdown, diagram definitions passed through untouched to the renderer,
//! and link tables. Nothing here is computed.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod docs;
pub mod domains;
pub mod performance;
pub mod projects;
pub mod resume;

use crate::state::toc::SectionAnchor;

/// One titled block of a long-form page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentSection {
    pub anchor: SectionAnchor,
    /// Markdown body.
    pub body: &'static str,
    /// Optional diagram definition rendered below the body.
    pub diagram: Option<&'static str>,
}

impl ContentSection {
    pub const fn new(id: &'static str, title: &'static str, body: &'static str) -> Self {
        Self {
            anchor: SectionAnchor::new(id, title),
            body,
            diagram: None,
        }
    }

    pub const fn with_diagram(self, diagram: &'static str) -> Self {
        Self {
            diagram: Some(diagram),
            ..self
        }
    }
}

/// Anchors for a page's sections, in document order.
pub fn anchors(sections: &[ContentSection]) -> Vec<SectionAnchor> {
    sections.iter().map(|s| s.anchor).collect()
}
