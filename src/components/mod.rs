//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `page_shell` is the persistent chrome; the rest are building blocks the
//! routed pages compose. Colors come from stylesheet variables keyed by
//! `<html data-theme>`; pointer interaction lives in local signals.

pub mod content_sections;
pub mod diagram;
pub mod doc_links;
pub mod floating_controls;
pub mod markdown_block;
pub mod nav_bar;
pub mod page_shell;
pub mod theme_toggle;
pub mod toc_sidebar;
