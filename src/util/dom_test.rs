#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn metrics_are_absent_outside_browser() {
    assert_eq!(read_scroll_metrics(), None);
}

#[test]
fn element_measurements_are_absent_outside_browser() {
    assert_eq!(element_viewport_top("overview"), None);
    assert_eq!(element_document_top("overview"), None);
}

#[test]
fn side_effects_are_noops_but_callable() {
    apply_theme_attribute(ThemeMode::Dark);
    smooth_scroll_to(420.0);
    render_diagrams(ThemeMode::Light);
}

#[test]
fn diagram_theme_follows_mode() {
    assert_eq!(diagram_theme(ThemeMode::Light), "default");
    assert_eq!(diagram_theme(ThemeMode::Dark), "dark");
}
