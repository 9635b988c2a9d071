use super::*;

fn visibility(offset: f64, viewport: f64, document: f64) -> VisibilityState {
    VisibilityState::from_metrics(&ScrollMetrics::new(offset, viewport, document), &ScrollThresholds::default())
}

// =============================================================
// Thresholds
// =============================================================

#[test]
fn at_top_nothing_renders() {
    let state = visibility(0.0, 800.0, 2000.0);
    assert!(!state.show_floating_control);
    assert!(!state.shows_scroll_to_top());
    assert!(!state.shows_scroll_to_bottom());
}

#[test]
fn exactly_at_threshold_stays_hidden() {
    let state = visibility(300.0, 800.0, 2000.0);
    assert!(!state.show_floating_control);
}

#[test]
fn just_past_threshold_shows_only_bottom_control() {
    let state = visibility(301.0, 800.0, 2000.0);
    assert!(state.show_floating_control);
    // 301 + 800 = 1101 < 1900
    assert!(state.is_near_bottom);
    assert!(!state.shows_scroll_to_top());
    assert!(state.shows_scroll_to_bottom());
}

#[test]
fn deep_scroll_shows_both_controls() {
    let state = visibility(1250.0, 800.0, 2000.0);
    // 1250 + 800 = 2050, not < 1900
    assert!(!state.is_near_bottom);
    assert!(state.shows_scroll_to_top());
    assert!(state.shows_scroll_to_bottom());
}

#[test]
fn near_bottom_boundary_is_strict() {
    // 1100 + 800 = 1900, not < 1900
    let state = visibility(1100.0, 800.0, 2000.0);
    assert!(!state.is_near_bottom);
    let state = visibility(1099.0, 800.0, 2000.0);
    assert!(state.is_near_bottom);
}

#[test]
fn custom_thresholds_are_honoured() {
    let thresholds = ScrollThresholds {
        show_after_px: 10.0,
        near_bottom_margin_px: 0.0,
    };
    let metrics = ScrollMetrics::new(11.0, 500.0, 511.0);
    let state = VisibilityState::from_metrics(&metrics, &thresholds);
    assert!(state.show_floating_control);
    assert!(!state.is_near_bottom);
}

#[test]
fn negative_offset_is_clamped() {
    let metrics = ScrollMetrics::new(-40.0, 800.0, 2000.0);
    assert_eq!(metrics.offset_from_top, 0.0);
}

// =============================================================
// ScrollTarget
// =============================================================

#[test]
fn scroll_targets_resolve_to_document_edges() {
    let metrics = ScrollMetrics::new(700.0, 800.0, 2400.0);
    assert_eq!(ScrollTarget::Top.offset(&metrics), 0.0);
    assert_eq!(ScrollTarget::Bottom.offset(&metrics), 2400.0);
}

#[test]
fn scroll_targets_have_distinct_labels() {
    assert_ne!(ScrollTarget::Top.label(), ScrollTarget::Bottom.label());
    assert_ne!(ScrollTarget::Top.glyph(), ScrollTarget::Bottom.glyph());
}
