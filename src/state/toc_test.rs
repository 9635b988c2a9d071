use super::*;

const ANCHORS: [SectionAnchor; 3] = [
    SectionAnchor::new("overview", "개요"),
    SectionAnchor::new("architecture", "아키텍처"),
    SectionAnchor::new("results", "성과"),
];

fn tracker() -> TocTracker {
    TocTracker::new(ANCHORS, TocConfig::default())
}

// =============================================================
// active_index
// =============================================================

#[test]
fn active_index_empty_is_none() {
    assert_eq!(active_index(&[], 100.0), None);
}

#[test]
fn active_index_above_first_anchor_defaults_to_first() {
    assert_eq!(active_index(&[250.0, 700.0], 100.0), Some(0));
}

#[test]
fn active_index_takes_last_qualifying_anchor() {
    assert_eq!(active_index(&[-600.0, -100.0, 600.0], 100.0), Some(1));
}

#[test]
fn active_index_line_is_inclusive() {
    assert_eq!(active_index(&[-50.0, 100.0, 300.0], 100.0), Some(1));
}

#[test]
fn identical_offsets_resolve_to_later_anchor() {
    assert_eq!(active_index(&[-20.0, 40.0, 40.0, 900.0], 100.0), Some(2));
}

// =============================================================
// TocTracker
// =============================================================

#[test]
fn middle_anchor_active_between_sections() {
    let tops = viewport_tops(&[0.0, 500.0, 1200.0], 600.0);
    assert_eq!(tracker().active_id(&tops), Some("architecture"));
}

#[test]
fn first_anchor_active_at_page_top() {
    let tops = viewport_tops(&[300.0, 800.0, 1200.0], 0.0);
    assert_eq!(tracker().active_id(&tops), Some("overview"));
}

#[test]
fn last_anchor_active_at_page_bottom() {
    let tops = viewport_tops(&[0.0, 500.0, 1200.0], 1500.0);
    assert_eq!(tracker().active_id(&tops), Some("results"));
}

#[test]
fn missing_measurements_count_as_below_viewport() {
    assert_eq!(tracker().active_id(&[-10.0]), Some("overview"));
}

#[test]
fn empty_tracker_has_no_active_section() {
    let empty = TocTracker::new(Vec::new(), TocConfig::default());
    assert!(empty.is_empty());
    assert_eq!(empty.initial_id(), None);
    assert_eq!(empty.active_id(&[0.0, 10.0]), None);
}

#[test]
fn initial_id_is_first_anchor() {
    assert_eq!(tracker().initial_id(), Some("overview"));
    assert_eq!(tracker().anchors().len(), 3);
}

#[test]
fn scroll_target_subtracts_padding() {
    let t = tracker();
    assert_eq!(t.scroll_target(1200.0), 1100.0);
    assert_eq!(t.scroll_target(40.0), 0.0);
}

#[test]
fn viewport_tops_shift_by_scroll() {
    assert_eq!(viewport_tops(&[0.0, 500.0], 200.0), vec![-200.0, 300.0]);
}
