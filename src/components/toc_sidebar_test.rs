use super::*;
use crate::components::ssr_render::render;

#[test]
fn empty_anchor_list_renders_no_sidebar() {
    let html = render(|| view! { <TocSidebar anchors=Vec::new()/> });
    assert!(!html.contains("<aside"), "{html}");
    assert!(!html.contains("toc-sidebar"), "{html}");
}

#[test]
fn first_anchor_is_active_before_any_scroll() {
    let anchors = vec![
        SectionAnchor::new("overview", "개요"),
        SectionAnchor::new("architecture", "아키텍처"),
        SectionAnchor::new("erd", "ERD"),
    ];
    let html = render(move || view! { <TocSidebar anchors/> });

    assert!(html.contains("<aside class=\"toc-sidebar\">"), "{html}");
    assert_eq!(html.matches("toc-sidebar__link--active").count(), 1, "{html}");
    let active = html.find("toc-sidebar__link--active").unwrap();
    let overview = html.find("href=\"#overview\"").unwrap();
    let architecture = html.find("href=\"#architecture\"").unwrap();
    assert!(overview < active && active < architecture, "{html}");
}

#[test]
fn links_follow_anchor_order() {
    let anchors = vec![SectionAnchor::new("b", "둘"), SectionAnchor::new("a", "하나")];
    let html = render(move || view! { <TocSidebar anchors/> });
    assert!(html.find("href=\"#b\"").unwrap() < html.find("href=\"#a\"").unwrap());
}
