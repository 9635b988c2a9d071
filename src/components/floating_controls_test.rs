use super::*;
use crate::components::ssr_render::render;

#[test]
fn no_button_renders_at_rest() {
    let html = render(|| view! { <FloatingControls/> });
    assert!(html.contains("class=\"floating-controls\""), "{html}");
    assert!(!html.contains("floating-controls__button"), "{html}");
    assert!(!html.contains(ScrollTarget::Top.label()), "{html}");
    assert!(!html.contains(ScrollTarget::Bottom.label()), "{html}");
}
