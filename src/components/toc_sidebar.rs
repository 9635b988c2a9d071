//! Table-of-contents sidebar with scroll-spy highlighting.
//!
//! An empty anchor list renders nothing and installs no listener.

#[cfg(all(test, feature = "ssr"))]
#[path = "toc_sidebar_test.rs"]
mod toc_sidebar_test;

use leptos::ev;
use leptos::prelude::*;

use crate::config::TocConfig;
use crate::state::toc::{SectionAnchor, TocTracker};
use crate::util::dom;

#[component]
pub fn TocSidebar(anchors: Vec<SectionAnchor>) -> impl IntoView {
    let tracker = TocTracker::new(anchors, TocConfig::default());
    if tracker.is_empty() {
        return ().into_any();
    }

    let active = RwSignal::new(tracker.initial_id());
    let entries = tracker.anchors().to_vec();
    let tracker = StoredValue::new(tracker);

    let refresh = move || {
        let next = tracker.with_value(|t| {
            let tops: Vec<f64> = t
                .anchors()
                .iter()
                .map(|a| dom::element_viewport_top(a.id).unwrap_or(f64::INFINITY))
                .collect();
            t.active_id(&tops)
        });
        if active.get_untracked() != next {
            active.set(next);
        }
    };

    Effect::new(move || refresh());
    let on_scroll = window_event_listener(ev::scroll, move |_| refresh());
    on_cleanup(move || on_scroll.remove());

    let jump_to = move |id: &'static str| {
        if let Some(top) = dom::element_document_top(id) {
            dom::smooth_scroll_to(tracker.with_value(|t| t.scroll_target(top)));
        }
    };

    view! {
        <aside class="toc-sidebar">
            <p class="toc-sidebar__heading">"목차"</p>
            <ul class="toc-sidebar__list">
                {entries
                    .into_iter()
                    .map(|anchor| {
                        let href = format!("#{}", anchor.id);
                        view! {
                            <li>
                                <a
                                    href=href
                                    class="toc-sidebar__link"
                                    class:toc-sidebar__link--active=move || active.get() == Some(anchor.id)
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        jump_to(anchor.id);
                                    }
                                >
                                    {anchor.title}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </aside>
    }
    .into_any()
}
