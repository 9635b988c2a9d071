//! Scroll-to-top / scroll-to-bottom floating buttons.
//!
//! Visibility is recomputed from viewport metrics on every scroll and
//! resize. Both listeners are attached when the component mounts and
//! removed in its cleanup.

#[cfg(all(test, feature = "ssr"))]
#[path = "floating_controls_test.rs"]
mod floating_controls_test;

use leptos::ev;
use leptos::prelude::*;

use crate::config::ScrollThresholds;
use crate::state::scroll::{ScrollMetrics, ScrollTarget, VisibilityState};
use crate::util::dom;
use crate::util::style::{InteractionState, button_style};

#[component]
pub fn FloatingControls() -> impl IntoView {
    let thresholds = ScrollThresholds::default();
    let metrics = RwSignal::new(ScrollMetrics::default());
    let visibility = RwSignal::new(VisibilityState::default());

    let refresh = move || {
        if let Some(latest) = dom::read_scroll_metrics() {
            metrics.set(latest);
            let next = VisibilityState::from_metrics(&latest, &thresholds);
            if visibility.get_untracked() != next {
                visibility.set(next);
            }
        }
    };

    Effect::new(move || refresh());
    let on_scroll = window_event_listener(ev::scroll, move |_| refresh());
    let on_resize = window_event_listener(ev::resize, move |_| refresh());
    log::trace!("floating controls: scroll listeners attached");
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
        log::trace!("floating controls: scroll listeners detached");
    });

    view! {
        <div class="floating-controls">
            <Show when=move || visibility.get().shows_scroll_to_top()>
                <FloatingButton target=ScrollTarget::Top metrics/>
            </Show>
            <Show when=move || visibility.get().shows_scroll_to_bottom()>
                <FloatingButton target=ScrollTarget::Bottom metrics/>
            </Show>
        </div>
    }
}

#[component]
fn FloatingButton(target: ScrollTarget, metrics: RwSignal<ScrollMetrics>) -> impl IntoView {
    let interaction = RwSignal::new(InteractionState::Default);

    let style = move || button_style(interaction.get());
    let on_click = move |_| {
        let latest = dom::read_scroll_metrics().unwrap_or_else(|| metrics.get_untracked());
        dom::smooth_scroll_to(target.offset(&latest));
    };

    view! {
        <button
            class="floating-controls__button"
            title=target.label()
            aria-label=target.label()
            style=style
            on:click=on_click
            on:mouseenter=move |_| interaction.set(InteractionState::Hovered)
            on:mouseleave=move |_| interaction.set(InteractionState::Default)
            on:mousedown=move |_| interaction.set(InteractionState::Active)
            on:mouseup=move |_| interaction.set(InteractionState::Hovered)
        >
            {target.glyph()}
        </button>
    }
}
