//! Light/dark toggle button.
//!
//! Both icons are rendered; the stylesheet hides the one that does not match
//! `<html data-theme>`, so the button is right before hydration too.

#[cfg(all(test, feature = "ssr"))]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::state::theme::use_theme;
use crate::util::style::{InteractionState, button_style};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let interaction = RwSignal::new(InteractionState::Default);

    let style = move || button_style(interaction.get());

    view! {
        <button
            class="theme-toggle"
            title="테마 전환"
            style=style
            on:click=move |_| {
                theme.toggle();
            }
            on:mouseenter=move |_| interaction.set(InteractionState::Hovered)
            on:mouseleave=move |_| interaction.set(InteractionState::Default)
        >
            <span class="theme-toggle__icon theme-toggle__icon--to-dark" aria-hidden="true">"☾"</span>
            <span class="theme-toggle__icon theme-toggle__icon--to-light" aria-hidden="true">"☀"</span>
        </button>
    }
}
