//! Header navigation driven by the current route.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::nav::{LinkKind, LinkState, NavLink, nav_links, select_variant};
use crate::util::style::{InteractionState, link_style};

/// Link set for the current path.
#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();

    let links = Memo::new(move |_| {
        let path = location.pathname.get();
        let variant = select_variant(&path);
        nav_links(&variant, &path)
    });

    view! {
        <nav class="nav-bar">
            {move || {
                links
                    .get()
                    .into_iter()
                    .map(|link| view! { <NavItem link/> })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}

#[component]
fn NavItem(link: NavLink) -> impl IntoView {
    let interaction = RwSignal::new(InteractionState::Default);

    let style = move || link_style(link.state, interaction.get());
    let current = (link.state == LinkState::Active).then_some("page");

    view! {
        <a
            href=link.href
            class="nav-bar__link"
            class:nav-bar__link--back=link.kind == LinkKind::Back
            class:nav-bar__link--domain=link.kind == LinkKind::Domain
            aria-current=current
            style=style
            on:mouseenter=move |_| interaction.set(InteractionState::Hovered)
            on:mouseleave=move |_| interaction.set(InteractionState::Default)
            on:mousedown=move |_| interaction.set(InteractionState::Active)
            on:mouseup=move |_| interaction.set(InteractionState::Hovered)
        >
            {link.label}
        </a>
    }
}
