//! Persistent chrome wrapped around every routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside the router. Owns the header (brand, navigation,
//! theme toggle), the content area, and the floating scroll controls, and
//! keeps rendered diagrams in step with the theme and the current route.

#[cfg(all(test, feature = "ssr"))]
#[path = "page_shell_test.rs"]
mod page_shell_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::floating_controls::FloatingControls;
use crate::components::nav_bar::NavBar;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::SiteConfig;
use crate::state::theme::use_theme;
use crate::util::dom;

/// Header, content area, and floating controls around `children`.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    let theme = use_theme();
    let location = use_location();
    let site = SiteConfig::default();

    // Re-render diagrams in the new theme; detached when the shell unmounts.
    let subscription = theme.subscribe(dom::render_diagrams);
    on_cleanup(move || {
        if let Some(id) = subscription {
            theme.unsubscribe(id);
        }
    });

    // Render diagrams on the page the router just swapped in.
    Effect::new(move || {
        let _ = location.pathname.get();
        dom::render_diagrams(theme.mode_untracked());
    });

    view! {
        <div class="page-shell">
            <header class="page-shell__header">
                <a href="/" class="page-shell__brand" title=site.tagline>
                    {site.owner}
                </a>
                <NavBar/>
                <span class="page-shell__spacer"></span>
                <ThemeToggle/>
            </header>
            <main class="page-shell__content">{children()}</main>
            <FloatingControls/>
        </div>
    }
}
