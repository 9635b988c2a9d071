//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::page_shell::PageShell;
use crate::config::SiteConfig;
use crate::pages::{
    demo::DemoPage, docs::DocsPage, domain::DomainPage, home::HomePage, not_found::NotFoundPage,
    performance::PerformancePage, portfolio::PortfolioPage, project::ProjectPage, resume::ResumePage,
};
use crate::state::nav::Project;
use crate::state::theme::{BrowserStorage, provide_theme};

/// Exact-match paths served by the router (domain pages excluded).
pub const ROUTE_PATHS: [&str; 8] = [
    "/",
    "/resume",
    "/portfolio",
    "/portfolio/petory",
    "/portfolio/linkup",
    "/demo",
    "/performance",
    "/docs",
];

/// Sets `data-theme` from `localStorage` before first paint so the stylesheet
/// never flashes the wrong palette while the WASM bundle loads.
pub const THEME_BOOT_SCRIPT: &str = "try{var t=localStorage.getItem('theme');\
document.documentElement.setAttribute('data-theme',t==='dark'?'dark':'light');}\
catch(e){document.documentElement.setAttribute('data-theme','light');}";

/// External diagram renderer; loaded as-is and driven from `util::dom`.
pub const DIAGRAM_RENDERER_SRC: &str = "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.min.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=THEME_BOOT_SCRIPT></script>
                <script src=DIAGRAM_RENDERER_SRC defer></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme store and sets up client-side routing inside the
/// persistent page shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = provide_theme(BrowserStorage);

    // Effects only run in the browser, after hydration; the server always
    // renders the light theme.
    Effect::new(move || {
        theme.init();
    });

    let site = SiteConfig::default();

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=site.title/>

        <Router>
            <PageShell>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("resume") view=ResumePage/>
                    <Route path=StaticSegment("portfolio") view=PortfolioPage/>
                    <Route
                        path=(StaticSegment("portfolio"), StaticSegment("petory"))
                        view=|| view! { <ProjectPage project=Project::Petory/> }
                    />
                    <Route
                        path=(StaticSegment("portfolio"), StaticSegment("linkup"))
                        view=|| view! { <ProjectPage project=Project::Linkup/> }
                    />
                    <Route path=StaticSegment("demo") view=DemoPage/>
                    <Route path=(StaticSegment("domains"), ParamSegment("slug")) view=DomainPage/>
                    <Route path=StaticSegment("performance") view=PerformancePage/>
                    <Route path=StaticSegment("docs") view=DocsPage/>
                </Routes>
            </PageShell>
        </Router>
    }
}
