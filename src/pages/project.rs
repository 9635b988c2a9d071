//! Project detail page (Petory, LinkUp).

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::content_sections::ArticleWithToc;
use crate::config::SiteConfig;
use crate::content::projects::writeup;
use crate::state::nav::Project;

#[component]
pub fn ProjectPage(project: Project) -> impl IntoView {
    let site = SiteConfig::default();
    let writeup = writeup(project);

    view! {
        <Title text=site.page_title(project.title())/>
        <div class="project-page">
            <header class="project-page__header">
                <h1 class="page-title">{project.title()}</h1>
                <p>{writeup.summary}</p>
                <p class="project-page__period">{writeup.period}</p>
                <ul class="tag-list">
                    {writeup.stack.iter().map(|tech| view! { <li class="tag">{*tech}</li> }).collect::<Vec<_>>()}
                </ul>
            </header>
            <ArticleWithToc sections=writeup.sections/>
        </div>
    }
}
