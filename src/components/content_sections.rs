//! Section list for long-form pages, optionally paired with a sidebar.

use leptos::prelude::*;

use crate::components::diagram::Diagram;
use crate::components::markdown_block::MarkdownBlock;
use crate::components::toc_sidebar::TocSidebar;
use crate::content::{ContentSection, anchors};

/// Renders each section under its anchor id.
#[component]
pub fn ContentSections(sections: &'static [ContentSection]) -> impl IntoView {
    sections
        .iter()
        .map(|section| {
            view! {
                <section id=section.anchor.id class="content-section">
                    <h2 class="content-section__title">{section.anchor.title}</h2>
                    {(!section.body.is_empty()).then(|| view! { <MarkdownBlock source=section.body/> })}
                    {section.diagram.map(|definition| view! { <Diagram definition/> })}
                </section>
            }
        })
        .collect::<Vec<_>>()
}

/// Sidebar table of contents plus the article body.
#[component]
pub fn ArticleWithToc(sections: &'static [ContentSection], #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="article-layout">
            <TocSidebar anchors=anchors(sections)/>
            <article class="article-layout__body">
                {children.map(|c| c())}
                <ContentSections sections/>
            </article>
        </div>
    }
}
