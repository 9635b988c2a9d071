//! Documentation directory page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::content_sections::ContentSections;
use crate::components::doc_links::DocLinks;
use crate::components::toc_sidebar::TocSidebar;
use crate::config::SiteConfig;
use crate::content::anchors;
use crate::content::docs::SECTIONS;

/// Guide text, then the link directory under the last section heading.
#[component]
pub fn DocsPage() -> impl IntoView {
    let site = SiteConfig::default();
    view! {
        <Title text=site.page_title("문서")/>
        <div class="docs-page">
            <h1 class="page-title">"문서"</h1>
            <div class="article-layout">
                <TocSidebar anchors=anchors(&SECTIONS)/>
                <article class="article-layout__body">
                    <ContentSections sections=&SECTIONS/>
                    <div class="doc-links">
                        <DocLinks/>
                    </div>
                </article>
            </div>
        </div>
    }
}
