//! Resume page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::content_sections::ArticleWithToc;
use crate::config::SiteConfig;
use crate::content::resume::SECTIONS;

#[component]
pub fn ResumePage() -> impl IntoView {
    let site = SiteConfig::default();
    view! {
        <Title text=site.page_title("이력서")/>
        <div class="resume-page">
            <h1 class="page-title">"이력서"</h1>
            <ArticleWithToc sections=&SECTIONS/>
        </div>
    }
}
