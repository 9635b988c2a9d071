//! Router fallback.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let site = SiteConfig::default();
    view! {
        <Title text=site.page_title("페이지 없음")/>
        <div class="not-found-page">
            <h1 class="page-title">"페이지를 찾을 수 없습니다"</h1>
            <a href="/">"홈으로"</a>
        </div>
    }
}
