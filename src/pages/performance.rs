//! Performance write-up page: N+1 measurements and notes.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::content_sections::ArticleWithToc;
use crate::config::SiteConfig;
use crate::content::performance::{MEASUREMENTS, SECTIONS};

#[component]
pub fn PerformancePage() -> impl IntoView {
    let site = SiteConfig::default();
    view! {
        <Title text=site.page_title("성능 개선")/>
        <div class="performance-page">
            <h1 class="page-title">"성능 개선"</h1>
            <ArticleWithToc sections=&SECTIONS>
                <table class="measurement-table">
                    <thead>
                        <tr>
                            <th>"API"</th>
                            <th>"쿼리 수 (전)"</th>
                            <th>"쿼리 수 (후)"</th>
                            <th>"응답 시간 (전)"</th>
                            <th>"응답 시간 (후)"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {MEASUREMENTS
                            .iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td><code>{row.api}</code></td>
                                        <td>{row.queries_before}</td>
                                        <td>{row.queries_after}</td>
                                        <td>{row.latency_before}</td>
                                        <td>{row.latency_after}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </ArticleWithToc>
        </div>
    }
}
