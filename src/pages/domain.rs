//! Per-domain documentation page at `/domains/{slug}`.

#[cfg(test)]
#[path = "domain_test.rs"]
mod domain_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::content_sections::ArticleWithToc;
use crate::config::SiteConfig;
use crate::content::domains::{DomainDoc, domain_doc};
use crate::state::nav::Domain;

/// Documentation for the routed slug; `None` for unknown slugs.
pub fn resolve_domain(slug: Option<&str>) -> Option<&'static DomainDoc> {
    slug.and_then(Domain::from_slug).map(domain_doc)
}

#[component]
pub fn DomainPage() -> impl IntoView {
    let params = use_params_map();
    let site = SiteConfig::default();

    move || {
        let slug = params.read().get("slug");
        match resolve_domain(slug.as_deref()) {
            Some(doc) => view! { <DomainDocView doc site=site.clone()/> }.into_any(),
            None => view! {
                <Title text=site.page_title("도메인")/>
                <div class="domain-page domain-page--missing">
                    <h1 class="page-title">"알 수 없는 도메인"</h1>
                    <p>
                        {format!("'{}' 도메인 문서가 없습니다. ", slug.unwrap_or_default())}
                        <a href="/demo">"도메인 목록으로"</a>
                    </p>
                </div>
            }
                .into_any(),
        }
    }
}

#[component]
fn DomainDocView(doc: &'static DomainDoc, site: SiteConfig) -> impl IntoView {
    view! {
        <Title text=site.page_title(doc.domain.label())/>
        <div class="domain-page">
            <ArticleWithToc sections=doc.sections>
                <header class="domain-page__header">
                    <h1 class="page-title">{doc.domain.label()}</h1>
                    <p>{doc.summary}</p>
                </header>
                <table class="endpoint-table">
                    <thead>
                        <tr>
                            <th>"Method"</th>
                            <th>"Path"</th>
                            <th>"설명"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {doc
                            .endpoints
                            .iter()
                            .map(|endpoint| {
                                view! {
                                    <tr>
                                        <td class="endpoint-table__method">{endpoint.method}</td>
                                        <td><code>{endpoint.path}</code></td>
                                        <td>{endpoint.description}</td>
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
