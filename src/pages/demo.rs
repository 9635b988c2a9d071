//! Domain demo index: one card per backend domain.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;
use crate::content::domains::domain_doc;
use crate::state::nav::Domain;
use crate::util::style::{InteractionState, card_style};

#[component]
pub fn DemoPage() -> impl IntoView {
    let site = SiteConfig::default();
    view! {
        <Title text=site.page_title("도메인 데모")/>
        <div class="demo-page">
            <h1 class="page-title">"도메인 데모"</h1>
            <p class="demo-page__intro">"Petory 백엔드를 구성하는 7개 도메인의 API와 흐름을 정리했습니다."</p>
            <div class="demo-page__grid">
                {Domain::ALL.into_iter().map(|domain| view! { <DomainCard domain/> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn DomainCard(domain: Domain) -> impl IntoView {
    let interaction = RwSignal::new(InteractionState::Default);
    let style = move || card_style(interaction.get());
    let doc = domain_doc(domain);

    view! {
        <a
            href=domain.href()
            class="demo-page__card"
            style=style
            on:mouseenter=move |_| interaction.set(InteractionState::Hovered)
            on:mouseleave=move |_| interaction.set(InteractionState::Default)
        >
            <h2>{domain.label()}</h2>
            <p>{doc.summary}</p>
            <span class="demo-page__count">{format!("API {}개", doc.endpoints.len())}</span>
        </a>
    }
}
