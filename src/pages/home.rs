//! Landing page with entry cards to the rest of the site.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;
use crate::util::style::{InteractionState, card_style};

/// One entry card on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryCard {
    pub title: &'static str,
    pub href: &'static str,
    pub blurb: &'static str,
}

pub const ENTRY_CARDS: [EntryCard; 5] = [
    EntryCard {
        title: "이력서",
        href: "/resume",
        blurb: "기술 스택과 프로젝트 경험",
    },
    EntryCard {
        title: "포트폴리오",
        href: "/portfolio",
        blurb: "Petory · LinkUp 설계와 트러블슈팅",
    },
    EntryCard {
        title: "도메인 데모",
        href: "/demo",
        blurb: "7개 백엔드 도메인의 API와 흐름",
    },
    EntryCard {
        title: "성능 개선",
        href: "/performance",
        blurb: "N+1 제거 전후 측정 결과",
    },
    EntryCard {
        title: "문서",
        href: "/docs",
        blurb: "설계·운영 문서 모음",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let site = SiteConfig::default();

    view! {
        <Title text=site.page_title("")/>
        <div class="home-page">
            <section class="home-page__hero">
                <h1>{site.owner}</h1>
                <p class="home-page__tagline">{site.tagline}</p>
            </section>
            <div class="home-page__cards">
                {ENTRY_CARDS
                    .into_iter()
                    .map(|card| view! { <HomeCard card/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn HomeCard(card: EntryCard) -> impl IntoView {
    let interaction = RwSignal::new(InteractionState::Default);
    let style = move || card_style(interaction.get());

    view! {
        <a
            href=card.href
            class="home-page__card"
            style=style
            on:mouseenter=move |_| interaction.set(InteractionState::Hovered)
            on:mouseleave=move |_| interaction.set(InteractionState::Default)
        >
            <h2>{card.title}</h2>
            <p>{card.blurb}</p>
        </a>
    }
}
