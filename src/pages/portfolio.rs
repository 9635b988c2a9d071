//! Portfolio index: one card per project.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;
use crate::content::projects::{ProjectWriteup, WRITEUPS};
use crate::util::style::{InteractionState, card_style};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let site = SiteConfig::default();
    view! {
        <Title text=site.page_title("포트폴리오")/>
        <div class="portfolio-page">
            <h1 class="page-title">"포트폴리오"</h1>
            <div class="portfolio-page__grid">
                {WRITEUPS.iter().map(|writeup| view! { <ProjectCard writeup/> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(writeup: &'static ProjectWriteup) -> impl IntoView {
    let interaction = RwSignal::new(InteractionState::Default);
    let style = move || card_style(interaction.get());

    view! {
        <a
            href=writeup.project.href()
            class="portfolio-page__card"
            style=style
            on:mouseenter=move |_| interaction.set(InteractionState::Hovered)
            on:mouseleave=move |_| interaction.set(InteractionState::Default)
        >
            <h2>{writeup.project.title()}</h2>
            <p class="portfolio-page__summary">{writeup.summary}</p>
            <p class="portfolio-page__period">{writeup.period}</p>
            <ul class="tag-list">
                {writeup.stack.iter().map(|tech| view! { <li class="tag">{*tech}</li> }).collect::<Vec<_>>()}
            </ul>
        </a>
    }
}
