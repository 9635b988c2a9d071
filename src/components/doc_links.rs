//! Documentation-file link directory grouped by category.

use leptos::prelude::*;

use crate::content::docs::{categories, links_in};
use crate::util::style::{InteractionState, card_style};

#[component]
pub fn DocLinks() -> impl IntoView {
    categories()
        .into_iter()
        .map(|category| {
            view! {
                <div class="doc-links__group">
                    <h3 class="doc-links__category">{category}</h3>
                    <ul class="doc-links__list">
                        {links_in(category)
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <DocLinkCard title=link.title href=link.href description=link.description/>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
fn DocLinkCard(title: &'static str, href: &'static str, description: &'static str) -> impl IntoView {
    let interaction = RwSignal::new(InteractionState::Default);
    let style = move || card_style(interaction.get());

    view! {
        <a
            href=href
            class="doc-links__card"
            target="_blank"
            rel="noopener"
            style=style
            on:mouseenter=move |_| interaction.set(InteractionState::Hovered)
            on:mouseleave=move |_| interaction.set(InteractionState::Default)
        >
            <span class="doc-links__title">{title}</span>
            <span class="doc-links__description">{description}</span>
        </a>
    }
}
