//! Rendered Markdown prose.

use leptos::prelude::*;

use crate::util::markdown::render_markdown_html;

#[component]
pub fn MarkdownBlock(source: &'static str) -> impl IntoView {
    let rendered = render_markdown_html(source);
    view! { <div class="markdown-body" inner_html=rendered></div> }
}
