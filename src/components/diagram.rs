//! Architecture diagram block.
//!
//! The definition string is handed to the page's diagram renderer as-is;
//! `data-source` keeps the original text so the block can be re-rendered
//! after a theme change. Without a renderer the source text stays visible.

use leptos::prelude::*;

#[component]
pub fn Diagram(definition: &'static str, #[prop(optional)] caption: Option<&'static str>) -> impl IntoView {
    view! {
        <figure class="diagram">
            <pre class="mermaid diagram__source" data-source=definition>
                {definition}
            </pre>
            {caption.map(|text| view! { <figcaption class="diagram__caption">{text}</figcaption> })}
        </figure>
    }
}
