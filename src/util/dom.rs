//! Browser glue: document theme attribute, scroll metrics, smooth scrolling,
//! element measurement, and the diagram renderer hand-off.
//!
//! Every function compiles to a no-op (or returns `None`) without the
//! `hydrate` feature, which is what SSR and native tests see.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::state::scroll::ScrollMetrics;
use crate::state::theme::ThemeMode;

/// Set `data-theme` on `<html>`; stylesheet color variables key off it.
pub fn apply_theme_attribute(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", mode.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Current viewport metrics, or `None` outside a browser.
pub fn read_scroll_metrics() -> Option<ScrollMetrics> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let offset = window.scroll_y().ok()?;
        let viewport = window.inner_height().ok()?.as_f64()?;
        let document = window.document()?.document_element()?.scroll_height();
        Some(ScrollMetrics::new(offset, viewport, f64::from(document)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Start a smooth scroll to `top`. Fire-and-forget.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Viewport-relative top of the element with `id`.
pub fn element_viewport_top(id: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Document-relative top of the element with `id`.
pub fn element_document_top(id: &str) -> Option<f64> {
    let viewport_top = element_viewport_top(id)?;
    Some(viewport_top + read_scroll_metrics()?.offset_from_top)
}

/// Mermaid theme name for a display mode.
pub fn diagram_theme(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "default",
        ThemeMode::Dark => "dark",
    }
}

/// Ask the page's diagram renderer (`window.mermaid`) to render every
/// `.mermaid` block. Previously rendered blocks are reset to their source
/// text first so a theme change re-renders them. Does nothing when the
/// renderer script is absent.
pub fn render_diagrams(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = render_diagrams_js(mode) {
            log::warn!("diagram render failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

#[cfg(feature = "hydrate")]
fn render_diagrams_js(mode: ThemeMode) -> Result<(), wasm_bindgen::JsValue> {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let mermaid = Reflect::get(&window, &JsValue::from_str("mermaid"))?;
    if mermaid.is_undefined() || mermaid.is_null() {
        return Ok(());
    }

    if let Some(document) = window.document() {
        let rendered = document.query_selector_all(".mermaid[data-processed]")?;
        for i in 0..rendered.length() {
            let Some(el) = rendered.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            if let Some(source) = el.get_attribute("data-source") {
                el.set_text_content(Some(&source));
            }
            el.remove_attribute("data-processed")?;
        }
    }

    let config = Object::new();
    Reflect::set(&config, &JsValue::from_str("startOnLoad"), &JsValue::FALSE)?;
    Reflect::set(&config, &JsValue::from_str("theme"), &JsValue::from_str(diagram_theme(mode)))?;
    let initialize: Function = Reflect::get(&mermaid, &JsValue::from_str("initialize"))?.dyn_into()?;
    initialize.call1(&mermaid, &config)?;

    let run: Function = Reflect::get(&mermaid, &JsValue::from_str("run"))?.dyn_into()?;
    run.call0(&mermaid)?;
    Ok(())
}
