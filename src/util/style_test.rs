use super::*;

const STYLESHEET: &str = include_str!("../../style/main.css");

fn all_styles() -> Vec<String> {
    let interactions = [InteractionState::Default, InteractionState::Hovered, InteractionState::Active];
    let mut out = Vec::new();
    for interaction in interactions {
        for link in [LinkState::Default, LinkState::Active, LinkState::Muted] {
            out.push(link_style(link, interaction));
        }
        out.push(button_style(interaction));
        out.push(card_style(interaction));
    }
    out
}

// =============================================================
// Color variables
// =============================================================

#[test]
fn css_reference_wraps_property_name() {
    for var in ColorVar::ALL {
        assert_eq!(var.css(), format!("var({})", var.name()));
    }
}

#[test]
fn every_variable_is_declared_for_both_themes() {
    let dark = STYLESHEET
        .split("[data-theme=\"dark\"]")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .unwrap();
    let light = STYLESHEET.split('}').next().unwrap();
    for var in ColorVar::ALL {
        let decl = format!("{}:", var.name());
        assert!(light.contains(&decl), "light theme missing {}", var.name());
        assert!(dark.contains(&decl), "dark theme missing {}", var.name());
    }
}

#[test]
fn inline_styles_never_carry_literal_colors() {
    for style in all_styles() {
        assert!(!style.contains('#'), "{style}");
        assert!(!style.contains("rgb"), "{style}");
    }
}

// =============================================================
// link_style
// =============================================================

#[test]
fn active_link_ignores_hover() {
    let idle = link_style(LinkState::Active, InteractionState::Default);
    let hovered = link_style(LinkState::Active, InteractionState::Hovered);
    assert_eq!(idle, hovered);
    assert!(idle.contains("color: var(--accent)"));
    assert!(idle.contains("font-weight: 700"));
}

#[test]
fn muted_link_brightens_on_hover() {
    assert!(link_style(LinkState::Muted, InteractionState::Default).contains("color: var(--muted)"));
    assert!(link_style(LinkState::Muted, InteractionState::Hovered).contains("color: var(--text)"));
}

#[test]
fn default_link_takes_accent_on_hover() {
    assert!(link_style(LinkState::Default, InteractionState::Default).contains("background: transparent"));
    assert!(link_style(LinkState::Default, InteractionState::Hovered).contains("var(--accent-soft)"));
}

#[test]
fn pressed_link_is_dimmed() {
    assert!(link_style(LinkState::Default, InteractionState::Active).ends_with("opacity: 0.8;"));
    assert!(!link_style(LinkState::Default, InteractionState::Hovered).contains("opacity"));
}

// =============================================================
// button_style / card_style
// =============================================================

#[test]
fn button_lifts_only_on_hover() {
    assert!(button_style(InteractionState::Hovered).contains("translateY(-2px)"));
    assert!(button_style(InteractionState::Default).contains("transform: none"));
    assert!(button_style(InteractionState::Active).contains("translateY(0)"));
}

#[test]
fn card_border_highlights_when_interacting() {
    assert!(card_style(InteractionState::Default).contains("border: 1px solid var(--border)"));
    assert!(card_style(InteractionState::Hovered).contains("border: 1px solid var(--accent)"));
}
