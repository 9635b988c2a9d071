//! Pure style derivation for interactive elements.
//!
//! Hover and press feedback is computed from a small [`InteractionState`]
//! instead of mutating element styles from event handlers, so every visual
//! state is a function of data. Colors are CSS custom properties defined per
//! `[data-theme]` in the stylesheet; nothing here depends on the theme mode,
//! so server-rendered markup is already correct before hydration.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::state::nav::LinkState;

/// Pointer interaction with a single element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Default,
    Hovered,
    Active,
}

/// Theme color slots, one per stylesheet variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorVar {
    Background,
    Surface,
    Text,
    Muted,
    Accent,
    AccentSoft,
    Border,
}

impl ColorVar {
    pub const ALL: [ColorVar; 7] = [
        ColorVar::Background,
        ColorVar::Surface,
        ColorVar::Text,
        ColorVar::Muted,
        ColorVar::Accent,
        ColorVar::AccentSoft,
        ColorVar::Border,
    ];

    /// Custom property name as declared in `style/main.css`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "--bg",
            Self::Surface => "--surface",
            Self::Text => "--text",
            Self::Muted => "--muted",
            Self::Accent => "--accent",
            Self::AccentSoft => "--accent-soft",
            Self::Border => "--border",
        }
    }

    /// `var(--name)` reference for inline styles.
    pub fn css(self) -> &'static str {
        match self {
            Self::Background => "var(--bg)",
            Self::Surface => "var(--surface)",
            Self::Text => "var(--text)",
            Self::Muted => "var(--muted)",
            Self::Accent => "var(--accent)",
            Self::AccentSoft => "var(--accent-soft)",
            Self::Border => "var(--border)",
        }
    }
}

/// Inline style for a header link.
pub fn link_style(link: LinkState, interaction: InteractionState) -> String {
    use ColorVar as C;

    let (color, background, weight) = match (link, interaction) {
        (LinkState::Active, _) => (C::Accent.css(), C::AccentSoft.css(), 700),
        (LinkState::Muted, InteractionState::Default) => (C::Muted.css(), "transparent", 400),
        (LinkState::Muted, _) => (C::Text.css(), C::Surface.css(), 400),
        (LinkState::Default, InteractionState::Default) => (C::Text.css(), "transparent", 500),
        (LinkState::Default, _) => (C::Accent.css(), C::AccentSoft.css(), 500),
    };
    let mut style = format!("color: {color}; background: {background}; font-weight: {weight};");
    if interaction == InteractionState::Active {
        style.push_str(" opacity: 0.8;");
    }
    style
}

/// Inline style for round icon buttons (theme toggle, floating controls).
pub fn button_style(interaction: InteractionState) -> String {
    use ColorVar as C;

    let (background, color, lift) = match interaction {
        InteractionState::Default => (C::Surface.css(), C::Text.css(), "none"),
        InteractionState::Hovered => (C::Accent.css(), C::Background.css(), "translateY(-2px)"),
        InteractionState::Active => (C::Accent.css(), C::Background.css(), "translateY(0)"),
    };
    format!(
        "background: {background}; color: {color}; border: 1px solid {}; transform: {lift};",
        C::Border.css()
    )
}

/// Inline style for content cards.
pub fn card_style(interaction: InteractionState) -> String {
    let border = if interaction == InteractionState::Default {
        ColorVar::Border
    } else {
        ColorVar::Accent
    };
    format!(
        "background: {}; color: {}; border: 1px solid {};",
        ColorVar::Surface.css(),
        ColorVar::Text.css(),
        border.css()
    )
}
