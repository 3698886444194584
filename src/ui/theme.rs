//! Color schemes for the field components.
//!
//! Field chrome (borders, label emphasis, warning text) uses fixed hues in
//! both modes. Only the surrounding surface and the typed text follow the
//! selected mode.

use gpui::{rgb, rgba, Hsla};
use serde::{Deserialize, Serialize};

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light background with dark text.
    #[default]
    Light,
    /// Dark background with light text.
    Dark,
}

/// Resolved palette used while rendering.
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// Window background.
    pub background: Hsla,
    /// Input surface.
    pub surface: Hsla,
    /// Input surface while disabled.
    pub surface_disabled: Hsla,
    /// Full border around boxed controls.
    pub border: Hsla,
    /// Border of a hovered or focused boxed control.
    pub border_hover: Hsla,
    /// Bottom rule under default controls.
    pub underline: Hsla,
    /// Typed text.
    pub text_primary: Hsla,
    /// Placeholder text.
    pub text_muted: Hsla,
    /// Label color when lifted or emphasised.
    pub label_emphasis: Hsla,
    /// Label color at rest.
    pub label_faded: Hsla,
    /// Inline warning next to a label.
    pub warning: Hsla,
    /// Caret.
    pub accent: Hsla,
}

impl ThemeColors {
    fn chrome(background: Hsla, surface: Hsla, text_primary: Hsla, text_muted: Hsla) -> Self {
        Self {
            background,
            surface,
            surface_disabled: rgba(0xd8d8d833).into(),
            border: rgb(0xc2c2c2).into(),
            border_hover: rgb(0xa2a8af).into(),
            underline: rgb(0xe2e2e2).into(),
            text_primary,
            text_muted,
            label_emphasis: rgb(0x9f9396).into(),
            label_faded: rgb(0xd3d3d3).into(),
            warning: rgb(0xec530a).into(),
            accent: rgb(0x5b8def).into(),
        }
    }

    /// Light palette.
    pub fn light() -> Self {
        Self::chrome(
            rgb(0xffffff).into(),
            rgb(0xffffff).into(),
            rgb(0x222222).into(),
            rgb(0xa0a0a0).into(),
        )
    }

    /// Dark palette.
    pub fn dark() -> Self {
        Self::chrome(
            rgb(0x1c1c1f).into(),
            rgb(0x26262a).into(),
            rgb(0xececec).into(),
            rgb(0x77777c).into(),
        )
    }
}

/// Active theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn light() -> Self {
        Self::for_mode(ThemeMode::Light)
    }

    pub fn dark() -> Self {
        Self::for_mode(ThemeMode::Dark)
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ThemeColors::light(),
            ThemeMode::Dark => ThemeColors::dark(),
        };
        Self { mode, colors }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl gpui::Global for Theme {}
