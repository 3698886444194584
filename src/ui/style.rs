//! Style resolution for the field components.
//!
//! Two concerns live here:
//! - normalising a user supplied width into a length the layout engine accepts
//! - the variant table mapping a presentation mode to its visual bundle

use std::fmt;
use std::str::FromStr;

use gpui::{px, relative, rems, Hsla, Length, Pixels, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::theme::ThemeColors;

/// Height of a single-line control.
pub const INPUT_HEIGHT: f32 = 34.0;
/// Font size of typed text.
pub const INPUT_FONT_SIZE: f32 = 14.0;
/// Font size of the floating label.
pub const LABEL_FONT_SIZE: f32 = 12.0;
/// Vertical distance a lifted label travels.
pub const LABEL_LIFT: f32 = 24.0;
/// Space reserved above the control for a lifted label.
pub const LABEL_GUTTER: f32 = 20.0;

/// Keywords accepted in place of a length.
const KEYWORDS: &[&str] = &[
    "auto",
    "inherit",
    "initial",
    "unset",
    "fit-content",
    "min-content",
    "max-content",
];

/// Why a candidate width was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("empty dimension")]
    Empty,
    #[error("invalid number in dimension `{0}`")]
    InvalidNumber(String),
    #[error("unknown unit `{unit}` in dimension `{input}`")]
    UnknownUnit { input: String, unit: String },
    #[error("negative dimension `{0}`")]
    Negative(String),
}

/// A parsed length-like value.
#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    Auto,
    /// A sizing keyword other than `auto`.
    Keyword(&'static str),
    Pixels(f32),
    Points(f32),
    Ems(f32),
    Rems(f32),
    Percent(f32),
    ViewportWidth(f32),
    ViewportHeight(f32),
}

impl Dimension {
    /// Convert into a layout length. `viewport` resolves `vw`/`vh`.
    pub fn to_length(&self, viewport: Size<Pixels>) -> Length {
        match *self {
            Dimension::Auto | Dimension::Keyword(_) => Length::Auto,
            Dimension::Pixels(v) => px(v).into(),
            Dimension::Points(v) => px(v * 4.0 / 3.0).into(),
            Dimension::Ems(v) | Dimension::Rems(v) => rems(v).into(),
            Dimension::Percent(v) => relative(v / 100.0).into(),
            Dimension::ViewportWidth(v) => (viewport.width * (v / 100.0)).into(),
            Dimension::ViewportHeight(v) => (viewport.height * (v / 100.0)).into(),
        }
    }
}

impl FromStr for Dimension {
    type Err = DimensionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DimensionError::Empty);
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower == "auto" {
            return Ok(Dimension::Auto);
        }
        if let Some(keyword) = KEYWORDS.iter().find(|k| **k == lower) {
            return Ok(Dimension::Keyword(*keyword));
        }

        let split = lower
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '+' || c == '-'))
            .unwrap_or(lower.len());
        let (number, unit) = lower.split_at(split);

        // Reject forms f32 accepts but a stylesheet would not ("1e3", "inf", "1.").
        let digits = number.trim_start_matches(['+', '-']);
        let well_formed = !digits.is_empty()
            && digits.chars().filter(|c| *c == '.').count() <= 1
            && !digits.ends_with('.')
            && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
            && number.len() - digits.len() <= 1;
        if !well_formed {
            return Err(DimensionError::InvalidNumber(trimmed.to_string()));
        }
        let value: f32 = number
            .parse()
            .map_err(|_| DimensionError::InvalidNumber(trimmed.to_string()))?;
        if !value.is_finite() {
            return Err(DimensionError::InvalidNumber(trimmed.to_string()));
        }
        if value < 0.0 {
            return Err(DimensionError::Negative(trimmed.to_string()));
        }

        match unit {
            "" | "px" => Ok(Dimension::Pixels(value)),
            "pt" => Ok(Dimension::Points(value)),
            "em" => Ok(Dimension::Ems(value)),
            "rem" => Ok(Dimension::Rems(value)),
            "%" => Ok(Dimension::Percent(value)),
            "vw" => Ok(Dimension::ViewportWidth(value)),
            "vh" => Ok(Dimension::ViewportHeight(value)),
            other => Err(DimensionError::UnknownUnit {
                input: trimmed.to_string(),
                unit: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Auto => write!(f, "auto"),
            Dimension::Keyword(k) => write!(f, "{k}"),
            Dimension::Pixels(v) => write!(f, "{v}px"),
            Dimension::Points(v) => write!(f, "{v}pt"),
            Dimension::Ems(v) => write!(f, "{v}em"),
            Dimension::Rems(v) => write!(f, "{v}rem"),
            Dimension::Percent(v) => write!(f, "{v}%"),
            Dimension::ViewportWidth(v) => write!(f, "{v}vw"),
            Dimension::ViewportHeight(v) => write!(f, "{v}vh"),
        }
    }
}

/// Return `candidate` unchanged if it is a valid length, else `fallback`.
pub fn resolve_style_value(candidate: Option<&str>, fallback: &str) -> String {
    match candidate {
        Some(value) => match value.parse::<Dimension>() {
            Ok(_) => value.to_string(),
            Err(err) => {
                tracing::debug!(%err, fallback, "style value rejected");
                fallback.to_string()
            }
        },
        None => fallback.to_string(),
    }
}

/// Typed counterpart of [`resolve_style_value`].
pub fn resolve_dimension(candidate: Option<&str>, fallback: Dimension) -> Dimension {
    candidate
        .and_then(|value| match value.parse::<Dimension>() {
            Ok(dimension) => Some(dimension),
            Err(err) => {
                tracing::debug!(%err, %fallback, "dimension rejected");
                None
            }
        })
        .unwrap_or(fallback)
}

/// Presentation mode of a single-line field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldVariant {
    /// Underlined control with a label resting inside it.
    #[default]
    Default,
    /// Fully bordered, padded control with the label always above it.
    Boxed,
}

/// Which edges carry a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderEdges {
    All,
    Bottom,
}

/// Visual bundle for one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantStyle {
    pub padding: f32,
    pub border_edges: BorderEdges,
    pub border_color: Hsla,
    /// Border color on hover and focus.
    pub border_hover_color: Hsla,
    /// Distance of a resting label from the bottom of the field.
    pub label_inset: f32,
    /// Whether the label is lifted even when the field is empty.
    pub label_lifted_at_rest: bool,
}

impl FieldVariant {
    pub fn style(self, colors: &ThemeColors) -> VariantStyle {
        match self {
            FieldVariant::Boxed => VariantStyle {
                padding: 8.0,
                border_edges: BorderEdges::All,
                border_color: colors.border,
                border_hover_color: colors.border_hover,
                label_inset: 13.0,
                label_lifted_at_rest: true,
            },
            FieldVariant::Default => VariantStyle {
                padding: 0.0,
                border_edges: BorderEdges::Bottom,
                border_color: colors.underline,
                border_hover_color: colors.underline,
                label_inset: 10.0,
                label_lifted_at_rest: false,
            },
        }
    }
}

/// Fixed style of the multi-line control.
pub fn text_area_style(colors: &ThemeColors) -> VariantStyle {
    VariantStyle {
        padding: 10.0,
        border_edges: BorderEdges::All,
        border_color: colors.border,
        border_hover_color: colors.border_hover,
        label_inset: 0.0,
        label_lifted_at_rest: true,
    }
}

/// Resolved label presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub color: Hsla,
    pub lifted: bool,
    /// Clicking moves focus to the control.
    pub clickable: bool,
}

/// Field state relevant to label styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelState {
    pub active: bool,
    pub focused: bool,
    pub disabled: bool,
}

/// Label presentation for a single-line field.
pub fn label_style(variant: FieldVariant, state: LabelState, colors: &ThemeColors) -> LabelStyle {
    let style = variant.style(colors);
    let emphasised = state.active
        || state.focused
        || (variant == FieldVariant::Boxed && !state.disabled);

    LabelStyle {
        color: if emphasised {
            colors.label_emphasis
        } else {
            colors.label_faded
        },
        lifted: state.active || state.focused || style.label_lifted_at_rest,
        clickable: !state.disabled,
    }
}

/// Label presentation for the multi-line field.
pub fn text_area_label_style(state: LabelState, colors: &ThemeColors) -> LabelStyle {
    LabelStyle {
        color: if state.active || state.focused {
            colors.label_emphasis
        } else {
            colors.label_faded
        },
        lifted: true,
        clickable: !state.disabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn valid_lengths_pass_through() {
        for value in [
            "50%", "120px", "10", "0", "1.5rem", "2em", "12pt", "40vw", "3vh", "auto", "inherit",
            "fit-content", " 50% ", "100PX",
        ] {
            assert_eq!(resolve_style_value(Some(value), "auto"), value);
        }
    }

    #[test]
    fn invalid_lengths_fall_back() {
        for value in [
            "banana", "", "   ", "px", "10furlongs", "-5px", "1.2.3px", "1e3px", ".", "5.",
            "--1", "inf", "NaN",
        ] {
            assert_eq!(resolve_style_value(Some(value), "auto"), "auto", "{value:?}");
        }
    }

    #[test]
    fn overflowing_lengths_fall_back() {
        let huge = format!("1{}px", "0".repeat(40));
        assert_eq!(
            huge.parse::<Dimension>(),
            Err(DimensionError::InvalidNumber(huge.clone()))
        );
        assert_eq!(resolve_style_value(Some(&huge), "auto"), "auto");
    }

    #[test]
    fn absent_value_falls_back() {
        assert_eq!(resolve_style_value(None, "auto"), "auto");
        assert_eq!(resolve_style_value(None, "100%"), "100%");
    }

    #[test]
    fn parses_units() {
        assert_eq!("50%".parse::<Dimension>(), Ok(Dimension::Percent(50.0)));
        assert_eq!("12".parse::<Dimension>(), Ok(Dimension::Pixels(12.0)));
        assert_eq!("0.5rem".parse::<Dimension>(), Ok(Dimension::Rems(0.5)));
        assert_eq!("+3em".parse::<Dimension>(), Ok(Dimension::Ems(3.0)));
        assert_eq!(
            "min-content".parse::<Dimension>(),
            Ok(Dimension::Keyword("min-content"))
        );
    }

    #[test]
    fn reports_rejection_reason() {
        assert_eq!("".parse::<Dimension>(), Err(DimensionError::Empty));
        assert_eq!(
            "-1px".parse::<Dimension>(),
            Err(DimensionError::Negative("-1px".to_string()))
        );
        assert_eq!(
            "4parsecs".parse::<Dimension>(),
            Err(DimensionError::UnknownUnit {
                input: "4parsecs".to_string(),
                unit: "parsecs".to_string(),
            })
        );
        assert!(matches!(
            "banana".parse::<Dimension>(),
            Err(DimensionError::InvalidNumber(_))
        ));
    }

    #[test]
    fn resolve_dimension_uses_fallback() {
        assert_eq!(
            resolve_dimension(Some("banana"), Dimension::Auto),
            Dimension::Auto
        );
        assert_eq!(
            resolve_dimension(Some("25%"), Dimension::Auto),
            Dimension::Percent(25.0)
        );
        assert_eq!(resolve_dimension(None, Dimension::Pixels(10.0)), Dimension::Pixels(10.0));
    }

    #[test]
    fn keywords_lay_out_as_auto() {
        let viewport = Size {
            width: px(800.0),
            height: px(600.0),
        };
        assert_eq!(Dimension::Auto.to_length(viewport), Length::Auto);
        assert_eq!(
            Dimension::Keyword("inherit").to_length(viewport),
            Length::Auto
        );
        assert_eq!(
            Dimension::ViewportWidth(50.0).to_length(viewport),
            Length::from(px(400.0))
        );
    }

    #[test]
    fn variants_select_distinct_borders() {
        let colors = ThemeColors::light();
        let boxed = FieldVariant::Boxed.style(&colors);
        let plain = FieldVariant::Default.style(&colors);

        assert_eq!(boxed.border_edges, BorderEdges::All);
        assert_eq!(boxed.padding, 8.0);
        assert!(boxed.label_lifted_at_rest);
        assert_eq!(plain.border_edges, BorderEdges::Bottom);
        assert_eq!(plain.padding, 0.0);
        assert!(!plain.label_lifted_at_rest);
    }

    #[test]
    fn default_label_rests_until_active() {
        let colors = ThemeColors::light();
        let idle = label_style(FieldVariant::Default, LabelState::default(), &colors);
        assert!(!idle.lifted);
        assert_eq!(idle.color, colors.label_faded);

        let active = label_style(
            FieldVariant::Default,
            LabelState {
                active: true,
                ..Default::default()
            },
            &colors,
        );
        assert!(active.lifted);
        assert_eq!(active.color, colors.label_emphasis);

        let focused = label_style(
            FieldVariant::Default,
            LabelState {
                focused: true,
                ..Default::default()
            },
            &colors,
        );
        assert!(focused.lifted);
    }

    #[test]
    fn boxed_label_fades_when_disabled() {
        let colors = ThemeColors::light();
        let enabled = label_style(FieldVariant::Boxed, LabelState::default(), &colors);
        assert_eq!(enabled.color, colors.label_emphasis);
        assert!(enabled.lifted);
        assert!(enabled.clickable);

        let disabled = label_style(
            FieldVariant::Boxed,
            LabelState {
                disabled: true,
                ..Default::default()
            },
            &colors,
        );
        assert_eq!(disabled.color, colors.label_faded);
        assert!(!disabled.clickable);
    }

    #[test]
    fn text_area_label_always_lifted() {
        let colors = ThemeColors::dark();
        let style = text_area_label_style(
            LabelState {
                disabled: true,
                ..Default::default()
            },
            &colors,
        );
        assert!(style.lifted);
        assert!(!style.clickable);
        assert_eq!(style.color, colors.label_faded);
    }

    #[test]
    fn text_area_label_follows_activity() {
        let colors = ThemeColors::light();
        let filled_disabled = LabelState {
            active: true,
            disabled: true,
            ..Default::default()
        };
        assert_eq!(
            text_area_label_style(filled_disabled, &colors).color,
            colors.label_emphasis
        );
        assert_eq!(
            text_area_label_style(filled_disabled, &colors).color,
            label_style(FieldVariant::Default, filled_disabled, &colors).color
        );

        let idle = text_area_label_style(LabelState::default(), &colors);
        assert_eq!(idle.color, colors.label_faded);
        assert!(idle.clickable);

        let focused = LabelState {
            focused: true,
            ..Default::default()
        };
        assert_eq!(
            text_area_label_style(focused, &colors).color,
            colors.label_emphasis
        );
    }
}
