//! Floating label shared by the field components.

use gpui::{
    div, prelude::FluentBuilder, px, ClickEvent, ElementId, FocusHandle, FontWeight,
    InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled,
};

use crate::ui::style::{LabelStyle, LABEL_FONT_SIZE, LABEL_LIFT};
use crate::ui::theme::ThemeColors;

/// Parenthesised warning suffix, including its leading space.
pub fn warning_suffix(warning: Option<&str>) -> Option<String> {
    warning
        .filter(|w| !w.is_empty())
        .map(|w| format!(" ({w})"))
}

/// Where a label sits relative to its field container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelAnchor {
    /// Measured from the bottom of the container; lifting raises it.
    Bottom(f32),
    /// Pinned to the top of the container.
    Top,
}

/// A caption that moves focus to its control when clicked.
#[derive(IntoElement)]
pub struct FloatingLabel {
    id: ElementId,
    text: SharedString,
    warning: Option<SharedString>,
    style: LabelStyle,
    anchor: LabelAnchor,
    target: FocusHandle,
    colors: ThemeColors,
}

impl FloatingLabel {
    /// `target` is the focus handle of the control this label names.
    pub fn new(
        id: impl Into<ElementId>,
        text: impl Into<SharedString>,
        target: FocusHandle,
        style: LabelStyle,
        colors: ThemeColors,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            warning: None,
            style,
            anchor: LabelAnchor::Top,
            target,
            colors,
        }
    }

    pub fn warning(mut self, warning: Option<&str>) -> Self {
        self.warning = warning_suffix(warning).map(SharedString::from);
        self
    }

    pub fn anchor(mut self, anchor: LabelAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Full caption as rendered: `"Email (required)"`.
    pub fn caption(&self) -> String {
        match &self.warning {
            Some(suffix) => format!("{}{}", self.text, suffix),
            None => self.text.to_string(),
        }
    }
}

impl RenderOnce for FloatingLabel {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let caption = self.caption();
        let target = self.target;
        let clickable = self.style.clickable;
        let lifted = self.style.lifted;
        let anchor = self.anchor;
        let warning_color = self.colors.warning;

        div()
            .id(self.id)
            .absolute()
            .left_0()
            .flex()
            .flex_row()
            .text_size(px(LABEL_FONT_SIZE))
            .font_weight(FontWeight::BOLD)
            .text_color(self.style.color)
            .cursor_text()
            .map(|this| match anchor {
                LabelAnchor::Top => this.top_0(),
                LabelAnchor::Bottom(inset) => {
                    let lift = if lifted { LABEL_LIFT } else { 0.0 };
                    this.bottom(px(inset + lift))
                }
            })
            .when(clickable, |this| {
                this.on_click(move |_: &ClickEvent, window, cx| {
                    tracing::debug!(label = %caption, "label clicked, focusing control");
                    target.focus(window);
                })
            })
            .child(self.text)
            .when_some(self.warning, |this, warning| {
                this.child(div().text_color(warning_color).child(warning))
            })
    }
}
