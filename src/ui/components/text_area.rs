//! Multi-line text area with a label above it.

use gpui::{
    div, prelude::FluentBuilder, px, Context, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, Length, MouseButton, MouseDownEvent,
    ParentElement, Render, SharedString, Styled, Window,
};

use crate::config::FieldConfig;
use crate::ui::components::field_state::{ChangeEvent, FieldState, KeyInputResult, KeyPress};
use crate::ui::components::floating_label::{FloatingLabel, LabelAnchor};
use crate::ui::components::text_field::InputAttributes;
use crate::ui::components::value_text::ValueText;
use crate::ui::style::{
    text_area_label_style, text_area_style, Dimension, LabelState, INPUT_FONT_SIZE, LABEL_GUTTER,
};
use crate::ui::theme::Theme;

const DEFAULT_ROWS: u32 = 4;
const ROW_HEIGHT: f32 = 20.0;

/// Presentation settings of a text area.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAreaProps {
    pub label: SharedString,
    pub warning: Option<SharedString>,
    /// Container width exactly as given.
    pub width: Option<SharedString>,
    pub rows: u32,
    pub attributes: InputAttributes,
}

impl TextAreaProps {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            warning: None,
            width: None,
            rows: DEFAULT_ROWS,
            attributes: InputAttributes::default(),
        }
    }

    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            label: config.label.clone().into(),
            warning: config.warning.clone().map(SharedString::from),
            width: config.width.clone().map(SharedString::from),
            rows: config.rows.unwrap_or(DEFAULT_ROWS).max(1),
            attributes: InputAttributes::from_config(config),
        }
    }

    pub fn warning(mut self, warning: impl Into<SharedString>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn width(mut self, width: impl Into<SharedString>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows.max(1);
        self
    }

    pub fn attributes(mut self, attributes: InputAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Width as laid out. A literal the layout cannot express is ignored.
    pub(crate) fn width_dimension(&self) -> Dimension {
        self.width
            .as_deref()
            .and_then(|w| w.parse().ok())
            .unwrap_or(Dimension::Auto)
    }

    pub(crate) fn min_height(&self, padding: f32) -> f32 {
        self.rows as f32 * ROW_HEIGHT + padding * 2.0
    }
}

/// A focusable multi-line text area.
pub struct TextArea {
    id: SharedString,
    focus_handle: FocusHandle,
    state: FieldState,
    props: TextAreaProps,
}

impl TextArea {
    pub fn new(id: impl Into<SharedString>, props: TextAreaProps, cx: &mut Context<Self>) -> Self {
        let mut state = FieldState::new(None).multiline(true);
        props.attributes.apply_to(&mut state);
        Self {
            id: id.into(),
            focus_handle: cx.focus_handle(),
            state,
            props,
        }
    }

    pub fn from_config(
        id: impl Into<SharedString>,
        config: &FieldConfig,
        cx: &mut Context<Self>,
    ) -> Self {
        Self::new(id, TextAreaProps::from_config(config), cx)
            .with_value(config.value.as_deref().unwrap_or_default())
            .disabled(config.disabled)
    }

    /// Set the initial value. Does not notify observers.
    pub fn with_value(mut self, value: &str) -> Self {
        self.state.reset(value);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.state.set_disabled(disabled);
        self
    }

    /// Register a callback invoked after every accepted edit.
    pub fn on_change(mut self, observer: impl FnMut(&ChangeEvent) + 'static) -> Self {
        self.state.set_observer(observer);
        self
    }

    pub fn value(&self) -> &str {
        self.state.value()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled()
    }

    pub fn props(&self) -> &TextAreaProps {
        &self.props
    }

    pub fn set_disabled(&mut self, disabled: bool, cx: &mut Context<Self>) {
        self.state.set_disabled(disabled);
        cx.notify();
    }

    pub fn set_warning(&mut self, warning: Option<SharedString>, cx: &mut Context<Self>) {
        self.props.warning = warning;
        cx.notify();
    }

    pub fn set_value(&mut self, value: impl Into<String>, cx: &mut Context<Self>) {
        if let Some(event) = self.state.set_value(value) {
            cx.emit(event);
        }
        cx.notify();
    }

    pub fn focus(&self, window: &mut Window, cx: &mut Context<Self>) {
        if self.state.accepts_label_focus() {
            self.focus_handle.focus(window);
        }
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        let (result, change) = self.state.apply_key(KeyPress {
            key: keystroke.key.as_str(),
            key_char: keystroke.key_char.as_deref(),
            shift: keystroke.modifiers.shift,
            ctrl: keystroke.modifiers.control,
            cmd: keystroke.modifiers.platform,
        });

        match result {
            KeyInputResult::Ignored | KeyInputResult::Submit => return,
            KeyInputResult::Cancel => window.blur(),
            KeyInputResult::TextChanged | KeyInputResult::Consumed => {}
        }

        if let Some(change) = change {
            tracing::trace!(field = %self.id, len = change.value.len(), "text area changed");
            cx.emit(change);
        }
        cx.stop_propagation();
        cx.notify();
    }
}

impl EventEmitter<ChangeEvent> for TextArea {}

impl Focusable for TextArea {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextArea {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.try_global::<Theme>().copied().unwrap_or_default().colors;
        let disabled = self.state.is_disabled();
        let focused = !disabled && self.focus_handle.is_focused(window);

        let style = text_area_style(&colors);
        let label = text_area_label_style(
            LabelState {
                active: self.state.is_active(),
                focused,
                disabled,
            },
            &colors,
        );
        let width = self.props.width_dimension().to_length(window.viewport_size());
        let hover_color = style.border_hover_color;

        let control = div()
            .id(SharedString::from(format!("{}-input", self.id)))
            .w_full()
            .min_w(px(160.0))
            .min_h(px(self.props.min_height(style.padding)))
            .p(px(style.padding))
            .text_size(px(INPUT_FONT_SIZE))
            .cursor_text()
            .map(|this| {
                if disabled {
                    this.bg(colors.surface_disabled)
                } else {
                    this.bg(colors.surface)
                        .border_1()
                        .border_color(if focused {
                            style.border_hover_color
                        } else {
                            style.border_color
                        })
                }
            })
            .when(!disabled, |this| {
                this.track_focus(&self.focus_handle)
                    .hover(move |s| s.border_color(hover_color))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _: &MouseDownEvent, window, cx| {
                            this.focus(window, cx);
                        }),
                    )
                    .on_key_down(cx.listener(|this, event: &KeyDownEvent, window, cx| {
                        this.handle_key_down(event, window, cx);
                    }))
            })
            .child(
                ValueText::new(self.state.buffer(), colors.text_primary, colors.accent)
                    .placeholder(self.props.attributes.placeholder.clone(), colors.text_muted)
                    .show_caret(focused),
            );

        let label = FloatingLabel::new(
            SharedString::from(format!("{}-label", self.id)),
            self.props.label.clone(),
            self.focus_handle.clone(),
            label,
            colors,
        )
        .warning(self.props.warning.as_deref().map(|v| &**v))
        .anchor(LabelAnchor::Top);

        div()
            .id(self.id.clone())
            .relative()
            .flex()
            .flex_col()
            .map(|this| match width {
                Length::Auto => this,
                width => this.w(width),
            })
            .pt(px(LABEL_GUTTER))
            .child(control)
            .child(label)
    }
}
