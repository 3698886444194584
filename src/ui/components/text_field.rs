//! Single-line text field with a floating label.
//!
//! The label rests inside the control while it is empty and unfocused, and
//! lifts above it once the field is focused or holds text. Boxed fields keep
//! the label lifted at all times.

use gpui::{
    div, prelude::FluentBuilder, px, Context, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement,
    Render, SharedString, Styled, Window,
};

use crate::config::FieldConfig;
use crate::ui::components::field_state::{ChangeEvent, FieldState, KeyInputResult, KeyPress};
use crate::ui::components::floating_label::{FloatingLabel, LabelAnchor};
use crate::ui::components::value_text::ValueText;
use crate::ui::style::{
    label_style, resolve_dimension, resolve_style_value, BorderEdges, Dimension, FieldVariant,
    LabelState, INPUT_FONT_SIZE, INPUT_HEIGHT, LABEL_GUTTER,
};
use crate::ui::theme::Theme;

/// Width used when none, or an invalid one, is given.
pub const DEFAULT_WIDTH: &str = "auto";

/// Attributes forwarded unchanged to the underlying control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputAttributes {
    pub placeholder: Option<SharedString>,
    /// Maximum number of characters.
    pub max_length: Option<usize>,
    pub read_only: bool,
}

impl InputAttributes {
    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            placeholder: config.placeholder.clone().map(SharedString::from),
            max_length: config.max_length,
            read_only: config.read_only,
        }
    }

    pub(crate) fn apply_to(&self, state: &mut FieldState) {
        state.set_max_length(self.max_length);
        state.set_read_only(self.read_only);
    }
}

/// Presentation settings of a text field.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldProps {
    pub label: SharedString,
    pub warning: Option<SharedString>,
    /// Width after normalisation.
    width: String,
    pub variant: FieldVariant,
    pub attributes: InputAttributes,
}

impl TextFieldProps {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            warning: None,
            width: DEFAULT_WIDTH.to_string(),
            variant: FieldVariant::Default,
            attributes: InputAttributes::default(),
        }
    }

    pub fn from_config(config: &FieldConfig) -> Self {
        let mut props = Self::new(config.label.clone())
            .variant(config.variant)
            .attributes(InputAttributes::from_config(config));
        props.set_width(config.width.as_deref());
        props.warning = config.warning.clone().map(SharedString::from);
        props
    }

    pub fn warning(mut self, warning: impl Into<SharedString>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn width(mut self, width: &str) -> Self {
        self.set_width(Some(width));
        self
    }

    pub fn variant(mut self, variant: FieldVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn attributes(mut self, attributes: InputAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Normalise and store a width. Invalid or absent widths become `auto`.
    pub fn set_width(&mut self, width: Option<&str>) {
        self.width = resolve_style_value(width, DEFAULT_WIDTH);
    }

    /// The normalised width.
    pub fn resolved_width(&self) -> &str {
        &self.width
    }

    pub(crate) fn width_dimension(&self) -> Dimension {
        resolve_dimension(Some(&self.width), Dimension::Auto)
    }
}

/// A focusable single-line text field.
pub struct TextField {
    id: SharedString,
    focus_handle: FocusHandle,
    state: FieldState,
    props: TextFieldProps,
}

impl TextField {
    pub fn new(id: impl Into<SharedString>, props: TextFieldProps, cx: &mut Context<Self>) -> Self {
        let mut state = FieldState::new(None);
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
        Self::new(id, TextFieldProps::from_config(config), cx)
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

    pub fn props(&self) -> &TextFieldProps {
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

    pub fn set_width(&mut self, width: Option<&str>, cx: &mut Context<Self>) {
        self.props.set_width(width);
        cx.notify();
    }

    /// Replace the value as if the user had typed it.
    pub fn set_value(&mut self, value: impl Into<String>, cx: &mut Context<Self>) {
        if let Some(event) = self.state.set_value(value) {
            cx.emit(event);
        }
        cx.notify();
    }

    /// Move focus to the control, unless disabled.
    pub fn focus(&self, window: &mut Window, cx: &mut Context<Self>) {
        if self.state.accepts_label_focus() {
            self.focus_handle.focus(window);
        }
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        let press = KeyPress {
            key: keystroke.key.as_str(),
            key_char: keystroke.key_char.as_deref(),
            shift: keystroke.modifiers.shift,
            ctrl: keystroke.modifiers.control,
            cmd: keystroke.modifiers.platform,
        };

        let (result, change) = self.state.apply_key(press);
        match result {
            KeyInputResult::Ignored | KeyInputResult::Submit => return,
            KeyInputResult::Cancel => window.blur(),
            KeyInputResult::TextChanged | KeyInputResult::Consumed => {}
        }

        if let Some(change) = change {
            tracing::trace!(field = %self.id, value = %change.value, "text field changed");
            cx.emit(change);
        }
        cx.stop_propagation();
        cx.notify();
    }
}

impl EventEmitter<ChangeEvent> for TextField {}

impl Focusable for TextField {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextField {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.try_global::<Theme>().copied().unwrap_or_default().colors;
        let disabled = self.state.is_disabled();
        let focused = !disabled && self.focus_handle.is_focused(window);

        let variant = self.props.variant.style(&colors);
        let label = label_style(
            self.props.variant,
            LabelState {
                active: self.state.is_active(),
                focused,
                disabled,
            },
            &colors,
        );
        let width = self
            .props
            .width_dimension()
            .to_length(window.viewport_size());

        let border_color = if focused {
            variant.border_hover_color
        } else {
            variant.border_color
        };
        let hover_color = variant.border_hover_color;

        let control = div()
            .id(SharedString::from(format!("{}-input", self.id)))
            .h(px(INPUT_HEIGHT))
            .w_full()
            .min_w(px(120.0))
            .px(px(variant.padding))
            .flex()
            .items_center()
            .text_size(px(INPUT_FONT_SIZE))
            .cursor_text()
            .map(|this| {
                if disabled {
                    this.bg(colors.surface_disabled)
                } else {
                    let this = this.bg(colors.surface).border_color(border_color);
                    match variant.border_edges {
                        BorderEdges::All => this.border_1(),
                        BorderEdges::Bottom => this.border_b_1(),
                    }
                }
            })
            .when(!disabled, |this| {
                this.track_focus(&self.focus_handle)
                    .hover(move |style| style.border_color(hover_color))
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
                    .placeholder(
                        self.props
                            .attributes
                            .placeholder
                            .clone()
                            .filter(|_| label.lifted),
                        colors.text_muted,
                    )
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
        .anchor(LabelAnchor::Bottom(variant.label_inset));

        div()
            .id(self.id.clone())
            .relative()
            .flex()
            .flex_col()
            .w(width)
            .pt(px(LABEL_GUTTER))
            .child(control)
            .child(label)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use gpui::TestAppContext;
    use pretty_assertions::assert_eq;

    #[test]
    fn props_normalise_width() {
        assert_eq!(TextFieldProps::new("Name").width("50%").resolved_width(), "50%");
        assert_eq!(TextFieldProps::new("Name").width("banana").resolved_width(), "auto");
        assert_eq!(TextFieldProps::new("Name").resolved_width(), "auto");
    }

    #[test]
    fn props_width_dimension() {
        let props = TextFieldProps::new("Name").width("240px");
        assert_eq!(props.width_dimension(), Dimension::Pixels(240.0));
        let props = TextFieldProps::new("Name").width("wide");
        assert_eq!(props.width_dimension(), Dimension::Auto);
    }

    #[test]
    fn props_from_config() {
        let config = FieldConfig {
            warning: Some("required".to_string()),
            variant: FieldVariant::Boxed,
            width: Some("10rem".to_string()),
            placeholder: Some("you@example.com".to_string()),
            max_length: Some(64),
            ..FieldConfig::text("Email")
        };
        let props = TextFieldProps::from_config(&config);

        assert_eq!(props.label.as_ref(), "Email");
        assert_eq!(props.warning.as_deref().map(|v| &**v), Some("required"));
        assert_eq!(props.variant, FieldVariant::Boxed);
        assert_eq!(props.resolved_width(), "10rem");
        assert_eq!(props.attributes.max_length, Some(64));
        assert_eq!(
            props.attributes.placeholder.as_deref().map(|v| &**v),
            Some("you@example.com")
        );
    }

    #[test]
    fn attributes_configure_state() {
        let attributes = InputAttributes {
            max_length: Some(1),
            read_only: true,
            ..Default::default()
        };
        let mut state = FieldState::new(None);
        attributes.apply_to(&mut state);

        assert_eq!(state.max_length(), Some(1));
        assert!(state.is_read_only());
    }

    #[gpui::test]
    fn disabled_field_does_not_take_focus(cx: &mut TestAppContext) {
        let (field, cx) = cx.add_window_view(|_, cx| {
            TextField::new("name", TextFieldProps::new("Name"), cx).disabled(true)
        });

        cx.update(|window, cx| field.update(cx, |field, cx| field.focus(window, cx)));
        cx.run_until_parked();

        cx.update(|window, cx| {
            assert!(!field.read(cx).focus_handle.is_focused(window));
        });
    }

    #[gpui::test]
    fn enabled_field_takes_focus(cx: &mut TestAppContext) {
        let (field, cx) =
            cx.add_window_view(|_, cx| TextField::new("name", TextFieldProps::new("Name"), cx));

        cx.update(|window, cx| field.update(cx, |field, cx| field.focus(window, cx)));
        cx.run_until_parked();

        cx.update(|window, cx| {
            assert!(field.read(cx).focus_handle.is_focused(window));
        });
    }

    #[gpui::test]
    fn typing_emits_one_change_per_keystroke(cx: &mut TestAppContext) {
        let (field, cx) =
            cx.add_window_view(|_, cx| TextField::new("name", TextFieldProps::new("Name"), cx));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _subscription = cx.update(|_, cx| {
            cx.subscribe(&field, move |_, event: &ChangeEvent, _| {
                sink.borrow_mut().push(event.value.clone());
            })
        });

        cx.update(|window, cx| field.update(cx, |field, cx| field.focus(window, cx)));
        cx.run_until_parked();
        cx.simulate_keystrokes("a b");

        assert_eq!(*seen.borrow(), vec!["a", "ab"]);
        cx.update(|_, cx| assert_eq!(field.read(cx).value(), "ab"));
    }

    #[gpui::test]
    fn disabled_field_ignores_keystrokes(cx: &mut TestAppContext) {
        let (field, cx) = cx.add_window_view(|_, cx| {
            TextField::new("name", TextFieldProps::new("Name"), cx)
                .with_value("keep")
                .disabled(true)
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _subscription = cx.update(|_, cx| {
            cx.subscribe(&field, move |_, event: &ChangeEvent, _| {
                sink.borrow_mut().push(event.value.clone());
            })
        });

        cx.update(|window, cx| field.update(cx, |field, cx| field.focus(window, cx)));
        cx.run_until_parked();
        cx.simulate_keystrokes("x");

        assert!(seen.borrow().is_empty());
        cx.update(|_, cx| assert_eq!(field.read(cx).value(), "keep"));
    }
}
