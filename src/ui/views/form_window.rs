//! Form window
//!
//! Lays out the configured fields in a column and reports their changes.

use gpui::{
    div, prelude::FluentBuilder, px, AppContext, Context, Entity, FocusHandle, Focusable,
    FontWeight, InteractiveElement, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Window,
};

use crate::app::{FocusNextField, FocusPreviousField};
use crate::config::{FieldKind, FormConfig};
use crate::ui::components::{ChangeEvent, TextArea, TextField};
use crate::ui::theme::Theme;

/// A field hosted by the form.
enum FormField {
    Text(Entity<TextField>),
    Area(Entity<TextArea>),
}

impl FormField {
    fn focus_handle(&self, cx: &gpui::App) -> FocusHandle {
        match self {
            FormField::Text(field) => field.read(cx).focus_handle(cx),
            FormField::Area(field) => field.read(cx).focus_handle(cx),
        }
    }

    fn is_disabled(&self, cx: &gpui::App) -> bool {
        match self {
            FormField::Text(field) => field.read(cx).is_disabled(),
            FormField::Area(field) => field.read(cx).is_disabled(),
        }
    }
}

/// Direction of a focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

/// Index of the next focus target among `candidates`, wrapping around.
fn next_index(current: Option<usize>, len: usize, step: Step) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, step) {
        (None, Step::Forward) => 0,
        (None, Step::Backward) => len - 1,
        (Some(i), Step::Forward) => (i + 1) % len,
        (Some(i), Step::Backward) => (i + len - 1) % len,
    })
}

pub struct FormWindow {
    title: SharedString,
    focus_handle: FocusHandle,
    fields: Vec<FormField>,
    last_change: Option<(SharedString, String)>,
    _subscriptions: Vec<Subscription>,
}

impl FormWindow {
    pub fn new(form: &FormConfig, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut fields = Vec::with_capacity(form.fields.len());
        let mut subscriptions = Vec::with_capacity(form.fields.len());

        for (index, config) in form.fields.iter().enumerate() {
            let id = SharedString::from(format!("field-{index}"));
            let label = SharedString::from(config.label.clone());

            match config.kind {
                FieldKind::Text => {
                    let field = cx.new(|cx| TextField::from_config(id, config, cx));
                    subscriptions.push(cx.subscribe(
                        &field,
                        move |this, _, event: &ChangeEvent, cx| {
                            this.record_change(label.clone(), event, cx);
                        },
                    ));
                    fields.push(FormField::Text(field));
                }
                FieldKind::TextArea => {
                    let field = cx.new(|cx| TextArea::from_config(id, config, cx));
                    subscriptions.push(cx.subscribe(
                        &field,
                        move |this, _, event: &ChangeEvent, cx| {
                            this.record_change(label.clone(), event, cx);
                        },
                    ));
                    fields.push(FormField::Area(field));
                }
            }
        }

        Self {
            title: form.title.clone().into(),
            focus_handle: cx.focus_handle(),
            fields,
            last_change: None,
            _subscriptions: subscriptions,
        }
    }

    fn record_change(&mut self, label: SharedString, event: &ChangeEvent, cx: &mut Context<Self>) {
        tracing::info!(field = %label, value = %event.value, "field changed");
        self.last_change = Some((label, event.value.clone()));
        cx.notify();
    }

    fn move_focus(&mut self, step: Step, window: &mut Window, cx: &mut Context<Self>) {
        let handles: Vec<FocusHandle> = self
            .fields
            .iter()
            .filter(|field| !field.is_disabled(cx))
            .map(|field| field.focus_handle(cx))
            .collect();

        let current = handles.iter().position(|handle| handle.is_focused(window));
        if let Some(index) = next_index(current, handles.len(), step) {
            handles[index].focus(window);
        }
    }
}

impl Focusable for FormWindow {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for FormWindow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.try_global::<Theme>().copied().unwrap_or_default().colors;

        div()
            .id("form-window")
            .key_context("FormWindow")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(|this, _: &FocusNextField, window, cx| {
                this.move_focus(Step::Forward, window, cx);
            }))
            .on_action(cx.listener(|this, _: &FocusPreviousField, window, cx| {
                this.move_focus(Step::Backward, window, cx);
            }))
            .size_full()
            .p(px(32.0))
            .flex()
            .flex_col()
            .gap(px(24.0))
            .bg(colors.background)
            .text_color(colors.text_primary)
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(self.title.clone()),
            )
            .children(self.fields.iter().map(|field| match field {
                FormField::Text(field) => field.clone().into_any_element(),
                FormField::Area(field) => field.clone().into_any_element(),
            }))
            .when_some(self.last_change.clone(), |this, (label, value)| {
                this.child(
                    div()
                        .text_xs()
                        .text_color(colors.text_muted)
                        .child(SharedString::from(format!("{label}: {value}"))),
                )
            })
    }
}
