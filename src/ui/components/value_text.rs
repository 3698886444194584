//! Text content of a field with its caret.

use gpui::{
    div, prelude::FluentBuilder, px, Hsla, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled,
};

use crate::ui::components::field_state::TextBuffer;

const CARET_WIDTH: f32 = 1.5;
const LINE_HEIGHT: f32 = 20.0;

/// One rendered line, split around the caret when it sits on this line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineParts {
    pub before: String,
    /// Text after the caret. `None` when the caret is on another line.
    pub after: Option<String>,
}

/// Split a buffer into lines, marking where the caret falls.
pub(crate) fn split_lines(buffer: &TextBuffer) -> Vec<LineParts> {
    let mut parts = Vec::new();
    let mut offset = 0;
    for line in buffer.text.split('\n') {
        let end = offset + line.len();
        if (offset..=end).contains(&buffer.cursor) {
            let at = buffer.cursor - offset;
            parts.push(LineParts {
                before: line[..at].to_string(),
                after: Some(line[at..].to_string()),
            });
        } else {
            parts.push(LineParts {
                before: line.to_string(),
                after: None,
            });
        }
        offset = end + 1;
    }
    parts
}

/// Renders the value, or the placeholder when the value is empty.
#[derive(IntoElement)]
pub struct ValueText {
    buffer: TextBuffer,
    placeholder: Option<SharedString>,
    show_caret: bool,
    text_color: Hsla,
    placeholder_color: Hsla,
    caret_color: Hsla,
}

impl ValueText {
    pub fn new(buffer: &TextBuffer, text_color: Hsla, caret_color: Hsla) -> Self {
        Self {
            buffer: buffer.clone(),
            placeholder: None,
            show_caret: false,
            text_color,
            placeholder_color: text_color,
            caret_color,
        }
    }

    pub fn placeholder(mut self, placeholder: Option<SharedString>, color: Hsla) -> Self {
        self.placeholder = placeholder;
        self.placeholder_color = color;
        self
    }

    pub fn show_caret(mut self, show: bool) -> Self {
        self.show_caret = show;
        self
    }
}

impl RenderOnce for ValueText {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let caret_color = self.caret_color;
        let show_caret = self.show_caret;
        let caret = move || div().w(px(CARET_WIDTH)).h(px(LINE_HEIGHT - 4.0)).bg(caret_color);

        if self.buffer.is_empty() {
            return div()
                .flex()
                .items_center()
                .when(show_caret, |this| this.child(caret()))
                .when_some(self.placeholder, |this, placeholder| {
                    this.child(div().text_color(self.placeholder_color).child(placeholder))
                })
                .into_any_element();
        }

        div()
            .flex()
            .flex_col()
            .text_color(self.text_color)
            .children(split_lines(&self.buffer).into_iter().map(|line| {
                div()
                    .flex()
                    .items_center()
                    .min_h(px(LINE_HEIGHT))
                    .child(SharedString::from(line.before))
                    .when_some(line.after, |this, after| {
                        this.when(show_caret, |this| this.child(caret()))
                            .child(SharedString::from(after))
                    })
            }))
            .into_any_element()
    }
}
