//! Editable value owned by a field.
//!
//! [`TextBuffer`] is the raw text with cursor tracking. [`FieldState`] wraps
//! it with the field's editing rules (disabled, read-only, max length) and
//! notifies a registered observer after every accepted change. Keyboard
//! capture happens in the owning view.

use std::fmt;

/// A text buffer with cursor position tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    /// The text content.
    pub text: String,
    /// Cursor position in bytes.
    pub cursor: usize,
    /// Whether Enter inserts a line break.
    pub multiline: bool,
}

impl TextBuffer {
    /// Create a new empty single-line buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with initial text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            multiline: false,
        }
    }

    /// Allow line breaks.
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the content and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at cursor position.
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a string at cursor position.
    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Delete character before cursor (backspace).
    pub fn backspace(&mut self) -> bool {
        if self.cursor > 0 {
            let prev_char_boundary = self.prev_char_boundary();
            self.text.remove(prev_char_boundary);
            self.cursor = prev_char_boundary;
            true
        } else {
            false
        }
    }

    /// Delete character at cursor (delete key).
    pub fn delete(&mut self) -> bool {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_char_boundary();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.next_char_boundary();
        }
    }

    /// Move to the start of the current line.
    pub fn move_to_start(&mut self) {
        self.cursor = if self.multiline {
            self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1)
        } else {
            0
        };
    }

    /// Move to the end of the current line.
    pub fn move_to_end(&mut self) {
        self.cursor = if self.multiline {
            self.text[self.cursor..]
                .find('\n')
                .map_or(self.text.len(), |i| self.cursor + i)
        } else {
            self.text.len()
        };
    }

    /// Delete word before cursor (Ctrl+Backspace).
    pub fn delete_word_backward(&mut self) -> bool {
        let start = self.cursor;

        while self
            .char_before_cursor()
            .map(char::is_whitespace)
            .unwrap_or(false)
        {
            self.backspace();
        }

        while self
            .char_before_cursor()
            .map(|c| !c.is_whitespace())
            .unwrap_or(false)
        {
            self.backspace();
        }

        self.cursor != start
    }

    fn char_before_cursor(&self) -> Option<char> {
        self.text[..self.cursor].chars().last()
    }

    fn prev_char_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_char_boundary(&self) -> usize {
        self.text[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.text.len())
    }
}

/// Result of processing a key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInputResult {
    /// The key was consumed and the text changed.
    TextChanged,
    /// The key was consumed but text didn't change.
    Consumed,
    /// The key should trigger submit (Enter on a single-line buffer).
    Submit,
    /// The key should trigger cancel (Escape).
    Cancel,
    /// The key was not handled.
    Ignored,
}

/// A key press as seen by the buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyPress<'a> {
    /// Key name, e.g. `"a"`, `"backspace"`, `"enter"`.
    pub key: &'a str,
    /// Text the key produces with the current layout and modifiers.
    pub key_char: Option<&'a str>,
    pub shift: bool,
    pub ctrl: bool,
    pub cmd: bool,
}

impl<'a> KeyPress<'a> {
    pub fn new(key: &'a str) -> Self {
        Self {
            key,
            ..Default::default()
        }
    }

    /// Key press that types `text` verbatim.
    pub fn typed(text: &'a str) -> Self {
        Self {
            key: text,
            key_char: Some(text),
            ..Default::default()
        }
    }
}

impl TextBuffer {
    /// Process a key input. Returns how the key was handled.
    pub fn process_key(&mut self, press: KeyPress<'_>) -> KeyInputResult {
        let changed = |changed: bool| {
            if changed {
                KeyInputResult::TextChanged
            } else {
                KeyInputResult::Consumed
            }
        };

        match press.key {
            "backspace" => {
                if press.ctrl || press.cmd {
                    changed(self.delete_word_backward())
                } else {
                    changed(self.backspace())
                }
            }
            "delete" => changed(self.delete()),
            "left" => {
                self.move_left();
                KeyInputResult::Consumed
            }
            "right" => {
                self.move_right();
                KeyInputResult::Consumed
            }
            "home" => {
                self.move_to_start();
                KeyInputResult::Consumed
            }
            "end" => {
                self.move_to_end();
                KeyInputResult::Consumed
            }
            "enter" if self.multiline && !(press.ctrl || press.cmd) => {
                self.insert_char('\n');
                KeyInputResult::TextChanged
            }
            "enter" => KeyInputResult::Submit,
            "escape" => KeyInputResult::Cancel,
            "tab" => KeyInputResult::Ignored,
            _ if press.ctrl || press.cmd => KeyInputResult::Ignored,
            "space" => {
                self.insert_char(' ');
                KeyInputResult::TextChanged
            }
            key => {
                if let Some(text) = press.key_char.filter(|t| !t.chars().any(char::is_control)) {
                    if !text.is_empty() {
                        self.insert_str(text);
                        return KeyInputResult::TextChanged;
                    }
                }

                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_graphic() => {
                        let c = if press.shift { c.to_ascii_uppercase() } else { c };
                        self.insert_char(c);
                        KeyInputResult::TextChanged
                    }
                    _ => KeyInputResult::Ignored,
                }
            }
        }
    }
}

/// Notification sent after the value of a field changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The value after the change.
    pub value: String,
}

/// Callback invoked with every accepted change.
pub type ChangeObserver = Box<dyn FnMut(&ChangeEvent)>;

/// Value and editing rules of a single field.
pub struct FieldState {
    buffer: TextBuffer,
    disabled: bool,
    read_only: bool,
    max_length: Option<usize>,
    observer: Option<ChangeObserver>,
}

impl FieldState {
    /// Create state holding `initial`, or an empty value.
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            buffer: TextBuffer::with_text(initial.unwrap_or_default()),
            disabled: false,
            read_only: false,
            max_length: None,
            observer: None,
        }
    }

    /// Allow line breaks in the value.
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.buffer.multiline = multiline;
        self
    }

    pub fn value(&self) -> &str {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Whether the field holds any text.
    pub fn is_active(&self) -> bool {
        !self.buffer.is_empty()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn set_max_length(&mut self, max_length: Option<usize>) {
        self.max_length = max_length;
    }

    /// Whether clicking the label should focus the control.
    pub fn accepts_label_focus(&self) -> bool {
        !self.disabled
    }

    fn accepts_edits(&self) -> bool {
        !self.disabled && !self.read_only
    }

    fn within_limit(&self, text: &str) -> bool {
        self.max_length
            .map_or(true, |max| text.chars().count() <= max)
    }

    /// Register the change observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl FnMut(&ChangeEvent) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Replace the value without notifying the observer.
    pub fn reset(&mut self, value: &str) {
        self.buffer.set_text(value);
    }

    /// Replace the value. Returns the event delivered to the observer, or
    /// `None` when the edit was rejected.
    pub fn set_value(&mut self, value: impl Into<String>) -> Option<ChangeEvent> {
        let value = value.into();
        if !self.accepts_edits() {
            tracing::debug!("edit rejected: field not editable");
            return None;
        }
        if !self.within_limit(&value) {
            tracing::debug!(max_length = ?self.max_length, "edit rejected: too long");
            return None;
        }

        self.buffer.set_text(value);
        Some(self.notify())
    }

    /// Apply a key press. Text-changing keys notify the observer once.
    pub fn apply_key(&mut self, press: KeyPress<'_>) -> (KeyInputResult, Option<ChangeEvent>) {
        if self.disabled {
            return (KeyInputResult::Ignored, None);
        }

        let previous = self.buffer.clone();
        let result = self.buffer.process_key(press);
        if result != KeyInputResult::TextChanged {
            return (result, None);
        }

        if self.read_only || !self.within_limit(self.buffer.text()) {
            self.buffer = previous;
            return (KeyInputResult::Consumed, None);
        }

        (result, Some(self.notify()))
    }

    fn notify(&mut self) -> ChangeEvent {
        let event = ChangeEvent {
            value: self.buffer.text().to_string(),
        };
        if let Some(observer) = self.observer.as_mut() {
            observer(&event);
        }
        event
    }
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldState")
            .field("buffer", &self.buffer)
            .field("disabled", &self.disabled)
            .field("read_only", &self.read_only)
            .field("max_length", &self.max_length)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use pretty_assertions::assert_eq;

    fn recording(state: &mut FieldState) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        state.set_observer(move |event| sink.borrow_mut().push(event.value.clone()));
        seen
    }

    #[test]
    fn buffer_with_text_puts_cursor_at_end() {
        let buffer = TextBuffer::with_text("hello");
        assert_eq!(buffer.text(), "hello");
        assert_eq!(buffer.cursor, 5);
    }

    #[test]
    fn buffer_backspace_and_delete_at_edges() {
        let mut buffer = TextBuffer::new();
        assert!(!buffer.backspace());

        let mut buffer = TextBuffer::with_text("hello");
        assert!(!buffer.delete());
        buffer.move_to_start();
        assert!(buffer.delete());
        assert_eq!(buffer.text(), "ello");
    }

    #[test]
    fn buffer_insert_in_middle() {
        let mut buffer = TextBuffer::with_text("hllo");
        buffer.cursor = 1;
        buffer.insert_char('e');
        assert_eq!(buffer.text(), "hello");
    }

    #[test]
    fn buffer_handles_multibyte_chars() {
        let mut buffer = TextBuffer::new();
        buffer.insert_str("naïve ");
        buffer.insert_char('🎉');
        assert_eq!(buffer.char_count(), 7);

        buffer.backspace();
        assert_eq!(buffer.text(), "naïve ");
        for _ in 0..4 {
            buffer.move_left();
        }
        assert!(buffer.delete());
        assert_eq!(buffer.text(), "nave ");
    }

    #[test]
    fn buffer_delete_word_backward() {
        let mut buffer = TextBuffer::with_text("hello world");
        assert!(buffer.delete_word_backward());
        assert_eq!(buffer.text(), "hello ");
        assert!(buffer.delete_word_backward());
        assert_eq!(buffer.text(), "");
        assert!(!buffer.delete_word_backward());
    }

    #[test]
    fn enter_submits_single_line_and_breaks_multiline() {
        let mut single = TextBuffer::with_text("a");
        assert_eq!(single.process_key(KeyPress::new("enter")), KeyInputResult::Submit);
        assert_eq!(single.text(), "a");

        let mut multi = TextBuffer::with_text("a").multiline(true);
        assert_eq!(
            multi.process_key(KeyPress::new("enter")),
            KeyInputResult::TextChanged
        );
        assert_eq!(multi.text(), "a\n");
    }

    #[test]
    fn home_and_end_stay_on_current_line() {
        let mut buffer = TextBuffer::with_text("one\ntwo\nthree").multiline(true);
        buffer.cursor = 5;
        buffer.move_to_start();
        assert_eq!(buffer.cursor, 4);
        buffer.move_to_end();
        assert_eq!(buffer.cursor, 7);
    }

    #[test]
    fn key_char_takes_precedence() {
        let mut buffer = TextBuffer::new();
        let press = KeyPress {
            key: "2",
            key_char: Some("@"),
            shift: true,
            ..Default::default()
        };
        assert_eq!(buffer.process_key(press), KeyInputResult::TextChanged);
        assert_eq!(buffer.text(), "@");
    }

    #[test]
    fn shortcuts_are_not_typed() {
        let mut buffer = TextBuffer::new();
        let press = KeyPress {
            key: "c",
            key_char: Some("c"),
            cmd: true,
            ..Default::default()
        };
        assert_eq!(buffer.process_key(press), KeyInputResult::Ignored);
        assert!(buffer.is_empty());
    }

    #[test]
    fn modified_space_is_not_typed() {
        let mut buffer = TextBuffer::new();
        for press in [
            KeyPress {
                key: "space",
                ctrl: true,
                ..Default::default()
            },
            KeyPress {
                key: "space",
                cmd: true,
                ..Default::default()
            },
        ] {
            assert_eq!(buffer.process_key(press), KeyInputResult::Ignored);
        }
        assert!(buffer.is_empty());

        assert_eq!(
            buffer.process_key(KeyPress::new("space")),
            KeyInputResult::TextChanged
        );
        assert_eq!(buffer.text(), " ");
    }

    #[test]
    fn state_starts_from_initial_value_or_empty() {
        assert_eq!(FieldState::new(Some("x")).value(), "x");
        assert_eq!(FieldState::new(None).value(), "");
        assert!(!FieldState::default().is_active());
    }

    #[test]
    fn each_edit_notifies_once_with_latest_value() {
        let mut state = FieldState::new(None);
        let seen = recording(&mut state);

        state.set_value("a");
        state.set_value("ab");

        assert_eq!(state.value(), "ab");
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "ab".to_string()]);
    }

    #[test]
    fn typing_notifies_per_keystroke() {
        let mut state = FieldState::new(None);
        let seen = recording(&mut state);

        let (result, event) = state.apply_key(KeyPress::typed("a"));
        assert_eq!(result, KeyInputResult::TextChanged);
        assert_eq!(event.map(|e| e.value), Some("a".to_string()));
        state.apply_key(KeyPress::typed("b"));
        state.apply_key(KeyPress::new("left"));

        assert_eq!(state.value(), "ab");
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn reset_is_silent() {
        let mut state = FieldState::new(None);
        let seen = recording(&mut state);
        state.reset("seed");
        assert_eq!(state.value(), "seed");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn edits_without_observer_still_update() {
        let mut state = FieldState::new(None);
        assert!(state.set_value("quiet").is_some());
        assert_eq!(state.value(), "quiet");
    }

    #[test]
    fn active_tracks_emptiness() {
        let mut state = FieldState::new(None);
        assert!(!state.is_active());
        state.set_value("x");
        assert!(state.is_active());
        state.apply_key(KeyPress::new("backspace"));
        assert!(!state.is_active());
    }

    #[test]
    fn disabled_rejects_edits_and_label_focus() {
        let mut state = FieldState::new(Some("keep"));
        let seen = recording(&mut state);
        state.set_disabled(true);

        assert_eq!(state.set_value("new"), None);
        assert_eq!(
            state.apply_key(KeyPress::typed("x")),
            (KeyInputResult::Ignored, None)
        );
        assert!(!state.accepts_label_focus());
        assert_eq!(state.value(), "keep");
        assert!(seen.borrow().is_empty());

        state.set_disabled(false);
        assert!(state.accepts_label_focus());
    }

    #[test]
    fn read_only_allows_cursor_but_not_text() {
        let mut state = FieldState::new(Some("fixed"));
        state.set_read_only(true);

        assert_eq!(state.apply_key(KeyPress::new("left")).0, KeyInputResult::Consumed);
        assert_eq!(state.apply_key(KeyPress::typed("x")), (KeyInputResult::Consumed, None));
        assert_eq!(state.set_value("other"), None);
        assert_eq!(state.value(), "fixed");
        assert!(state.accepts_label_focus());
    }

    #[test]
    fn max_length_counts_characters() {
        let mut state = FieldState::new(None);
        state.set_max_length(Some(2));

        state.apply_key(KeyPress::typed("é"));
        state.apply_key(KeyPress::typed("é"));
        let (result, event) = state.apply_key(KeyPress::typed("é"));

        assert_eq!(result, KeyInputResult::Consumed);
        assert_eq!(event, None);
        assert_eq!(state.value(), "éé");
        assert_eq!(state.set_value("abc"), None);
    }

    #[test]
    fn backspace_on_empty_is_not_a_change() {
        let mut state = FieldState::new(None);
        let seen = recording(&mut state);
        assert_eq!(
            state.apply_key(KeyPress::new("backspace")),
            (KeyInputResult::Consumed, None)
        );
        assert!(seen.borrow().is_empty());
    }
}
