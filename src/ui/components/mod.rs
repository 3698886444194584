//! Field components.
//!
//! Both fields share the same pieces: a [`FieldState`] owning the value, a
//! [`FloatingLabel`] bound to the control's focus handle, and a
//! [`ValueText`] rendering the value with its caret. Styling comes from the
//! variant table in [`crate::ui::style`].

pub mod field_state;
pub mod floating_label;
pub mod text_area;
pub mod text_field;
pub mod value_text;

pub use field_state::{
    ChangeEvent, ChangeObserver, FieldState, KeyInputResult, KeyPress, TextBuffer,
};
pub use floating_label::{FloatingLabel, LabelAnchor};
pub use text_area::{TextArea, TextAreaProps};
pub use text_field::{InputAttributes, TextField, TextFieldProps};
pub use value_text::ValueText;
