//! UI components and views
//!
//! The UI is organized into:
//! - `theme`: Color schemes
//! - `style`: Width resolution and the variant style table
//! - `components`: The text field and text area
//! - `views`: The demo form window

pub mod components;
pub mod style;
pub mod theme;
pub mod views;

pub use components::{ChangeEvent, TextArea, TextAreaProps, TextField, TextFieldProps};
pub use style::{resolve_style_value, Dimension, DimensionError, FieldVariant};
pub use theme::{Theme, ThemeColors, ThemeMode};
pub use views::FormWindow;
