//! Floating-label text inputs for gpui.
//!
//! [`ui::TextField`] is a single-line input whose label rests inside the
//! control and lifts once the field is focused or filled. [`ui::TextArea`] is
//! its multi-line sibling with the label pinned above. Both own their value,
//! notify a change observer on every edit, and show an optional warning next
//! to the label.

pub mod app;
pub mod config;
pub mod ui;

pub use config::{ConfigError, FieldConfig, FieldKind, FormConfig};
