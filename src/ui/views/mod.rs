//! Application views.

mod form_window;

pub use form_window::FormWindow;
