//! Application lifecycle for the demo form.
//!
//! Registers actions and keybindings, installs the theme and opens the
//! form window.

use anyhow::Result;
use gpui::{actions, px, size, AppContext, Application, Bounds, KeyBinding, WindowBounds, WindowOptions};

use crate::config::FormConfig;
use crate::ui::{FormWindow, Theme};

actions!(float_fields, [Quit, FocusNextField, FocusPreviousField]);

/// Main application entry point
pub struct App;

impl App {
    /// Run the application until the window is closed or Quit is dispatched.
    pub fn run(form: FormConfig) -> Result<()> {
        form.validate()?;

        Application::new().run(move |cx: &mut gpui::App| {
            cx.set_global(Theme::for_mode(form.theme));
            Self::register_keybindings(cx);
            cx.on_action(|_: &Quit, cx| cx.quit());

            let bounds = Bounds::centered(None, size(px(640.0), px(720.0)), cx);
            let opened = cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    ..Default::default()
                },
                |window, cx| cx.new(|cx| FormWindow::new(&form, window, cx)),
            );

            match opened {
                Ok(_) => tracing::info!(title = %form.title, fields = form.fields.len(), "form window opened"),
                Err(err) => {
                    tracing::error!(%err, "failed to open form window");
                    cx.quit();
                }
            }
        });

        Ok(())
    }

    /// Register global keybindings
    fn register_keybindings(cx: &mut gpui::App) {
        let form_ctx = Some("FormWindow");

        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
            KeyBinding::new("tab", FocusNextField, form_ctx),
            KeyBinding::new("shift-tab", FocusPreviousField, form_ctx),
        ]);
    }
}
