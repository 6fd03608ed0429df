//! Helper functions for the Fynancial GUI application.

use crate::message::Message;
use crate::types::AppConfig;
use anyhow::Context;
use iced::{window, Command, Size};
use std::path::Path;

// =============================================================================
// Window
// =============================================================================

/// Load the window icon from an image file.
pub fn load_window_icon(path: &Path) -> anyhow::Result<window::Icon> {
    window::icon::from_file(path)
        .with_context(|| format!("Failed to load window icon from {}", path.display()))
}

/// Fixed-size window configuration.
pub fn window_settings(config: &AppConfig, icon: Option<window::Icon>) -> window::Settings {
    window::Settings {
        size: Size::new(config.width, config.height),
        resizable: config.resizable,
        icon,
        ..Default::default()
    }
}

// =============================================================================
// Error Dialog
// =============================================================================

/// Show a modal error dialog and report back once it is closed.
pub fn error_dialog(title: &str, description: String) -> Command<Message> {
    let title = title.to_string();
    Command::perform(
        async move {
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title(title)
                .set_description(description)
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
        },
        |_| Message::ErrorDismissed,
    )
}
