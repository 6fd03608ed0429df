//! Type definitions for the Fynancial GUI application.

use std::path::PathBuf;

/// Window title.
pub const APP_NAME: &str = "Fynancial App";

/// Fixed window configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub resizable: bool,
    pub icon_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: APP_NAME.to_string(),
            width: 275.0,
            height: 250.0,
            resizable: false,
            icon_path: PathBuf::from("./money-bag.png"),
        }
    }
}
