use std::path::PathBuf;

use dirs::preference_dir;

pub const APP_DIR: &str = "fmaze";
pub const SETTINGS_FILE: &str = "settings.toml";

/// Directory holding the user settings, `None` when the platform has no preference directory.
pub fn base_path() -> Option<PathBuf> {
    preference_dir().map(|dir| dir.join(APP_DIR))
}
