use std::{fs, path::Path, path::PathBuf};

use crossterm::style::{Color, ContentStyle};
use serde::{Deserialize, Serialize};

use crate::{app::AppError, constants};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub wall: Color,
    pub passage: Color,
    pub solution: Color,
    pub cursor: Color,
}

impl ColorScheme {
    pub fn walls(&self) -> ContentStyle {
        Self::fg(self.wall)
    }

    pub fn passages(&self) -> ContentStyle {
        Self::fg(self.passage)
    }

    pub fn solutions(&self) -> ContentStyle {
        Self::fg(self.solution)
    }

    pub fn cursors(&self) -> ContentStyle {
        Self::fg(self.cursor)
    }

    fn fg(color: Color) -> ContentStyle {
        ContentStyle {
            foreground_color: Some(color),
            background_color: None,
            ..Default::default()
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            wall: Color::White,
            passage: Color::DarkGrey,
            solution: Color::Green,
            cursor: Color::Yellow,
        }
    }
}

/// User settings, every missing entry falls back to its default.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub frame_delay_ms: Option<u64>,
    #[serde(default)]
    pub animate: Option<bool>,
    #[serde(default)]
    pub show_solution: Option<bool>,
    #[serde(default)]
    pub log_level: Option<log::LevelFilter>,
    #[serde(default)]
    pub colors: Option<ColorScheme>,
}

impl Settings {
    pub const DEFAULT_WIDTH: i32 = 20;
    pub const DEFAULT_FRAME_DELAY_MS: u64 = 25;

    pub fn new() -> Self {
        Self::default()
    }

    /// Fills every missing entry with its default, so the file written out shows all options.
    pub fn populate(mut self) -> Self {
        self.width = Some(self.get_width());
        self.frame_delay_ms = Some(self.get_frame_delay_ms());
        self.animate = Some(self.get_animate());
        self.show_solution = Some(self.get_show_solution());
        self.log_level = Some(self.get_log_level());
        self.colors = Some(self.get_colors());

        self
    }

    pub fn get_width(&self) -> i32 {
        self.width.unwrap_or(Self::DEFAULT_WIDTH)
    }

    pub fn get_frame_delay_ms(&self) -> u64 {
        self.frame_delay_ms.unwrap_or(Self::DEFAULT_FRAME_DELAY_MS)
    }

    pub fn get_animate(&self) -> bool {
        self.animate.unwrap_or_default()
    }

    pub fn get_show_solution(&self) -> bool {
        self.show_solution.unwrap_or(true)
    }

    pub fn get_log_level(&self) -> log::LevelFilter {
        self.log_level.unwrap_or(log::LevelFilter::Warn)
    }

    pub fn get_colors(&self) -> ColorScheme {
        self.colors.unwrap_or_default()
    }

    pub fn default_path() -> Result<PathBuf, AppError> {
        constants::base_path()
            .map(|dir| dir.join(constants::SETTINGS_FILE))
            .ok_or(AppError::NoConfigDir)
    }

    pub fn from_toml(text: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String, AppError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reads the settings, writing the defaults out first when the file doesn't exist yet.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Creating default settings at {}", path.display());
                Self::reset_config(path)?;
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), AppError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, Settings::new().populate().to_toml()?)?;
        Ok(())
    }
}
