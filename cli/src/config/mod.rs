use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};


pub const DEFAULT_MANIFEST_FILE: &str = "app.yml";
pub const DEFAULT_FALLBACK_EMOJI: &str = "💻";
pub const DEFAULT_PALETTE: [&str; 14] = [
    "🍎", "🍏", "🍊", "🍋", "🍌", "🍉", "🍇", "🍓", "🍒", "🍑", "🥭", "🍍", "🥥", "🥝",
];

/// Settings for one chart run. Every field has a default, so a config file
/// only needs the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// File name that marks a version directory
    pub manifest_file: String,
    /// Glyphs handed out to platforms in first-seen order
    pub palette: Vec<String>,
    /// Glyph used once the palette runs out
    pub fallback_emoji: String,
    /// Sort platform keys instead of keeping manifest order
    pub sort_platforms: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            palette: DEFAULT_PALETTE.iter().map(|e| e.to_string()).collect(),
            fallback_emoji: DEFAULT_FALLBACK_EMOJI.to_string(),
            sort_platforms: false,
        }
    }
}

impl Config {
    /// Load a TOML config file. The file is only read, never created.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ChartError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
