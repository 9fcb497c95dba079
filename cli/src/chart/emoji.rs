use std::collections::HashMap;

use crate::Config;

/// Hands out one glyph per platform, in first-seen order.
///
/// A platform keeps the glyph it was given for as long as this value lives,
/// so a single instance must be shared across every app of a document.
#[derive(Debug)]
pub struct PlatformEmojis {
    palette: Vec<String>,
    fallback: String,
    assigned: HashMap<String, usize>,
}

impl PlatformEmojis {
    pub fn new(palette: Vec<String>, fallback: impl Into<String>) -> Self {
        Self {
            palette,
            fallback: fallback.into(),
            assigned: HashMap::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.palette.clone(), config.fallback_emoji.clone())
    }

    /// Glyph for `platform`, assigning the next palette entry the first time
    /// it is seen. Once the palette is used up every new platform gets the
    /// fallback.
    pub fn emoji_for(&mut self, platform: &str) -> &str {
        let next = self.assigned.len();
        let slot = *self
            .assigned
            .entry(platform.to_string())
            .or_insert(next);

        self.palette
            .get(slot)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}
