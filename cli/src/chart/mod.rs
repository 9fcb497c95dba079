//! Markdown chart of an apps directory: scan, then render.
pub(crate) mod emoji;
pub(crate) mod renderer;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::error::Result;
use crate::{AppScanner, Config};

pub use emoji::PlatformEmojis;
pub use renderer::ChartRenderer;

pub struct ChartGenerator {
    scanner: AppScanner,
    renderer: ChartRenderer,
}

impl ChartGenerator {
    pub fn new(config: Config) -> Self {
        Self {
            scanner: AppScanner::new(&config),
            renderer: ChartRenderer::new(config),
        }
    }

    /// Build the chart for every app under `apps_dir`. Nothing is rendered
    /// if the scan fails.
    pub fn generate(&self, apps_dir: &Path) -> Result<String> {
        let apps = self.scanner.scan_apps(apps_dir)?;
        Ok(self.renderer.render(&apps))
    }
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
