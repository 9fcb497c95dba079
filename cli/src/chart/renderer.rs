use crate::chart::emoji::PlatformEmojis;
use crate::{App, Config};

pub const APP_EMOJI: &str = "🖥️";
pub const VERSIONS_EMOJI: &str = "📦";
pub const VERSION_EMOJI: &str = "🏷️";

/// Turns sorted apps into the markdown chart.
pub struct ChartRenderer {
    config: Config,
}

impl ChartRenderer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render every app in the given order. Platform glyphs are assigned
    /// across the whole document, so a platform looks the same in every app.
    pub fn render(&self, apps: &[App]) -> String {
        let mut emojis = PlatformEmojis::from_config(&self.config);
        let mut markdown = String::new();

        for app in apps {
            self.render_app(app, &mut emojis, &mut markdown);
        }

        markdown
    }

    fn render_app(&self, app: &App, emojis: &mut PlatformEmojis, out: &mut String) {
        out.push_str(&format!("## {} {}\n", APP_EMOJI, app.name));
        // Small light blue text under the heading
        out.push_str(&format!(
            "<small style=\"color:lightblue;\">{}</small>\n",
            app.description
        ));
        out.push_str("<details>\n");
        out.push_str(&format!("<summary>{} Versions</summary>\n", VERSIONS_EMOJI));
        out.push_str("<ul>\n");

        for version in &app.versions {
            if version.platforms.is_empty() {
                out.push_str(&format!("<li>{} {}</li>\n", VERSION_EMOJI, version.name));
                continue;
            }

            out.push_str(&format!("<li>{} {}\n", VERSION_EMOJI, version.name));
            out.push_str("<ul>\n");
            for platform in &version.platforms {
                out.push_str(&format!(
                    "<li>{} {}</li>\n",
                    emojis.emoji_for(platform),
                    platform
                ));
            }
            out.push_str("</ul>\n");
            out.push_str("</li>\n");
        }

        out.push_str("</ul>\n");
        out.push_str("</details>\n");
        out.push('\n');
    }
}
