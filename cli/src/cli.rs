use std::path::PathBuf;

use clap::builder::styling::{Color, Style};
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

/// Render a markdown chart of an apps directory
#[derive(Debug, Parser)]
#[command(name = "apps-chart")]
#[command(about = "Render a markdown chart of an apps directory", long_about = None)]
#[command(styles = get_styles())]
#[command(arg_required_else_help = true)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Directory laid out as <app>/<version>/app.yml
    #[arg(required = true, value_name = "APPS_DIR")]
    pub apps_dir: Option<PathBuf>,

    /// Write the chart to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Sort platforms by name before assigning emojis
    #[arg(long)]
    pub sort_platforms: bool,

    /// TOML configuration file
    #[arg(short, long, env = "APPS_CHART_CONFIG", hide_env = true)]
    #[arg(value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completions for a given shell
    #[command(aliases = ["complete"])]
    Completions {
        /// The shell to generate completions for
        shell: Shell,
    },
}

// Original color
const BLURPLE: (u8, u8, u8) = (90, 69, 254);

// Generic gradient
const PINK: (u8, u8, u8) = (255, 43, 137);

// From switch palette
const BRIGHT_MAGENTA: (u8, u8, u8) = (228, 180, 255);

// From spot palette
const BRIGHTER_MAGENTA: (u8, u8, u8) = (248, 235, 255);

// From skip gradient
const BRIGHT_GREEN: (u8, u8, u8) = (87, 251, 219);

pub fn get_styles() -> clap::builder::Styles {
    let heading = Style::new()
        .bold()
        .underline()
        .fg_color(Some(Color::Rgb(BLURPLE.into())));

    clap::builder::Styles::styled()
        .usage(heading)
        .header(heading)
        .literal(Style::new().fg_color(Some(Color::Rgb(BRIGHT_MAGENTA.into()))))
        .invalid(Style::new().bold().fg_color(Some(Color::Rgb(PINK.into()))))
        .error(Style::new().bold().fg_color(Some(Color::Rgb(PINK.into()))))
        .valid(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Rgb(BRIGHT_GREEN.into()))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Rgb(BRIGHTER_MAGENTA.into()))))
}
