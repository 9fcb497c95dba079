pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod utils;

pub use app::{manifest::AppManifest, scanner::AppScanner, App, Version};
pub use chart::{ChartGenerator, ChartRenderer, PlatformEmojis};
pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::ChartError;
