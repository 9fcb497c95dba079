use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a chart run. None of these are retried: the
/// first one encountered ends the scan and nothing is rendered.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to walk apps directory {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ChartError>;
