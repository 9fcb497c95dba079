use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::{ChartError, Result};

/// The two fields read from an `app.yml`. Anything else in the file is
/// ignored.
#[derive(Debug, Default, Deserialize)]
pub struct AppManifest {
    /// Any scalar is accepted and kept as text
    #[serde(default)]
    pub description: Option<Value>,
    /// Only the keys matter, values may be anything (usually empty)
    #[serde(default)]
    pub platforms: Option<Mapping>,
}

impl AppManifest {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| ChartError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse manifest text. Only the first YAML document is read. An empty
    /// document (or one holding only comments) is a manifest with no fields
    /// set.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let Some(document) = serde_yaml::Deserializer::from_str(content).next() else {
            return Ok(Self::default());
        };
        let value = Value::deserialize(document)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value)
    }

    pub fn description(&self) -> String {
        match &self.description {
            Some(Value::Null) | None => String::new(),
            Some(value) => scalar_to_string(value).unwrap_or_else(|| {
                tracing::warn!("Ignoring non-scalar description: {:?}", value);
                String::new()
            }),
        }
    }

    /// Platform identifiers in the order they appear in the file.
    pub fn platforms(&self) -> Vec<String> {
        let Some(platforms) = &self.platforms else {
            return Vec::new();
        };

        platforms
            .iter()
            .filter_map(|(key, _)| {
                let platform = scalar_to_string(key);
                if platform.is_none() {
                    tracing::warn!("Ignoring non-scalar platform key: {:?}", key);
                }
                platform
            })
            .collect()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
