/// This module defines an App as discovered from a tree of `app.yml` files.
pub(crate) mod manifest;
pub(crate) mod scanner;


/// One release of an app, named after the directory holding its manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub name: String,
    pub platforms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub name: String,
    pub description: String,
    pub versions: Vec<Version>,
}

impl Version {
    pub fn new(name: impl Into<String>, platforms: Vec<String>) -> Self {
        Self {
            name: name.into(),
            platforms,
        }
    }
}

impl App {
    /// An app always starts from the first version found for it.
    pub fn new(name: impl Into<String>, description: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            versions: vec![version],
        }
    }
}
