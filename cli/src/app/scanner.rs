use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::Path;

use walkdir::WalkDir;

use crate::app::manifest::AppManifest;
use crate::error::{ChartError, Result};
use crate::{App, Config, Version};

/// Walks an apps directory laid out as `<app>/<version>/app.yml` and groups
/// the manifests it finds into [`App`] records.
pub struct AppScanner {
    manifest_file: String,
    sort_platforms: bool,
}

// Derive (app, version) from `<app>/<version>/<manifest>`
pub(crate) fn names_from_manifest_path(path: &Path) -> Option<(String, String)> {
    let version_dir = path.parent()?;
    let version = version_dir.file_name()?;
    let app = version_dir.parent()?.file_name()?;

    Some((
        app.to_string_lossy().into_owned(),
        version.to_string_lossy().into_owned(),
    ))
}

impl AppScanner {
    pub fn new(config: &Config) -> Self {
        Self {
            manifest_file: config.manifest_file.clone(),
            sort_platforms: config.sort_platforms,
        }
    }

    /// Scan `dir` recursively and return every app found, sorted by name.
    ///
    /// Versions keep walk order, which is file-name order within each app
    /// directory. The first manifest seen for an app provides its
    /// description. Any walk, read or parse failure aborts the whole scan.
    pub fn scan_apps(&self, dir: &Path) -> Result<Vec<App>> {
        let mut apps_map: HashMap<String, App> = HashMap::new();
        let mut manifests = 0usize;

        for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|source| ChartError::Walk {
                path: source.path().unwrap_or(dir).to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file()
                || entry.file_name() != OsStr::new(&self.manifest_file)
            {
                continue;
            }

            let path = entry.path();
            let Some((app_name, version_name)) = names_from_manifest_path(path) else {
                tracing::warn!(
                    "Skipping {}: not inside an <app>/<version> directory",
                    path.display()
                );
                continue;
            };

            let manifest = AppManifest::from_file(path)?;
            let mut platforms = manifest.platforms();
            if self.sort_platforms {
                platforms.sort();
            }
            tracing::debug!(
                "Found {} {} ({} platforms)",
                app_name,
                version_name,
                platforms.len()
            );
            manifests += 1;

            let version = Version::new(version_name, platforms);

            match apps_map.entry(app_name) {
                Entry::Occupied(mut existing) => {
                    let app = existing.get_mut();
                    let description = manifest.description();
                    if !description.is_empty() && description != app.description {
                        tracing::warn!(
                            "App {} version {} has a different description, keeping the first one",
                            app.name,
                            version.name
                        );
                    }
                    app.versions.push(version);
                }
                Entry::Vacant(slot) => {
                    let app = App::new(slot.key().clone(), manifest.description(), version);
                    slot.insert(app);
                }
            }
        }

        let mut apps: Vec<App> = apps_map.into_values().collect();
        apps.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::info!(
            "Scanned {} manifests into {} apps from {}",
            manifests,
            apps.len(),
            dir.display()
        );

        Ok(apps)
    }
}
