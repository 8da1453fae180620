use crate::error::{CompassError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "compass.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".compass/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/compass/config.toml";

/// Optional tool configuration living next to the catalog. Scoring constants
/// are not configurable; only file names and output preferences are.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompassConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    pub directions: Option<String>,
    pub questions: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl CompassConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(format) = &self.output.format {
            if !matches!(format.as_str(), "json" | "md") {
                return Err(CompassError::ConfigParse(format!(
                    "unsupported output.format: {format} (expected json or md)"
                )));
            }
        }
        for (key, name) in [
            (&self.catalog.directions, "catalog.directions"),
            (&self.catalog.questions, "catalog.questions"),
        ] {
            if let Some(file) = key {
                if file.trim().is_empty() {
                    return Err(CompassError::ConfigParse(format!(
                        "{name} must be a non-empty file name"
                    )));
                }
            }
        }
        Ok(())
    }
}

pub fn load_config(root: &Path) -> Result<Option<CompassConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<CompassConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: CompassConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CompassError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CompassError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
