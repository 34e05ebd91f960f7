use crate::constants::{AI_RULE_CONFIG_JSON_FILENAME, AI_RULE_CONFIG_YAML_FILENAME};
use crate::models::Target;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub targets: Option<Vec<String>>,
    pub check_for_updates: Option<bool>,
    pub update_url: Option<String>,
}

fn read_config_file(config_path: &Path) -> Result<Config> {
    let config_content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let is_json = config_path
        .extension()
        .is_some_and(|extension| extension == "json");

    let config = if is_json {
        serde_json::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?
    } else {
        serde_yaml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?
    };

    Ok(config)
}

/// Loads the config from the source directory, YAML first, then JSON.
///
/// A missing, unreadable or invalid file yields `None` so callers fall back
/// to defaults.
pub fn load_config(source_dir: &Path) -> Option<Config> {
    for file_name in [AI_RULE_CONFIG_YAML_FILENAME, AI_RULE_CONFIG_JSON_FILENAME] {
        let config_path = source_dir.join(file_name);
        if !config_path.exists() {
            continue;
        }

        return match read_config_file(&config_path) {
            Ok(config) => {
                debug!(path = %config_path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                warn!("{e:#}. Falling back to defaults");
                None
            }
        };
    }

    None
}

/// Turns configured target names into targets, skipping names that are not
/// supported. Duplicates collapse and the result is in canonical order.
pub fn resolve_config_targets(names: &[String]) -> Vec<Target> {
    let mut targets = BTreeSet::new();
    for name in names {
        match name.parse::<Target>() {
            Ok(target) => {
                targets.insert(target);
            }
            Err(e) => warn!("Ignoring config entry: {e}"),
        }
    }
    targets.into_iter().collect()
}
