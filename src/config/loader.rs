//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const NESTED_SECTIONS: [&str; 2] = ["dart-exports", "dart_exports"];
const PUBSPEC: &str = "pubspec.yaml";

pub fn load_config(package_root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(package_root),
    };

    let Some(config_file) = discovered else {
        return Ok(load_pubspec_section(package_root));
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            // Auto-discovered: warn and fall back to defaults
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, supporting a nested [dart-exports] or [dart_exports] table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = NESTED_SECTIONS.iter().find_map(|key| raw.get(*key).cloned()).unwrap_or(raw);

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested dart-exports or dart_exports mapping.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = NESTED_SECTIONS.iter().find_map(|key| raw.get(*key).cloned()).unwrap_or(raw);

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

/// Read the `dart_exports:` section of `pubspec.yaml`, if there is one.
fn load_pubspec_section(package_root: &Path) -> Config {
    let pubspec = package_root.join(PUBSPEC);
    let Ok(content) = fs::read_to_string(&pubspec) else {
        return Config::default();
    };

    let section = serde_yaml::from_str::<serde_yaml::Value>(&content)
        .ok()
        .and_then(|raw| NESTED_SECTIONS.iter().find_map(|key| raw.get(*key).cloned()));
    let Some(section) = section else {
        return Config::default();
    };

    match serde_yaml::from_value(section) {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", pubspec.display());
            cfg
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid dart_exports section in {}: {}", pubspec.display(), e);
            Config::default()
        }
    }
}

fn discover_config(package_root: &Path) -> Option<PathBuf> {
    let candidates = [
        "dart-exports.toml",
        ".dart-exports.toml",
        "dart-exports.yaml",
        ".dart-exports.yaml",
        "dart-exports.yml",
    ];

    for candidate in candidates {
        let path = package_root.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}
