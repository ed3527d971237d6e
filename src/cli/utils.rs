//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::Config;
use crate::utils::find_package_root;

/// Arguments shared by commands that run the export pipeline.
#[derive(Args)]
pub struct TargetArgs {
    /// Dart file (or directory) to update
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Path to config file (dart-exports.toml or dart-exports.yaml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Leave out files matching these globs (comma-separated, e.g. '*.g.dart')
    #[arg(short = 'e', long, value_name = "GLOBS")]
    pub exclude: Option<String>,
}

impl TargetArgs {
    /// Canonical input path plus the merged configuration for it.
    pub fn resolve(&self) -> Result<(PathBuf, Config)> {
        if !self.path.exists() {
            anyhow::bail!("Path does not exist: {}", self.path.display());
        }
        let path = self
            .path
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", self.path.display()))?;

        let search_start = if path.is_dir() {
            path.clone()
        } else {
            path.parent().map(|p| p.to_path_buf()).unwrap_or_else(|| path.clone())
        };
        let package_root = find_package_root(&search_start);

        let file_config = load_config(&package_root, self.config.as_deref())?;
        let overrides = CliOverrides { exclude_globs: parse_csv(&self.exclude) };
        Ok((path, merge_cli_with_config(file_config, overrides)))
    }
}

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}

#[cfg(test)]
mod tests {
    use super::parse_csv;

    #[test]
    fn parse_csv_trims_and_drops_empty() {
        let parsed = parse_csv(&Some(" *.g.dart, ,*.freezed.dart ".to_string()));
        assert_eq!(parsed, Some(vec!["*.g.dart".to_string(), "*.freezed.dart".to_string()]));
        assert_eq!(parse_csv(&None), None);
    }
}
