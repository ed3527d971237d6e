//! Non-recursive listing of `.dart` files.

use crate::domain::DART_EXTENSION;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Lists the `.dart` files directly inside a directory.
pub struct FileListBuilder {
    excludes: GlobSet,
}

impl FileListBuilder {
    /// Build a lister that skips file names matching any of `exclude_globs`.
    pub fn new(exclude_globs: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_globs {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(err) => tracing::warn!("Ignoring invalid exclude glob '{}': {}", pattern, err),
            }
        }
        Ok(Self { excludes: builder.build()? })
    }

    /// File names of the `.dart` entries in `dir`, sorted by name.
    ///
    /// Fails if `dir` is missing, is not a directory, or cannot be read.
    pub fn list(&self, dir: &Path) -> Result<Vec<String>> {
        let metadata =
            fs::metadata(dir).with_context(|| format!("Cannot access {}", dir.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!("Not a directory: {}", dir.display());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Failed listing {}", dir.display()))?;
            if entry.file_type().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !name.ends_with(DART_EXTENSION) {
                continue;
            }
            if self.excludes.is_match(name) {
                tracing::debug!("Excluded {}", name);
                continue;
            }
            names.push(name.to_string());
        }

        tracing::debug!("Found {} dart files in {}", names.len(), dir.display());
        Ok(names)
    }
}
