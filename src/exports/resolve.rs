//! Mapping a primary directory name onto the file system.

use super::listing::FileListBuilder;
use crate::domain::{TargetResolution, SRC_DIR};
use anyhow::{Context, Result};
use std::path::Path;

/// Find the directory whose `.dart` files should be exported.
///
/// Tries `containing/primary`, then `containing/src/primary`. An empty
/// `primary` stands for `containing` itself (exports of sibling files). If
/// neither candidate can be listed, falls back to listing `containing` with
/// target mode off.
pub fn resolve_target(
    containing_dir: &Path,
    primary: &str,
    lister: &FileListBuilder,
) -> Result<TargetResolution> {
    let candidates = if primary.is_empty() {
        [String::new(), SRC_DIR.to_string()]
    } else {
        [primary.to_string(), format!("{}/{}", SRC_DIR, primary)]
    };
    for label in candidates {
        let dir = if label.is_empty() {
            containing_dir.to_path_buf()
        } else {
            containing_dir.join(&label)
        };
        match lister.list(&dir) {
            Ok(file_names) => {
                tracing::debug!("Resolved target directory {}", dir.display());
                return Ok(TargetResolution {
                    resolved_directory: dir,
                    label,
                    file_names,
                    in_target_mode: true,
                });
            }
            Err(err) => tracing::debug!("No target at {}: {:#}", dir.display(), err),
        }
    }

    untargeted(containing_dir, lister)
}

/// List `dir` itself; used when no target subdirectory exists.
pub fn untargeted(dir: &Path, lister: &FileListBuilder) -> Result<TargetResolution> {
    let file_names = lister
        .list(dir)
        .with_context(|| format!("Failed to list containing directory {}", dir.display()))?;
    let label = dir.file_name().and_then(|n| n.to_str()).unwrap_or_default().to_string();
    Ok(TargetResolution {
        resolved_directory: dir.to_path_buf(),
        label,
        file_names,
        in_target_mode: false,
    })
}
