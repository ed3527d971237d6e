//! Path helpers

use std::path::{Path, PathBuf};

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes and normalize
    path.replace('\\', "/")
}

/// Walk up from `start` looking for the Dart package root (a `pubspec.yaml`).
///
/// Returns `start` unchanged when no ancestor holds a pubspec.
pub fn find_package_root(start: &Path) -> PathBuf {
    let mut current = start;
    loop {
        if current.join("pubspec.yaml").is_file() {
            if current != start {
                tracing::debug!(
                    "Using package root {} (detected from {})",
                    current.display(),
                    start.display()
                );
            }
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }
    tracing::debug!("No pubspec.yaml found; using {} as package root", start.display());
    start.to_path_buf()
}
