//! Aggregator ("barrel") file creation and refresh.

use super::parser::parse_exports;
use super::rewrite::{export_lines, rewrite_exports};
use crate::domain::{PlannedAction, DART_EXTENSION, SRC_DIR};
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Location of the aggregator for a scanned directory and the label its
/// export lines use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorTarget {
    pub path: PathBuf,
    pub label: String,
}

/// Compute where the aggregator for `scanned_dir` lives.
///
/// `lib/widgets` maps to `lib/widgets.dart`. A directory directly under a `src`
/// directory is hoisted one level: `lib/src/widgets` maps to `lib/widgets.dart`
/// with exports labelled `src/widgets`.
pub fn aggregator_target(scanned_dir: &Path) -> Result<AggregatorTarget> {
    let root_name = scanned_dir
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Directory has no usable name: {}", scanned_dir.display()))?;
    let parent = scanned_dir
        .parent()
        .with_context(|| format!("Directory has no parent: {}", scanned_dir.display()))?;
    let file_name = format!("{}{}", root_name, DART_EXTENSION);

    let under_src = parent.file_name().and_then(|n| n.to_str()) == Some(SRC_DIR);
    match parent.parent() {
        Some(grandparent) if under_src => Ok(AggregatorTarget {
            path: grandparent.join(file_name),
            label: format!("{}/{}", SRC_DIR, root_name),
        }),
        _ => Ok(AggregatorTarget { path: parent.join(file_name), label: root_name.to_string() }),
    }
}

/// Plan the refresh or creation of the aggregator at `target`.
pub fn plan_aggregator(target: AggregatorTarget, file_names: &[String]) -> Result<PlannedAction> {
    match fs::read_to_string(&target.path) {
        Ok(original) => {
            let parsed = parse_exports(&original);
            let updated =
                rewrite_exports(&original, parsed.group(&target.label), &target.label, file_names)?;
            tracing::debug!("Refreshing aggregator {}", target.path.display());
            Ok(PlannedAction::UpdateAggregator { path: target.path, original, updated })
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let mut contents = export_lines(&target.label, file_names).join("\n");
            contents.push('\n');
            tracing::debug!("Creating aggregator {}", target.path.display());
            Ok(PlannedAction::CreateAggregator { path: target.path, contents })
        }
        Err(err) => Err(err)
            .with_context(|| format!("Failed to read aggregator {}", target.path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_target_hoists_src_directory() {
        let target = aggregator_target(Path::new("/proj/lib/src/widgets")).expect("target");
        assert_eq!(target.path, PathBuf::from("/proj/lib/widgets.dart"));
        assert_eq!(target.label, "src/widgets");
    }

    #[test]
    fn test_target_is_sibling_file() {
        let target = aggregator_target(Path::new("/proj/lib/widgets")).expect("target");
        assert_eq!(target.path, PathBuf::from("/proj/lib/widgets.dart"));
        assert_eq!(target.label, "widgets");
    }

    #[test]
    fn test_target_hoists_only_one_src_level() {
        let target = aggregator_target(Path::new("/proj/src/src/widgets")).expect("target");
        assert_eq!(target.path, PathBuf::from("/proj/src/widgets.dart"));
        assert_eq!(target.label, "src/widgets");
    }

    #[test]
    fn test_creates_missing_aggregator() {
        let tmp = TempDir::new().expect("tmp");
        let scanned = tmp.path().join("lib/src/widgets");
        fs::create_dir_all(&scanned).expect("mkdir");

        let target = aggregator_target(&scanned).expect("target");
        let action = plan_aggregator(target, &names(&["b.dart", "a.dart"])).expect("plan");
        assert_eq!(
            action,
            PlannedAction::CreateAggregator {
                path: tmp.path().join("lib/widgets.dart"),
                contents: "export 'src/widgets/a.dart';\nexport 'src/widgets/b.dart';\n".into(),
            }
        );
    }

    #[test]
    fn test_updates_existing_aggregator_group() {
        let tmp = TempDir::new().expect("tmp");
        let scanned = tmp.path().join("lib/widgets");
        fs::create_dir_all(&scanned).expect("mkdir");
        let original = "library widgets;\n\nexport 'widgets/gone.dart';\nexport 'other/keep.dart';\n";
        fs::write(tmp.path().join("lib/widgets.dart"), original).expect("write");

        let target = aggregator_target(&scanned).expect("target");
        let action = plan_aggregator(target, &names(&["a.dart"])).expect("plan");
        match action {
            PlannedAction::UpdateAggregator { path, original: before, updated } => {
                assert_eq!(path, tmp.path().join("lib/widgets.dart"));
                assert_eq!(before, original);
                assert_eq!(
                    updated,
                    "library widgets;\n\nexport 'widgets/a.dart';\nexport 'other/keep.dart';\n"
                );
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }
}
