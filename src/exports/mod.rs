//! Export block synchronisation for Dart files.
//!
//! A run is split into [`plan_update`], which reads everything it needs and
//! computes the resulting text, and [`apply_plan`], which performs the single
//! write. Nothing is cached between runs.

use crate::domain::{
    Config, Outcome, ParsedExports, PlannedAction, PrimarySelection, TargetResolution, UpdatePlan,
};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub mod bootstrap;
pub mod listing;
pub mod parser;
pub mod primary;
pub mod resolve;
pub mod rewrite;

pub use bootstrap::{aggregator_target, plan_aggregator, AggregatorTarget};
pub use listing::FileListBuilder;
pub use parser::{export_statements, parse_exports};
pub use primary::select_primary;
pub use resolve::resolve_target;
pub use rewrite::{apply_edits, export_lines, rewrite_exports, TextEdit};

/// Compute what updating `path` would do, without writing anything.
///
/// `path` is either a Dart source file or a directory. A directory is scanned
/// directly and only its aggregator file is considered.
pub fn plan_update(path: &Path, config: &Config) -> Result<UpdatePlan> {
    let lister = FileListBuilder::new(&config.exclude_globs)?;
    let path = &std::path::absolute(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    let metadata = fs::metadata(path).with_context(|| format!("Cannot access {}", path.display()))?;

    if metadata.is_dir() {
        tracing::debug!("Scanning directory {}", path.display());
        let resolution = resolve::untargeted(path, &lister)?;
        return finish_plan(
            path,
            ParsedExports::default(),
            PrimarySelection::default(),
            resolution,
            None,
        );
    }

    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed = parse_exports(&text);

    let mut primary = select_primary(&parsed.groups);
    if primary.is_empty() {
        primary.directory =
            path.file_stem().and_then(|s| s.to_str()).unwrap_or_default().to_string();
        tracing::debug!("No exports found, using file name '{}' as directory", primary.directory);
    }

    let containing_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let resolution = resolve_target(containing_dir, &primary.directory, &lister)?;
    tracing::debug!(
        "Primary directory '{}' ({} exports), target mode: {}",
        primary.directory,
        primary.count,
        resolution.in_target_mode
    );

    finish_plan(path, parsed, primary, resolution, Some(text))
}

fn finish_plan(
    path: &Path,
    parsed: ParsedExports,
    primary: PrimarySelection,
    mut resolution: TargetResolution,
    source_text: Option<String>,
) -> Result<UpdatePlan> {
    let in_target_mode = resolution.in_target_mode;
    let action = if resolution.file_names.is_empty() {
        tracing::info!("No dart files found in {}", resolution.resolved_directory.display());
        PlannedAction::NoFiles { directory: resolution.resolved_directory.clone() }
    } else if let Some(original) = source_text.filter(|_| in_target_mode) {
        let updated = rewrite_exports(
            &original,
            parsed.group(&resolution.label),
            &resolution.label,
            &resolution.file_names,
        )?;
        PlannedAction::RewriteSource { path: path.to_path_buf(), original, updated }
    } else {
        let target = aggregator_target(&resolution.resolved_directory)?;
        resolution.label = target.label.clone();
        plan_aggregator(target, &resolution.file_names)?
    };

    Ok(UpdatePlan { source: path.to_path_buf(), parsed, primary, resolution, action })
}

/// Write the result of a plan to disk.
///
/// Files whose text would not change are left untouched.
pub fn apply_plan(plan: &UpdatePlan) -> Result<Outcome> {
    match &plan.action {
        PlannedAction::NoFiles { directory } => Ok(Outcome::NoFiles(directory.clone())),
        PlannedAction::RewriteSource { path, original, updated }
        | PlannedAction::UpdateAggregator { path, original, updated } => {
            if original == updated {
                tracing::debug!("{} already up to date", path.display());
                return Ok(Outcome::Unchanged(path.clone()));
            }
            fs::write(path, updated).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Updated {}", path.display());
            Ok(Outcome::Written(path.clone()))
        }
        PlannedAction::CreateAggregator { path, contents } => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            tracing::info!("Created {}", path.display());
            Ok(Outcome::Created(path.clone()))
        }
    }
}

/// Plan and apply in one step.
pub fn update_exports(path: &Path, config: &Config) -> Result<Outcome> {
    let plan = plan_update(path, config)?;
    apply_plan(&plan)
}
