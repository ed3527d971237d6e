//! Plan summaries for the `info` command.

use crate::domain::{PlannedAction, UpdatePlan};
use crate::utils::normalize_path;
use serde_json::{json, Map, Value};
use std::path::Path;

fn display_path(path: &Path) -> String {
    normalize_path(&path.to_string_lossy())
}

/// JSON document describing a plan.
pub fn plan_to_json(plan: &UpdatePlan) -> Value {
    let mut groups = Map::new();
    for (directory, statements) in &plan.parsed.groups {
        let targets: Vec<Value> =
            statements.iter().map(|s| Value::String(s.target_path.clone())).collect();
        groups.insert(directory.clone(), Value::Array(targets));
    }

    json!({
        "source": display_path(&plan.source),
        "total_exports": plan.parsed.total,
        "groups": Value::Object(groups),
        "primary": {
            "directory": plan.primary.directory,
            "count": plan.primary.count,
        },
        "resolution": {
            "directory": display_path(&plan.resolution.resolved_directory),
            "label": plan.resolution.label,
            "in_target_mode": plan.resolution.in_target_mode,
            "files": plan.resolution.file_names,
        },
        "action": {
            "kind": plan.action.kind(),
            "path": plan.action.path().map(|p| display_path(p)),
            "changed": plan.action.changes_anything(),
        },
    })
}

/// Human-readable summary of a plan.
pub fn render_plan_text(plan: &UpdatePlan) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Source: {}", plan.source.display()));
    lines.push(format!("Export statements: {}", plan.parsed.total));

    if !plan.parsed.groups.is_empty() {
        lines.push("Groups:".to_string());
        for (directory, statements) in &plan.parsed.groups {
            let name = if directory.is_empty() { "." } else { directory.as_str() };
            lines.push(format!("  {}: {}", name, statements.len()));
        }
    }

    lines.push(format!(
        "Primary directory: {} ({} exports)",
        plan.primary.directory, plan.primary.count
    ));
    lines.push(format!(
        "Resolved directory: {} (target mode: {})",
        plan.resolution.resolved_directory.display(),
        if plan.resolution.in_target_mode { "yes" } else { "no" }
    ));
    lines.push(format!("Export label: {}", plan.resolution.label));
    lines.push(format!("Files: {}", plan.resolution.file_names.len()));
    for name in &plan.resolution.file_names {
        lines.push(format!("  {}", name));
    }

    let action = match &plan.action {
        PlannedAction::RewriteSource { path, .. } => format!("rewrite {}", path.display()),
        PlannedAction::UpdateAggregator { path, .. } => {
            format!("update aggregator {}", path.display())
        }
        PlannedAction::CreateAggregator { path, .. } => {
            format!("create aggregator {}", path.display())
        }
        PlannedAction::NoFiles { directory } => {
            format!("nothing (no .dart files in {})", directory.display())
        }
    };
    let suffix = match &plan.action {
        PlannedAction::NoFiles { .. } => "",
        action if action.changes_anything() => "",
        _ => " (already up to date)",
    };
    lines.push(format!("Action: {}{}", action, suffix));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Config, PrimarySelection};
    use crate::exports::plan_update;
    use std::fs;
    use tempfile::TempDir;

    fn sample_plan(tmp: &TempDir) -> UpdatePlan {
        let source = tmp.path().join("app.dart");
        fs::write(&source, "export 'widgets/a.dart';\nexport 'models/m.dart';\n").expect("write");
        fs::create_dir(tmp.path().join("widgets")).expect("mkdir");
        fs::write(tmp.path().join("widgets/a.dart"), "").expect("write");
        fs::write(tmp.path().join("widgets/b.dart"), "").expect("write");
        plan_update(&source, &Config::default()).expect("plan")
    }

    #[test]
    fn test_plan_json_shape() {
        let tmp = TempDir::new().expect("tmp");
        let plan = sample_plan(&tmp);
        assert_eq!(plan.primary, PrimarySelection { directory: "widgets".into(), count: 1 });

        let value = plan_to_json(&plan);
        assert_eq!(value["total_exports"], 2);
        assert_eq!(value["groups"]["widgets"][0], "widgets/a.dart");
        assert_eq!(value["primary"]["directory"], "widgets");
        assert_eq!(value["resolution"]["in_target_mode"], true);
        assert_eq!(value["resolution"]["files"][1], "b.dart");
        assert_eq!(value["action"]["kind"], "rewrite-source");
        assert_eq!(value["action"]["changed"], true);
    }

    #[test]
    fn test_plan_text_mentions_action() {
        let tmp = TempDir::new().expect("tmp");
        let text = render_plan_text(&sample_plan(&tmp));
        assert!(text.contains("Primary directory: widgets (1 exports)"));
        assert!(text.contains("target mode: yes"));
        assert!(text.contains("Action: rewrite"));
        assert!(!text.contains("already up to date"));
    }
}
