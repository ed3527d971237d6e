//! Core data types shared by the export pipeline.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// File extension every exported and listed file must carry.
pub const DART_EXTENSION: &str = ".dart";

/// Directory name hoisted when computing an aggregator path.
pub const SRC_DIR: &str = "src";

/// A single `export '...';` line found in a Dart source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStatement {
    /// Path between the quotes, e.g. `widgets/button.dart`
    pub target_path: String,
    /// `target_path` without its last segment, e.g. `widgets`
    pub directory: String,
    /// Byte offset of the start of the matched line
    pub byte_offset: usize,
    /// The matched line, without its line terminator
    pub raw_line: String,
}

impl ExportStatement {
    pub fn end_offset(&self) -> usize {
        self.byte_offset + self.raw_line.len()
    }
}

/// Statements grouped by directory, in order of first appearance.
pub type ExportGroup = IndexMap<String, Vec<ExportStatement>>;

/// Result of scanning one source text.
#[derive(Debug, Clone, Default)]
pub struct ParsedExports {
    pub total: usize,
    pub groups: ExportGroup,
}

impl ParsedExports {
    /// Statements that target `directory`, empty if none do.
    pub fn group(&self, directory: &str) -> &[ExportStatement] {
        self.groups.get(directory).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrimarySelection {
    pub directory: String,
    pub count: usize,
}

impl PrimarySelection {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Where the file list came from and how exports should be labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetResolution {
    pub resolved_directory: PathBuf,
    /// Directory prefix used in generated export lines
    pub label: String,
    pub file_names: Vec<String>,
    /// True iff a (variant of the) primary directory exists on disk
    pub in_target_mode: bool,
}

/// Runtime configuration, merged from config files and CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glob patterns matched against file names to leave out of export lists
    #[serde(deserialize_with = "deserialize_string_list")]
    pub exclude_globs: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    Single(String),
    List(Vec<String>),
}

/// Accept either `["a", "b"]` or `"a, b"`.
fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match StringOrList::deserialize(deserializer)? {
        StringOrList::Single(s) => s.split(',').map(str::to_string).collect::<Vec<_>>(),
        StringOrList::List(items) => items,
    };
    Ok(raw
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}

/// What a run will do once applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedAction {
    /// Rewrite the export block of the source file itself
    RewriteSource { path: PathBuf, original: String, updated: String },
    /// Rewrite an existing aggregator file
    UpdateAggregator { path: PathBuf, original: String, updated: String },
    /// Create a new aggregator file
    CreateAggregator { path: PathBuf, contents: String },
    /// The listed directory holds no `.dart` files
    NoFiles { directory: PathBuf },
}

impl PlannedAction {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RewriteSource { .. } => "rewrite-source",
            Self::UpdateAggregator { .. } => "update-aggregator",
            Self::CreateAggregator { .. } => "create-aggregator",
            Self::NoFiles { .. } => "no-files",
        }
    }

    /// File the action writes to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::RewriteSource { path, .. }
            | Self::UpdateAggregator { path, .. }
            | Self::CreateAggregator { path, .. } => Some(path),
            Self::NoFiles { .. } => None,
        }
    }

    /// Resulting file text, if any.
    pub fn contents(&self) -> Option<&str> {
        match self {
            Self::RewriteSource { updated, .. } | Self::UpdateAggregator { updated, .. } => {
                Some(updated)
            }
            Self::CreateAggregator { contents, .. } => Some(contents),
            Self::NoFiles { .. } => None,
        }
    }

    pub fn changes_anything(&self) -> bool {
        match self {
            Self::RewriteSource { original, updated, .. }
            | Self::UpdateAggregator { original, updated, .. } => original != updated,
            Self::CreateAggregator { .. } => true,
            Self::NoFiles { .. } => false,
        }
    }
}

/// Everything computed for one invocation, before any write.
#[derive(Debug, Clone)]
pub struct UpdatePlan {
    pub source: PathBuf,
    pub parsed: ParsedExports,
    pub primary: PrimarySelection,
    pub resolution: TargetResolution,
    pub action: PlannedAction,
}

/// Result of applying a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    Created(PathBuf),
    Unchanged(PathBuf),
    NoFiles(PathBuf),
}
