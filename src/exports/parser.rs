//! Export statement scanning.
//!
//! Only lines of the exact shape `export '<path>.dart';` (or the double-quoted
//! form) are recognised. Conditional exports, `show`/`hide` combinators and
//! package URIs without a `.dart` suffix are left alone.

use crate::domain::{ExportGroup, ExportStatement, ParsedExports};
use once_cell::sync::Lazy;
use regex::Regex;

static EXPORT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?m)^[ \t]*export[ \t]+(?:'([^'\r\n]+\.dart)'|"([^"\r\n]+\.dart)");[ \t]*\r?$"#,
    )
    .expect("valid regex")
});

/// Lazily yield every export statement in `text`, top to bottom.
///
/// Matches never overlap and each call starts from the beginning of the input.
pub fn export_statements(text: &str) -> impl Iterator<Item = ExportStatement> + '_ {
    EXPORT_LINE.captures_iter(text).filter_map(|caps| {
        let line = caps.get(0)?;
        let target = caps.get(1).or_else(|| caps.get(2))?.as_str();
        Some(ExportStatement {
            target_path: target.to_string(),
            directory: directory_of(target).to_string(),
            byte_offset: line.start(),
            raw_line: line.as_str().to_string(),
        })
    })
}

/// Directory portion of an export target (`""` for a bare file name).
pub fn directory_of(target: &str) -> &str {
    target.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}

/// Scan `text` and group its export statements by directory.
pub fn parse_exports(text: &str) -> ParsedExports {
    let mut groups = ExportGroup::new();
    let mut total = 0;
    for statement in export_statements(text) {
        total += 1;
        groups.entry(statement.directory.clone()).or_default().push(statement);
    }
    tracing::debug!("Parsed {} export statements in {} groups", total, groups.len());
    ParsedExports { total, groups }
}
