//! Minimal-edit rewriting of an export block.
//!
//! The rewrite is expressed as a list of [`TextEdit`]s computed against the
//! original text. [`apply_edits`] applies them from the highest start offset
//! down so that every range still refers to untouched text when it is spliced.

use crate::domain::ExportStatement;
use anyhow::Result;
use std::ops::Range;

/// Replace `range` of the original text with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl TextEdit {
    pub fn new(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self { range, replacement: replacement.into() }
    }
}

/// One sorted `export '<label>/<file>';` line per file name.
pub fn export_lines(label: &str, file_names: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = file_names
        .iter()
        .map(|name| {
            if label.is_empty() {
                format!("export '{}';", name)
            } else {
                format!("export '{}/{}';", label, name)
            }
        })
        .collect();
    lines.sort();
    lines
}

/// Compute the edits that make `group` list exactly `lines`.
///
/// An empty `group` appends the block at the end of `text`. Otherwise the first
/// statement's line becomes the whole block and the remaining lines are removed.
pub fn plan_edits(text: &str, group: &[ExportStatement], lines: &[String]) -> Vec<TextEdit> {
    let block = lines.join("\n");

    let Some((first, rest)) = group.split_first() else {
        let separator = if !text.is_empty() && !text.ends_with('\n') { "\n" } else { "" };
        return vec![TextEdit::new(text.len()..text.len(), format!("{}{}\n", separator, block))];
    };

    let mut edits = Vec::with_capacity(group.len());
    let first_range = line_range(text, first);
    let terminator = if first_range.end > first.end_offset() { "\n" } else { "" };
    edits.push(TextEdit::new(first_range, format!("{}{}", block, terminator)));
    for statement in rest {
        edits.push(TextEdit::new(line_range(text, statement), ""));
    }
    edits
}

/// Range covering a statement's line and its trailing `\n`, if present.
fn line_range(text: &str, statement: &ExportStatement) -> Range<usize> {
    let end = statement.end_offset();
    if text[end..].starts_with('\n') {
        statement.byte_offset..end + 1
    } else {
        statement.byte_offset..end
    }
}

/// Apply edits made against `text`, highest start offset first.
///
/// Fails if two edits overlap or a range falls outside `text`.
pub fn apply_edits(text: &str, mut edits: Vec<TextEdit>) -> Result<String> {
    edits.sort_by(|a, b| b.range.start.cmp(&a.range.start));

    let mut buffer = text.to_string();
    let mut floor = text.len();
    for edit in edits {
        if edit.range.start > edit.range.end || edit.range.end > floor {
            anyhow::bail!(
                "Edit {:?} overlaps a later edit or exceeds the text ({} bytes)",
                edit.range,
                text.len()
            );
        }
        if !text.is_char_boundary(edit.range.start) || !text.is_char_boundary(edit.range.end) {
            anyhow::bail!("Edit {:?} does not fall on character boundaries", edit.range);
        }
        buffer.replace_range(edit.range.clone(), &edit.replacement);
        floor = edit.range.start;
    }
    Ok(buffer)
}

/// Rewrite `text` so that `group` lists exactly `file_names` under `label`.
pub fn rewrite_exports(
    text: &str,
    group: &[ExportStatement],
    label: &str,
    file_names: &[String],
) -> Result<String> {
    let lines = export_lines(label, file_names);
    let edits = plan_edits(text, group, &lines);
    tracing::debug!("Applying {} edits for {} export lines", edits.len(), lines.len());
    apply_edits(text, edits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exports::parser::parse_exports;
    use similar_asserts::assert_eq;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn rewrite(text: &str, label: &str, files: &[&str]) -> String {
        let parsed = parse_exports(text);
        rewrite_exports(text, parsed.group(label), label, &names(files)).expect("rewrite")
    }

    #[test]
    fn test_export_lines_are_sorted() {
        let lines = export_lines("widgets", &names(&["a.dart", "c.dart", "b.dart"]));
        assert_eq!(
            lines.join("\n").as_str(),
            "export 'widgets/a.dart';\nexport 'widgets/b.dart';\nexport 'widgets/c.dart';"
        );
    }

    #[test]
    fn test_appends_block_after_missing_newline() {
        let text = "library widgets;";
        let out = rewrite(text, "widgets", &["b.dart", "a.dart"]);
        assert_eq!(
            out.as_str(),
            "library widgets;\nexport 'widgets/a.dart';\nexport 'widgets/b.dart';\n"
        );
    }

    #[test]
    fn test_appends_block_without_extra_newline() {
        let out = rewrite("library widgets;\n", "widgets", &["a.dart"]);
        assert_eq!(out.as_str(), "library widgets;\nexport 'widgets/a.dart';\n");
    }

    #[test]
    fn test_appends_to_empty_text() {
        let out = rewrite("", "widgets", &["a.dart"]);
        assert_eq!(out.as_str(), "export 'widgets/a.dart';\n");
    }

    #[test]
    fn test_collapses_group_at_first_statement() {
        let text = concat!(
            "library app;\n",
            "export 'widgets/old.dart';\n",
            "export 'models/user.dart';\n",
            "export 'widgets/stale.dart';\n",
            "\n",
            "void main() {}\n",
        );
        let out = rewrite(text, "widgets", &["x.dart"]);
        assert_eq!(
            out.as_str(),
            concat!(
                "library app;\n",
                "export 'widgets/x.dart';\n",
                "export 'models/user.dart';\n",
                "\n",
                "void main() {}\n",
            )
        );
    }

    #[test]
    fn test_last_line_without_newline() {
        let text = "export 'widgets/a.dart';\nexport 'widgets/b.dart';";
        let out = rewrite(text, "widgets", &["c.dart", "a.dart"]);
        assert_eq!(out.as_str(), "export 'widgets/a.dart';\nexport 'widgets/c.dart';\n");

        let single = rewrite("library x;\nexport 'widgets/a.dart';", "widgets", &["b.dart"]);
        assert_eq!(single.as_str(), "library x;\nexport 'widgets/b.dart';");
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let text = "library app;\nexport 'widgets/z.dart';\nexport 'models/m.dart';\n";
        let files = ["b.dart", "a.dart"];
        let once = rewrite(text, "widgets", &files);
        let twice = rewrite(&once, "widgets", &files);
        assert_eq!(once, twice);

        let appended = rewrite("library app;", "widgets", &files);
        assert_eq!(rewrite(&appended, "widgets", &files), appended);
    }

    #[test]
    fn test_apply_edits_order_does_not_matter() {
        let text = "0123456789";
        let edits = vec![
            TextEdit::new(1..2, "one"),
            TextEdit::new(8..10, ""),
            TextEdit::new(4..6, "-"),
        ];
        let mut reversed = edits.clone();
        reversed.reverse();
        assert_eq!(apply_edits(text, edits).expect("apply").as_str(), "0one23-67");
        assert_eq!(apply_edits(text, reversed).expect("apply").as_str(), "0one23-67");
    }

    #[test]
    fn test_apply_edits_rejects_overlap() {
        let edits = vec![TextEdit::new(0..5, "a"), TextEdit::new(3..7, "b")];
        assert!(apply_edits("0123456789", edits).is_err());
    }

    #[test]
    fn test_apply_edits_rejects_out_of_bounds() {
        assert!(apply_edits("abc", vec![TextEdit::new(2..9, "")]).is_err());
    }

    #[test]
    fn test_apply_edits_allows_insert_at_end() {
        let out = apply_edits("abc", vec![TextEdit::new(3..3, "d")]).expect("apply");
        assert_eq!(out.as_str(), "abcd");
    }
}
