//! Primary directory selection.

use crate::domain::{ExportGroup, PrimarySelection};

/// Pick the directory referenced by the most export statements.
///
/// Ties go to the directory that reached the winning count first while
/// reading the file top to bottom. An empty grouping yields `("", 0)`.
pub fn select_primary(groups: &ExportGroup) -> PrimarySelection {
    let best = groups
        .iter()
        .filter(|(_, statements)| !statements.is_empty())
        .map(|(directory, statements)| {
            let count = statements.len();
            // offset at which this group reached its final count
            let reached_at = statements[count - 1].byte_offset;
            (directory, count, reached_at)
        })
        .fold(None, |best: Option<(&String, usize, usize)>, candidate| match best {
            Some(current)
                if current.1 > candidate.1
                    || (current.1 == candidate.1 && current.2 <= candidate.2) =>
            {
                Some(current)
            }
            _ => Some(candidate),
        });

    match best {
        Some((directory, count, _)) => PrimarySelection { directory: directory.clone(), count },
        None => PrimarySelection::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exports::parser::parse_exports;

    fn select(text: &str) -> PrimarySelection {
        select_primary(&parse_exports(text).groups)
    }

    #[test]
    fn test_empty_group_has_no_primary() {
        let selection = select("void main() {}\n");
        assert!(selection.is_empty());
        assert_eq!(selection.directory, "");
    }

    #[test]
    fn test_strict_maximum_wins() {
        let selection = select(concat!(
            "export 'models/a.dart';\n",
            "export 'widgets/a.dart';\n",
            "export 'widgets/b.dart';\n",
        ));
        assert_eq!(selection, PrimarySelection { directory: "widgets".into(), count: 2 });
    }

    #[test]
    fn test_tie_keeps_first_directory_to_reach_count() {
        let selection = select(concat!(
            "export 'models/a.dart';\n",
            "export 'widgets/a.dart';\n",
        ));
        assert_eq!(selection.directory, "models");
    }

    #[test]
    fn test_tie_is_decided_by_when_the_count_was_reached() {
        // widgets reaches two statements before models does
        let selection = select(concat!(
            "export 'models/a.dart';\n",
            "export 'widgets/a.dart';\n",
            "export 'widgets/b.dart';\n",
            "export 'models/b.dart';\n",
        ));
        assert_eq!(selection, PrimarySelection { directory: "widgets".into(), count: 2 });
    }
}
