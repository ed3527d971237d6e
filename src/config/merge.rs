//! Applying CLI flags on top of file configuration

use crate::domain::Config;

/// Settings given on the command line. `None` leaves the file value alone.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub exclude_globs: Option<Vec<String>>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(globs) = cli.exclude_globs {
        config.exclude_globs = globs;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_globs_replace_file_globs() {
        let file = Config { exclude_globs: vec!["*.g.dart".into()] };
        let merged = merge_cli_with_config(
            file,
            CliOverrides { exclude_globs: Some(vec!["*.freezed.dart".into()]) },
        );
        assert_eq!(merged.exclude_globs, vec!["*.freezed.dart"]);
    }

    #[test]
    fn test_missing_cli_value_keeps_file_value() {
        let file = Config { exclude_globs: vec!["*.g.dart".into()] };
        let merged = merge_cli_with_config(file.clone(), CliOverrides::default());
        assert_eq!(merged, file);
    }
}
