use super::{Config, error::ConfigError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A serializable configuration.
#[derive(Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializableConfig {
    roots: Option<Vec<PathBuf>>,
    excluded: Option<Vec<String>>,
    concurrency: Option<usize>,
    dry_run: Option<bool>,
}

impl SerializableConfig {
    /// Creates a serializable configuration.
    pub const fn new(
        roots: Option<Vec<PathBuf>>,
        excluded: Option<Vec<String>>,
        concurrency: Option<usize>,
        dry_run: Option<bool>,
    ) -> Self {
        Self {
            roots,
            excluded,
            concurrency,
            dry_run,
        }
    }

    /// Merges another configuration taking precedence over this one.
    pub fn merge(&mut self, other: Self) {
        if other.roots.is_some() {
            self.roots = other.roots;
        }

        if let Some(other) = other.excluded {
            self.excluded.get_or_insert_default().extend(other);
        }

        if other.concurrency.is_some() {
            self.concurrency = other.concurrency;
        }

        if other.dry_run.is_some() {
            self.dry_run = other.dry_run;
        }
    }
}

/// Compiles a configuration.
pub fn compile_config(config: SerializableConfig) -> Result<Config, ConfigError> {
    if let Some(concurrency @ 0) = config.concurrency {
        return Err(ConfigError::InvalidConcurrency(concurrency));
    }

    Ok(Config::new(config.roots.unwrap_or_default())
        .set_excluded(
            config
                .excluded
                .unwrap_or_default()
                .iter()
                .map(|pattern| Regex::new(pattern))
                .collect::<Result<_, _>>()?,
        )
        .set_concurrency(config.concurrency)
        .set_dry_run(config.dry_run.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    #[test]
    fn compile_empty_config() {
        let config = compile_config(SerializableConfig::default()).unwrap();

        assert_eq!(config.roots().count(), 0);
        assert_eq!(config.excluded().count(), 0);
        assert!(!config.dry_run());
    }

    #[test]
    fn compile_full_config() {
        let config = compile_config(
            ::toml::from_str(indoc! {r#"
                roots = ["app/src/main/res/layout"]
                excluded = ["_old\\.xml$"]
                concurrency = 4
                dry_run = true
            "#})
            .unwrap(),
        )
        .unwrap();

        assert_eq!(
            config.roots().collect::<Vec<_>>(),
            vec![Path::new("app/src/main/res/layout")]
        );
        assert!(config.is_excluded(Path::new("res/layout/main_old.xml")));
        assert_eq!(config.concurrency(), 4);
        assert!(config.dry_run());
    }

    #[test]
    fn reject_unknown_fields() {
        assert!(::toml::from_str::<SerializableConfig>("foo = 1").is_err());
    }

    #[test]
    fn reject_zero_concurrency() {
        assert!(matches!(
            compile_config(SerializableConfig::new(None, None, Some(0), None)),
            Err(ConfigError::InvalidConcurrency(0))
        ));
    }

    #[test]
    fn reject_invalid_pattern() {
        assert!(matches!(
            compile_config(SerializableConfig::new(
                None,
                Some(vec!["(".into()]),
                None,
                None
            )),
            Err(ConfigError::Regex(_))
        ));
    }

    #[test]
    fn merge_configs() {
        let mut config = SerializableConfig::new(
            Some(vec!["a/layout".into()]),
            Some(vec!["x".into()]),
            Some(2),
            Some(false),
        );

        config.merge(SerializableConfig::new(
            None,
            Some(vec!["y".into()]),
            None,
            Some(true),
        ));

        assert_eq!(
            config,
            SerializableConfig::new(
                Some(vec!["a/layout".into()]),
                Some(vec!["x".into(), "y".into()]),
                Some(2),
                Some(true),
            )
        );
    }
}
