use super::{ConfigError, SerializableConfig};
use log::debug;
use std::path::Path;
use tokio::fs::read_to_string;

/// Reads a configuration file.
pub async fn read_config(path: &Path) -> Result<SerializableConfig, ConfigError> {
    debug!("reading configuration at {}", path.display());

    Ok(toml::from_str(&read_to_string(path).await?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::compile_config;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;
    use tokio::fs::write;

    #[tokio::test]
    async fn read_file() {
        let directory = tempdir().unwrap();
        let file = directory.path().join("layout-dimen.toml");

        write(
            &file,
            indoc! {r#"
                roots = ["res/layout"]
                concurrency = 8
            "#},
        )
        .await
        .unwrap();

        let config = compile_config(read_config(&file).await.unwrap()).unwrap();

        assert_eq!(
            config.roots().collect::<Vec<_>>(),
            vec![Path::new("res/layout")]
        );
        assert_eq!(config.concurrency(), 8);
    }

    #[tokio::test]
    async fn fail_on_missing_file() {
        let directory = tempdir().unwrap();

        assert!(matches!(
            read_config(&directory.path().join("missing.toml")).await,
            Err(ConfigError::Io(_))
        ));
    }

    #[tokio::test]
    async fn fail_on_invalid_file() {
        let directory = tempdir().unwrap();
        let file = directory.path().join("layout-dimen.toml");

        write(&file, "roots = 42").await.unwrap();

        assert!(matches!(
            read_config(&file).await,
            Err(ConfigError::TomlDeserialize(_))
        ));
    }
}
