use markdown_press_engine::{ConvertError, OutputNode, TagNames, compile_document_with};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings a caller passes to the engine.
///
/// ```toml
/// [tags]
/// paragraph = "p"
/// heading-prefix = "h"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tags: TagNames,
}

impl Config {
    /// Loads a config file. A missing file is `Ok(None)`, not an error.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Compiles a document with this config's tag vocabulary.
    pub fn compile(&self, document: &str) -> Result<OutputNode, ConvertError> {
        compile_document_with(document, &self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            tags: TagNames::html(),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_tags_override_defaults() {
        let config_content = r#"
[tags]
paragraph = "p"
heading-prefix = "h"
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.tags.paragraph, "p");
        assert_eq!(config.tags.heading(2), "h2");
        assert_eq!(config.tags.document, "document");
        assert_eq!(config.tags.list_item, "list-item");
    }

    #[test]
    fn test_empty_file_is_default_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[tags\nparagraph = ").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            tags: TagNames::html(),
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_compile_uses_configured_tags() {
        let config = Config {
            tags: TagNames::html(),
        };

        let doc = config.compile("# Hi\n\n_there_").unwrap();

        assert_eq!(doc.serialize(), "<div><h1>Hi</h1><p><i>there</i></p></div>");
    }

    #[test]
    fn test_blank_configured_tag_fails_compile() {
        let config: Config = toml::from_str("[tags]\ndocument = \"\"").unwrap();

        assert!(matches!(
            config.compile("text"),
            Err(ConvertError::Structure(_))
        ));
    }
}
