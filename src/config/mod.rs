//! Configuration management for `zenith.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `[base]`     | Blog metadata (title, description, author)     |
//! | `[editor]`   | Draft persistence location, default folder     |
//! | `[generate]` | Generative drafting service (model, key, tone) |
//! | `[extra]`    | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Zenith"
//! description = "Thoughts, stories and ideas"
//! author = "Alice"
//!
//! [editor]
//! default_folder = "blog/engineering"
//!
//! [generate]
//! model = "gemini-2.5-flash"
//! tone = "professional"
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```
//!
//! A missing config file is not an error: the engine is fully usable on
//! defaults, and the file only narrows behavior.

mod base;
pub mod defaults;
mod editor;
mod error;
mod generate;

pub use base::BaseConfig;
pub use editor::EditorConfig;
pub use generate::GenerateConfig;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

/// Root configuration structure representing zenith.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ZenithConfig {
    /// Basic blog information
    #[serde(default)]
    pub base: BaseConfig,

    /// Editor settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Generative drafting settings
    #[serde(default)]
    pub generate: GenerateConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl ZenithConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: ZenithConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load configuration for a CLI invocation.
    ///
    /// Reads the file named by `--config` when it exists, falls back to
    /// defaults otherwise, applies CLI overrides, and validates.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = if cli.config.exists() {
            Self::from_path(&cli.config)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments
    fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(author) = &cli.author {
            self.base.author = author.clone();
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.base.author.trim().is_empty() {
            bail!(ConfigError::Validation(
                "[base.author] must not be empty".into()
            ));
        }

        if self.generate.model.is_empty() {
            bail!(ConfigError::Validation(
                "[generate.model] must not be empty".into()
            ));
        }

        if !self.generate.endpoint.starts_with("http") {
            bail!(ConfigError::Validation(
                "[generate.endpoint] must start with http:// or https://".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_full() {
        let config = r#"
            [base]
            title = "My Blog"
            description = "A test blog"
            author = "Test Author"

            [editor]
            default_folder = "blog/tests"

            [generate]
            tone = "casual"
        "#;
        let config = ZenithConfig::from_str(config).unwrap();

        assert_eq!(config.base.title, "My Blog");
        assert_eq!(config.base.author, "Test Author");
        assert_eq!(config.editor.default_folder, "blog/tests");
        assert_eq!(config.generate.tone, "casual");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [base
            title = "My Blog"
        "#;
        assert!(ZenithConfig::from_str(invalid_config).is_err());
    }

    #[test]
    fn test_default_config_validates() {
        let config = ZenithConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_author() {
        let mut config = ZenithConfig::default();
        config.base.author = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_endpoint() {
        let mut config = ZenithConfig::default();
        config.generate.endpoint = "ftp://example.com".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_extra_fields() {
        let config = r#"
            [extra]
            custom_field = "custom_value"
            number_field = 42
        "#;
        let config: ZenithConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.extra.get("custom_field").and_then(|v| v.as_str()),
            Some("custom_value")
        );
        assert_eq!(
            config.extra.get("number_field").and_then(|v| v.as_integer()),
            Some(42)
        );
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [unknown_section]
            field = "value"
        "#;
        let result: Result<ZenithConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
