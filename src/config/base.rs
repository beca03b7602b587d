//! `[base]` section configuration.
//!
//! Contains basic blog information like title, description, and the
//! default author name for published posts.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in zenith.toml - basic blog metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Blog"
/// description = "Thoughts, stories and ideas"
/// author = "Alice"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Blog title shown in listings.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Short description of the blog.
    #[serde(default)]
    pub description: String,

    /// Author name stamped on published and exported posts.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::super::ZenithConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "My Blog"
            description = "Thoughts and ideas"
            author = "Alice"
        "#;
        let config: ZenithConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "My Blog");
        assert_eq!(config.base.description, "Thoughts and ideas");
        assert_eq!(config.base.author, "Alice");
    }

    #[test]
    fn test_base_config_defaults() {
        let config: ZenithConfig = toml::from_str("").unwrap();

        assert_eq!(config.base.title, "Zenith");
        assert_eq!(config.base.description, "");
        assert_eq!(config.base.author, "You");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            unknown_field = "should_fail"
        "#;
        let result: Result<ZenithConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
