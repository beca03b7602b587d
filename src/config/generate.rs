//! `[generate]` section configuration.
//!
//! Settings for the generative drafting service.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[generate]` section in zenith.toml.
///
/// # Example
/// ```toml
/// [generate]
/// model = "gemini-2.5-flash"
/// api_key_env = "GEMINI_API_KEY"
/// tone = "casual"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Model identifier sent to the generation endpoint.
    #[serde(default = "defaults::generate::model")]
    #[educe(Default = defaults::generate::model())]
    pub model: String,

    /// Environment variable holding the API key.
    /// The key itself never lives in the config file.
    #[serde(default = "defaults::generate::api_key_env")]
    #[educe(Default = defaults::generate::api_key_env())]
    pub api_key_env: String,

    /// Base URL of the generation API.
    #[serde(default = "defaults::generate::endpoint")]
    #[educe(Default = defaults::generate::endpoint())]
    pub endpoint: String,

    /// Default writing tone for drafted posts.
    #[serde(default = "defaults::generate::tone")]
    #[educe(Default = defaults::generate::tone())]
    pub tone: String,
}

#[cfg(test)]
mod tests {
    use super::super::ZenithConfig;

    #[test]
    fn test_generate_config() {
        let config = r#"
            [generate]
            model = "gemini-2.0-pro"
            api_key_env = "MY_KEY"
            tone = "casual"
        "#;
        let config: ZenithConfig = toml::from_str(config).unwrap();

        assert_eq!(config.generate.model, "gemini-2.0-pro");
        assert_eq!(config.generate.api_key_env, "MY_KEY");
        assert_eq!(config.generate.tone, "casual");
    }

    #[test]
    fn test_generate_defaults() {
        let config: ZenithConfig = toml::from_str("").unwrap();
        assert_eq!(config.generate.model, "gemini-2.5-flash");
        assert_eq!(config.generate.api_key_env, "GEMINI_API_KEY");
        assert!(config.generate.endpoint.starts_with("https://"));
        assert_eq!(config.generate.tone, "professional");
    }
}
