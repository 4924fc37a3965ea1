use serde::{Deserialize, Serialize};

/// Default OpenRouter endpoint for the chat-completions API
pub const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";

/// Default model identifier used for translation
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat:free";

/// Translator backend configuration for OpenAI-compatible APIs.
///
/// Supports OpenRouter, DeepSeek, OpenAI, llama.cpp server, and any other
/// OpenAI-compatible API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
}

impl TranslatorConfig {
    /// Create a new translator config
    pub fn new(
        api_base: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            api_key,
            model: model.into(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_key: None,
            model: default_model(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Translator backend configuration
    #[serde(default)]
    pub translator: TranslatorConfig,
}

impl AppConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::error::Error> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            crate::error::Error::ConfigLoad(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content)
            .map_err(|e| crate::error::Error::ConfigLoad(format!("Failed to parse config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translator_config_defaults() {
        let config = TranslatorConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_app_config_parses_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [translator]
            api_key = "sk-test"
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.translator.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.translator.api_base, DEFAULT_API_BASE);
        assert_eq!(config.translator.model, DEFAULT_MODEL);
    }
}
