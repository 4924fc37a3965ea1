use crate::error::Result;
use async_trait::async_trait;

/// Information about a translator backend
#[derive(Debug, Clone)]
pub struct TranslatorInfo {
    /// Human-readable name
    pub name: &'static str,
    /// Whether this translator requires an API key
    pub requires_api_key: bool,
}

/// Trait for translation backends
#[async_trait]
pub trait Translator: Send + Sync {
    /// Get information about this translator
    fn info(&self) -> TranslatorInfo;

    /// Get the translator name (convenience method)
    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Translate text into Persian
    async fn translate(&self, text: &str) -> Result<String>;
}
