use anyhow::Result;
use persian_translator_core::{AppConfig, Translator, create_translator};
use std::sync::Arc;

/// Global application state
pub struct AppState {
    /// Translator backend, built once at startup
    pub translator: Arc<dyn Translator>,
    /// Base configuration
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let translator = create_translator(&config.translator)
            .map_err(|e| anyhow::anyhow!("Failed to create translator: {e}"))?;

        Ok(Self { translator, config })
    }

    /// Build state around an arbitrary translator (used with test doubles).
    #[cfg(test)]
    pub fn with_translator(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            config: AppConfig::default(),
        }
    }
}
