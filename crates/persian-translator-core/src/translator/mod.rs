mod openrouter;
mod traits;

pub use openrouter::OpenRouterTranslator;
pub use traits::{Translator, TranslatorInfo};

use crate::config::TranslatorConfig;
use crate::error::Result;
use std::sync::Arc;

/// Create a translator from configuration
pub fn create_translator(config: &TranslatorConfig) -> Result<Arc<dyn Translator>> {
    let translator = OpenRouterTranslator::new(
        config.api_base.clone(),
        config.api_key.clone(),
        config.model.clone(),
    );

    Ok(Arc::new(translator))
}
