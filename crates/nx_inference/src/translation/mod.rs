use std::sync::Arc;
use nx_core::{Error, Result, Translator};
use tracing::info;
use crate::Config;

pub mod urdu;

pub use urdu::{DictionaryTranslator, URDU_DICTIONARY};

pub const DEFAULT_TRANSLATOR: &str = "urdu";

pub fn create_translator(config: Option<Config>) -> Result<Arc<dyn Translator>> {
    let config = config.unwrap_or_default();
    let name = config
        .translator_name
        .clone()
        .unwrap_or_else(|| DEFAULT_TRANSLATOR.to_string());

    let translator: Arc<dyn Translator> = match name.to_lowercase().as_str() {
        "urdu" => Arc::new(DictionaryTranslator::urdu(Some(config))?),
        other => {
            return Err(Error::Translation(format!(
                "Unknown translator: {}. Available translators: urdu",
                other
            )))
        }
    };

    info!("🈂️ Translator initialized (using {})", translator.name());
    Ok(translator)
}
