use std::sync::Arc;
use nx_core::{Error, Result, Summarizer};
use tracing::info;
use crate::Config;

pub mod keyword;
pub mod lead;

pub use keyword::KeywordSummarizer;
pub use lead::LeadSummarizer;

pub const DEFAULT_MODEL: &str = "keyword";

/// Build the summarizer named in `config`, falling back to the keyword model.
pub fn create_model(config: Option<Config>) -> Result<Arc<dyn Summarizer>> {
    let config = config.unwrap_or_default();
    let name = config
        .model_name
        .clone()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let model: Arc<dyn Summarizer> = match name.to_lowercase().as_str() {
        "keyword" => Arc::new(KeywordSummarizer::new(Some(config))),
        "lead" => Arc::new(LeadSummarizer::new(Some(config))),
        other => {
            return Err(Error::Inference(format!(
                "Unknown summarizer: {}. Available models: keyword, lead",
                other
            )))
        }
    };

    info!("🧠 Summarizer initialized (using {})", model.name());
    Ok(model)
}
