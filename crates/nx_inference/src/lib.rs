use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod models;
pub mod translation;

/// Selects and tunes the summarizer and translator used by a pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Summarizer name: `keyword` (default) or `lead`
    pub model_name: Option<String>,
    /// Translator name: `urdu` (default)
    pub translator_name: Option<String>,
    /// Sleep before answering, mimicking a remote model call
    pub simulate_latency: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_name: None,
            translator_name: None,
            simulate_latency: true,
        }
    }
}

impl Config {
    pub(crate) fn latency_or_zero(&self, latency: Duration) -> Duration {
        if self.simulate_latency {
            latency
        } else {
            Duration::ZERO
        }
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::create_model;
    pub use super::translation::create_translator;
    pub use nx_core::{BlogContent, Result, Error, Summarizer, Translator};
}

pub use models::create_model;
pub use translation::create_translator;
