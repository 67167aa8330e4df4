use std::sync::Arc;
use nx_scrapers::ContentProcessor;

pub struct AppState {
    pub processor: Arc<ContentProcessor>,
}

impl AppState {
    pub fn new(processor: ContentProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }
}
