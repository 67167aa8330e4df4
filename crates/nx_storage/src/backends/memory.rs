use async_trait::async_trait;
use chrono::Utc;
use nx_core::{BlogContent, ContentStorage, Result, StoredContent, StoredSummary, SummaryStorage};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;
use crate::ids::generate_id;

#[derive(Debug, Clone)]
pub struct MemoryConfig {
    pub summary_prefix: String,
    pub content_prefix: String,
    pub summary_latency: Duration,
    pub content_latency: Duration,
}

impl MemoryConfig {
    pub fn new() -> Self {
        Self {
            summary_prefix: "sb".to_string(),
            content_prefix: "mongo".to_string(),
            summary_latency: Duration::from_millis(300),
            content_latency: Duration::from_millis(250),
        }
    }

    /// Same prefixes, no simulated round trip
    pub fn without_latency(mut self) -> Self {
        self.summary_latency = Duration::ZERO;
        self.content_latency = Duration::ZERO;
        self
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Records keyed by id
#[derive(Default)]
pub struct MemoryStore {
    summaries: HashMap<String, StoredSummary>,
    contents: HashMap<String, StoredContent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_summary(&mut self, record: StoredSummary) {
        self.summaries.insert(record.id.clone(), record);
    }

    pub fn insert_content(&mut self, record: StoredContent) {
        self.contents.insert(record.id.clone(), record);
    }

    pub fn find_summary(&self, id: &str) -> Option<StoredSummary> {
        self.summaries.get(id).cloned()
    }

    pub fn find_content(&self, id: &str) -> Option<StoredContent> {
        self.contents.get(id).cloned()
    }
}

/// Process-local stand-in for both the summary table and the content
/// collection. Records live until the process exits.
pub struct MemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
    config: MemoryConfig,
}

impl MemoryStorage {
    pub fn with_config(config: MemoryConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new())),
            config,
        }
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    pub async fn summary_count(&self) -> usize {
        self.store.read().await.summaries.len()
    }

    pub async fn content_count(&self) -> usize {
        self.store.read().await.contents.len()
    }
}

#[async_trait]
impl SummaryStorage for MemoryStorage {
    async fn save_summary(&self, summary: &str, urdu_summary: &str) -> Result<String> {
        tokio::time::sleep(self.config.summary_latency).await;

        let record = StoredSummary {
            id: generate_id(&self.config.summary_prefix),
            summary: summary.to_string(),
            urdu_summary: urdu_summary.to_string(),
            created_at: Utc::now(),
        };
        info!("💾 Saving to Supabase: {}", serde_json::to_string(&record)?);

        let id = record.id.clone();
        self.store.write().await.insert_summary(record);
        Ok(id)
    }

    async fn get_summary(&self, id: &str) -> Result<Option<StoredSummary>> {
        Ok(self.store.read().await.find_summary(id))
    }
}

#[async_trait]
impl ContentStorage for MemoryStorage {
    async fn save_content(&self, content: &BlogContent) -> Result<String> {
        tokio::time::sleep(self.config.content_latency).await;

        let record = StoredContent {
            id: generate_id(&self.config.content_prefix),
            content: content.clone(),
            created_at: Utc::now(),
        };
        info!("💾 Saving to MongoDB: {}", serde_json::to_string(&record)?);

        let id = record.id.clone();
        self.store.write().await.insert_content(record);
        Ok(id)
    }

    async fn get_content(&self, id: &str) -> Result<Option<StoredContent>> {
        Ok(self.store.read().await.find_content(id))
    }
}
