use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::types::BlogContent;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSummary {
    pub id: String,
    pub summary: String,
    pub urdu_summary: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredContent {
    pub id: String,
    pub content: BlogContent,
    pub created_at: DateTime<Utc>,
}

/// Store for the summary/translation pair (the "Supabase" side)
#[async_trait]
pub trait SummaryStorage: Send + Sync {
    /// Save a summary together with its translation, returning the new record id
    async fn save_summary(&self, summary: &str, urdu_summary: &str) -> Result<String>;

    async fn get_summary(&self, id: &str) -> Result<Option<StoredSummary>>;
}

/// Store for the full scraped post (the "MongoDB" side)
#[async_trait]
pub trait ContentStorage: Send + Sync {
    /// Save a scraped post, returning the new record id
    async fn save_content(&self, content: &BlogContent) -> Result<String>;

    async fn get_content(&self, id: &str) -> Result<Option<StoredContent>>;
}
