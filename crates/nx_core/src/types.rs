use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogContent {
    pub title: String,
    pub content: String,
    pub url: String,
    pub metadata: BlogMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    pub word_count: usize,
}

/// Everything one pipeline run produces. Built in a single step once every
/// stage has succeeded, so a partially filled result never exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub original_content: BlogContent,
    pub summary: String,
    pub urdu_summary: String,
    pub supabase_id: String,
    pub mongo_id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStep {
    #[default]
    Idle,
    Scraping,
    Summarizing,
    Translating,
    Saving,
    Completed,
    Error,
}

impl ProcessingStep {
    pub fn emoji(&self) -> &'static str {
        match self {
            ProcessingStep::Idle => "💤",
            ProcessingStep::Scraping => "🦗",
            ProcessingStep::Summarizing => "🤖",
            ProcessingStep::Translating => "🈂️",
            ProcessingStep::Saving => "💾",
            ProcessingStep::Completed => "✅",
            ProcessingStep::Error => "❌",
        }
    }

    /// True while a run is between its first and last stage
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ProcessingStep::Scraping
                | ProcessingStep::Summarizing
                | ProcessingStep::Translating
                | ProcessingStep::Saving
        )
    }
}

impl fmt::Display for ProcessingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProcessingStep::Idle => "idle",
            ProcessingStep::Scraping => "scraping",
            ProcessingStep::Summarizing => "summarizing",
            ProcessingStep::Translating => "translating",
            ProcessingStep::Saving => "saving",
            ProcessingStep::Completed => "completed",
            ProcessingStep::Error => "error",
        };
        f.write_str(label)
    }
}

/// View-model of the blog processor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorState {
    pub url: String,
    pub step: ProcessingStep,
    pub is_processing: bool,
    pub results: Option<ProcessingResult>,
    pub error: Option<String>,
}
