use std::fmt;
use std::time::Duration;
use nx_core::{BlogContent, Result, Summarizer};
use crate::Config;

const LEAD_WORDS: usize = 20;

/// Offline fallback: the first twenty words of the post.
pub struct LeadSummarizer {
    latency: Duration,
}

impl fmt::Debug for LeadSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeadSummarizer").finish()
    }
}

impl LeadSummarizer {
    pub fn new(config: Option<Config>) -> Self {
        let config = config.unwrap_or_default();
        Self {
            latency: config.latency_or_zero(Duration::from_millis(100)),
        }
    }
}

#[async_trait::async_trait]
impl Summarizer for LeadSummarizer {
    fn name(&self) -> &str {
        "lead"
    }

    async fn summarize(&self, content: &BlogContent) -> Result<String> {
        tokio::time::sleep(self.latency).await;
        let words: Vec<&str> = content.content.split_whitespace().take(LEAD_WORDS).collect();
        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nx_core::BlogMetadata;

    #[tokio::test]
    async fn test_lead_summarizer() {
        let config = Config {
            simulate_latency: false,
            ..Config::default()
        };
        let model = LeadSummarizer::new(Some(config));

        let words: Vec<String> = (1..=30).map(|i| format!("w{}", i)).collect();
        let content = BlogContent {
            title: "Test".to_string(),
            content: format!("  {}  ", words.join("\n ")),
            url: "http://test.com".to_string(),
            metadata: BlogMetadata::default(),
        };

        let summary = model.summarize(&content).await.unwrap();
        assert_eq!(summary.split(' ').count(), LEAD_WORDS);
        assert!(summary.starts_with("w1 w2 w3"));
        assert!(summary.ends_with("w20"));
    }
}
