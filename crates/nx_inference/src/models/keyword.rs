use std::fmt;
use std::time::Duration;
use lazy_static::lazy_static;
use nx_core::{BlogContent, Result, Summarizer};
use regex::Regex;
use tracing::debug;
use crate::Config;

/// Phrases that make a sentence worth keeping. Matched as lowercase substrings.
pub const KEY_PHRASES: &[&str] = &[
    "web development",
    "react",
    "vue.js",
    "typescript",
    "performance",
    "ssr",
    "ssg",
    "next.js",
    "tailwind css",
    "microservices",
    "graphql",
];

/// Fragments this short (after trimming) are dropped before scoring
pub const MIN_SENTENCE_CHARS: usize = 50;

/// Upper bound on sentences in a summary
pub const MAX_SENTENCES: usize = 3;

lazy_static! {
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]+").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence<'a> {
    pub sentence: &'a str,
    pub score: usize,
}

/// Split on runs of sentence-ending punctuation and score every fragment
/// longer than [`MIN_SENTENCE_CHARS`], in source order.
pub fn score_sentences(text: &str) -> Vec<ScoredSentence<'_>> {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(|sentence| {
            let lowered = sentence.to_lowercase();
            let score = KEY_PHRASES.iter().filter(|p| lowered.contains(*p)).count();
            ScoredSentence { sentence, score }
        })
        .collect()
}

/// Extractive summary: the best scoring sentences joined with periods.
///
/// Ties keep their source order. When no sentence survives the length
/// filter the result is a lone `"."`.
pub fn summarize_text(text: &str) -> String {
    let mut scored = score_sentences(text);
    // stable sort
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    let top: Vec<&str> = scored
        .iter()
        .take(MAX_SENTENCES)
        .map(|s| s.sentence)
        .collect();

    format!("{}.", top.join(". "))
}

pub struct KeywordSummarizer {
    latency: Duration,
}

impl fmt::Debug for KeywordSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordSummarizer")
            .field("latency", &self.latency)
            .finish()
    }
}

impl KeywordSummarizer {
    pub fn new(config: Option<Config>) -> Self {
        let config = config.unwrap_or_default();
        Self {
            latency: config.latency_or_zero(Duration::from_millis(300)),
        }
    }
}

#[async_trait::async_trait]
impl Summarizer for KeywordSummarizer {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn summarize(&self, content: &BlogContent) -> Result<String> {
        tokio::time::sleep(self.latency).await;
        let summary = summarize_text(&content.content);
        debug!("✨ Summary of {} chars for {}", summary.len(), content.url);
        Ok(summary)
    }
}
