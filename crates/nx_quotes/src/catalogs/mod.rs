use nx_core::{Error, Result};
use serde::Serialize;

pub mod inspiration;
pub mod nexium;

/// Maximum number of quotes a lookup returns unless the caller asks otherwise
pub const DEFAULT_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub topic: &'static str,
    pub text: &'static str,
}

impl Quote {
    pub const fn new(topic: &'static str, text: &'static str) -> Self {
        Self { topic, text }
    }
}

/// How a requested topic is compared against a quote's topic.
/// Both modes ignore case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The quote topic contains the requested topic
    Substring,
    /// The quote topic equals the requested topic
    Exact,
}

impl MatchMode {
    pub fn matches(&self, quote_topic: &str, topic: &str) -> bool {
        let quote_topic = quote_topic.to_lowercase();
        let topic = topic.to_lowercase();
        match self {
            MatchMode::Substring => quote_topic.contains(&topic),
            MatchMode::Exact => quote_topic == topic,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub name: &'static str,
    pub title: &'static str,
    pub match_mode: MatchMode,
    #[serde(skip)]
    pub quotes: &'static [Quote],
}

impl Catalog {
    /// Quotes matching `topic`, capped at [`DEFAULT_LIMIT`]
    pub fn filter(&self, topic: &str) -> Vec<Quote> {
        self.filter_with_limit(topic, DEFAULT_LIMIT)
    }

    /// Quotes matching `topic` in catalog order, at most `limit` of them
    pub fn filter_with_limit(&self, topic: &str, limit: usize) -> Vec<Quote> {
        let quotes: Vec<Quote> = self
            .quotes
            .iter()
            .filter(|q| self.match_mode.matches(q.topic, topic))
            .take(limit)
            .copied()
            .collect();
        tracing::debug!(
            "📜 {} quote(s) for topic {:?} in catalog {}",
            quotes.len(),
            topic,
            self.name
        );
        quotes
    }

    /// Distinct topics in the order they first appear
    pub fn topics(&self) -> Vec<&'static str> {
        let mut topics: Vec<&'static str> = Vec::new();
        for quote in self.quotes {
            if !topics.contains(&quote.topic) {
                topics.push(quote.topic);
            }
        }
        topics
    }
}

pub fn all_catalogs() -> Vec<&'static Catalog> {
    vec![&inspiration::CATALOG, &nexium::CATALOG]
}

pub fn get_catalog(name: &str) -> Result<&'static Catalog> {
    all_catalogs()
        .into_iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownCatalog(name.to_string()))
}
