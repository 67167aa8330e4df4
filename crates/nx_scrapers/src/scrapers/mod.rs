use async_trait::async_trait;
use nx_core::{BlogContent, Result};

pub mod simulated;

pub use simulated::SimulatedScraper;

/// Message shown when a submitted URL is rejected
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceMetadata {
    pub name: &'static str,
    pub emoji: &'static str,
}

#[async_trait]
pub trait Scraper: Send + Sync {
    /// Returns the name and display emoji of the source
    fn source_metadata(&self) -> SourceMetadata;

    /// Returns true if this scraper can handle the given URL
    fn can_handle(&self, url: &str) -> bool;

    /// Scrapes a blog post from the given URL
    async fn scrape(&self, url: &str) -> Result<BlogContent>;
}

/// True for absolute `http` and `https` URLs only
pub fn validate_url(url: &str) -> bool {
    utils::parse_url(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use nx_core::{Error, Result};
    use scraper::{Html, Selector};
    use url::Url;

    pub fn parse_url(url: &str) -> Result<Url> {
        Ok(Url::parse(url)?)
    }

    fn selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector)
            .map_err(|e| Error::Scraping(format!("Invalid selector {}: {}", selector, e)))
    }

    pub fn extract_text(document: &Html, selector_str: &str) -> Result<String> {
        let selector = selector(selector_str)?;
        document
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .ok_or_else(|| Error::Scraping(format!("No element found for selector: {}", selector_str)))
    }

    pub fn extract_texts(document: &Html, selector_str: &str) -> Result<Vec<String>> {
        let selector = selector(selector_str)?;
        Ok(document
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect())
    }

    pub fn extract_attr(document: &Html, selector_str: &str, attr: &str) -> Result<Option<String>> {
        let selector = selector(selector_str)?;
        Ok(document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()))
    }

    /// Trim every line of a block and drop the blank ones
    pub fn normalize_block(block: &str) -> String {
        block
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
