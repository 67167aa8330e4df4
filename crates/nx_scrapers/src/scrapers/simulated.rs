use async_trait::async_trait;
use nx_core::{BlogContent, BlogMetadata, Error, Result};
use scraper::Html;
use std::time::Duration;
use tracing::debug;
use crate::scrapers::{utils, validate_url, Scraper, SourceMetadata, INVALID_URL_MESSAGE};

/// The page every URL "resolves" to.
const CANNED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>The Future of Web Development: Trends and Innovations</title>
  <meta name="author" content="Tech Blogger">
  <meta name="date" content="2024-01-15">
</head>
<body>
  <article>
    <h1>The Future of Web Development: Trends and Innovations</h1>
    <p>
      Web development continues to evolve at a rapid pace, with new technologies and methodologies emerging constantly.
      In this comprehensive guide, we explore the latest trends that are shaping the future of web development.
    </p>
    <p>
      React and Vue.js remain dominant in the frontend ecosystem, while new frameworks like Svelte and Solid.js are gaining traction.
      The rise of TypeScript has significantly improved code quality and developer experience across JavaScript projects.
    </p>
    <p>
      Server-side rendering (SSR) and static site generation (SSG) are becoming increasingly important for performance and SEO.
      Tools like Next.js, Nuxt.js, and SvelteKit are making it easier to build fast, scalable web applications.
    </p>
    <p>
      The adoption of Web Components and progressive web apps (PWAs) is making web applications more native-like.
      CSS-in-JS solutions and utility-first frameworks like Tailwind CSS are changing how we approach styling.
    </p>
    <p>
      Backend development is seeing a shift towards microservices architecture and serverless computing.
      GraphQL is gaining popularity as an alternative to REST APIs, providing more flexible data fetching capabilities.
    </p>
    <p>
      The importance of web accessibility and performance optimization cannot be overstated in modern web development.
      Developers are increasingly focused on creating inclusive and fast-loading web experiences.
    </p>
  </article>
</body>
</html>
"#;

/// Stands in for a real fetch: waits, then extracts the same canned post
/// for every URL.
#[derive(Debug, Clone)]
pub struct SimulatedScraper {
    latency: Duration,
}

impl SimulatedScraper {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(500),
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    fn extract(url: &str) -> Result<BlogContent> {
        let document = Html::parse_document(CANNED_PAGE);

        let title = utils::extract_text(&document, "article h1")?;
        let content = utils::extract_texts(&document, "article p")?
            .iter()
            .map(|p| utils::normalize_block(p))
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");
        let author = utils::extract_attr(&document, "meta[name='author']", "content")?;
        let publish_date = utils::extract_attr(&document, "meta[name='date']", "content")?;
        let word_count = content.split_whitespace().count();

        Ok(BlogContent {
            title,
            content,
            url: url.to_string(),
            metadata: BlogMetadata {
                author,
                publish_date,
                word_count,
            },
        })
    }
}

impl Default for SimulatedScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Scraper for SimulatedScraper {
    fn source_metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Simulated blog",
            emoji: "🦗",
        }
    }

    fn can_handle(&self, url: &str) -> bool {
        validate_url(url)
    }

    async fn scrape(&self, url: &str) -> Result<BlogContent> {
        if !self.can_handle(url) {
            return Err(Error::InvalidUrl(INVALID_URL_MESSAGE.to_string()));
        }
        tokio::time::sleep(self.latency).await;

        let content = Self::extract(url)?;
        debug!(
            "{} Scraped {:?} ({} words) from {}",
            self.source_metadata().emoji,
            content.title,
            content.metadata.word_count,
            url
        );
        Ok(content)
    }
}
