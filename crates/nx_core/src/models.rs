use async_trait::async_trait;
use crate::types::BlogContent;
use crate::Result;

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Short model name, used in logs
    fn name(&self) -> &str;

    /// Produce an extractive summary of a scraped post
    async fn summarize(&self, content: &BlogContent) -> Result<String>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    fn name(&self) -> &str;

    /// Translate a piece of text into the translator's target language
    async fn translate(&self, text: &str) -> Result<String>;
}
