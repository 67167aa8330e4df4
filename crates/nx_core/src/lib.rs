pub mod models;
pub mod error;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use models::{Summarizer, Translator};
pub use storage::{ContentStorage, StoredContent, StoredSummary, SummaryStorage};
pub use types::{BlogContent, BlogMetadata, ProcessingResult, ProcessingStep, ProcessorState};
