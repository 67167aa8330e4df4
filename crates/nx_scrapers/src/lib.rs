pub mod scrapers;
pub mod cli;
pub mod logging;
pub mod manager;

pub use manager::{ContentProcessor, PipelineConfig, StepDelays};
pub use cli::{handle_command, PipelineArgs, ProcessArgs};
pub use logging::{init_logging, Logger};
pub use scrapers::{validate_url, Scraper, SimulatedScraper};

pub mod prelude {
    pub use super::scrapers::Scraper;
    pub use super::manager::{ContentProcessor, PipelineConfig};
    pub use nx_core::{BlogContent, ProcessingResult, Result, Error};
}
