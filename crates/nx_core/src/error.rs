use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidUrl(String),

    #[error("Unknown quote catalog: {0}")]
    UnknownCatalog(String),

    #[error("Scraping error: {0}")]
    Scraping(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Processing already in progress")]
    Busy,
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidUrl(format!("Invalid URL: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
