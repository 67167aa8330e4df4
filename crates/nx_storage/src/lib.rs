use nx_core::{ContentStorage, Error, Result, SummaryStorage};
use std::sync::Arc;

pub mod backends;
pub mod ids;

pub use backends::*;
pub use ids::generate_id;

/// A backend that can hold both halves of a processing result
pub trait Storage: SummaryStorage + ContentStorage {}

impl<T: SummaryStorage + ContentStorage> Storage for T {}

/// Build a storage backend by name. Only `memory` exists.
pub async fn create_storage(kind: &str, simulate_latency: bool) -> Result<Arc<dyn Storage>> {
    match kind.to_lowercase().as_str() {
        "memory" => {
            let config = if simulate_latency {
                MemoryConfig::new()
            } else {
                MemoryConfig::new().without_latency()
            };
            tracing::info!("🏦 Storage backend initialized (using memory)");
            Ok(Arc::new(MemoryStorage::with_config(config)))
        }
        other => Err(Error::Storage(format!(
            "Unknown storage backend: {}. Available backends: memory",
            other
        ))),
    }
}

pub mod prelude {
    pub use super::{create_storage, Storage};
    pub use super::backends::*;
}
