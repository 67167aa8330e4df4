use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use nx_core::{
    ContentStorage, ProcessingResult, ProcessorState, StoredContent, StoredSummary, SummaryStorage,
};
use nx_quotes::{all_catalogs, get_catalog, Catalog, Quote, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use crate::error::ApiError;
use crate::AppState;

pub const DEFAULT_CATALOG: &str = "inspiration";

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Serialize)]
pub struct CatalogInfo {
    #[serde(flatten)]
    pub catalog: Catalog,
    pub topics: Vec<&'static str>,
}

pub async fn list_catalogs() -> Json<Vec<CatalogInfo>> {
    Json(
        all_catalogs()
            .into_iter()
            .map(|c| CatalogInfo {
                catalog: *c,
                topics: c.topics(),
            })
            .collect(),
    )
}

#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    #[serde(default)]
    pub topic: String,
    pub catalog: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub catalog: &'static str,
    pub topic: String,
    pub quotes: Vec<Quote>,
}

pub async fn get_quotes(Query(query): Query<QuoteQuery>) -> ApiResult<QuoteResponse> {
    let catalog = get_catalog(query.catalog.as_deref().unwrap_or(DEFAULT_CATALOG))?;
    let quotes = catalog.filter_with_limit(&query.topic, query.limit.unwrap_or(DEFAULT_LIMIT));
    Ok(Json(QuoteResponse {
        catalog: catalog.name,
        topic: query.topic,
        quotes,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    pub url: String,
}

pub async fn process_url(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProcessRequest>,
) -> ApiResult<ProcessingResult> {
    tracing::info!("🦗 Processing {}", request.url);
    let result = state.processor.submit(&request.url).await?;
    Ok(Json(result))
}

pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<ProcessorState> {
    Json(state.processor.state())
}

pub async fn reset_state(State(state): State<Arc<AppState>>) -> ApiResult<ProcessorState> {
    Ok(Json(state.processor.reset()?))
}

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StoredSummary> {
    state
        .processor
        .storage()
        .get_summary(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Summary {}", id)))
}

pub async fn get_content(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StoredContent> {
    state
        .processor
        .storage()
        .get_content(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Content {}", id)))
}
