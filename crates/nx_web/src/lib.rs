use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod error;
pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/catalogs", get(handlers::list_catalogs))
        .route("/api/quotes", get(handlers::get_quotes))
        .route("/api/process", get(handlers::get_state).post(handlers::process_url))
        .route("/api/process/reset", post(handlers::reset_state))
        .route("/api/summaries/:id", get(handlers::get_summary))
        .route("/api/contents/:id", get(handlers::get_content))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(state: AppState, addr: &str) -> nx_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use nx_core::{ProcessingResult, Result, Error};
    pub use crate::{create_app, serve, AppState};
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use nx_scrapers::{ContentProcessor, PipelineConfig};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let processor = ContentProcessor::from_config(PipelineConfig::immediate()).await.unwrap();
        create_app(AppState::new(processor))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app().await;
        let (status, body) = send(&app, get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_catalogs() {
        let app = test_app().await;
        let (status, body) = send(&app, get("/api/catalogs")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "inspiration");
        assert_eq!(body[0]["matchMode"], "substring");
        assert!(body[0].get("match_mode").is_none());
        assert_eq!(body[1]["name"], "nexium");
        assert_eq!(body[1]["topics"], json!(["motivation", "life", "friendship"]));
    }

    #[tokio::test]
    async fn test_quotes_exact_catalog() {
        let app = test_app().await;
        let (status, body) = send(&app, get("/api/quotes?topic=life&catalog=nexium")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["catalog"], "nexium");
        let quotes = body["quotes"].as_array().unwrap();
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0]["text"], "Life is what happens when you're busy making other plans.");
        assert_eq!(quotes[2]["text"], "Life is really simple, but we insist on making it complicated.");
    }

    #[tokio::test]
    async fn test_quotes_default_catalog_and_no_match() {
        let app = test_app().await;
        let (status, body) = send(&app, get("/api/quotes?topic=cooking")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["catalog"], "inspiration");
        assert_eq!(body["quotes"], json!([]));
    }

    #[tokio::test]
    async fn test_quotes_unknown_catalog() {
        let app = test_app().await;
        let (status, body) = send(&app, get("/api/quotes?topic=life&catalog=nope")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("nope"));
    }

    #[tokio::test]
    async fn test_process_and_lookup() {
        let app = test_app().await;
        let (status, result) = send(
            &app,
            post_json("/api/process", json!({ "url": "https://example.com/blog-post" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["originalContent"]["url"], "https://example.com/blog-post");
        assert_eq!(result["originalContent"]["metadata"]["author"], "Tech Blogger");

        let supabase_id = result["supabaseId"].as_str().unwrap();
        let (status, summary) = send(&app, get(&format!("/api/summaries/{}", supabase_id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["urduSummary"], result["urduSummary"]);

        let mongo_id = result["mongoId"].as_str().unwrap();
        let (status, content) = send(&app, get(&format!("/api/contents/{}", mongo_id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content["content"], result["originalContent"]);

        let (status, state) = send(&app, get("/api/process")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(state["step"], "completed");
        assert_eq!(state["isProcessing"], false);

        let (status, state) = send(&app, post_json("/api/process/reset", json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(state["step"], "idle");
        assert_eq!(state["results"], Value::Null);
    }

    #[tokio::test]
    async fn test_process_invalid_url() {
        let app = test_app().await;
        let (status, body) = send(&app, post_json("/api/process", json!({ "url": "nope" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please enter a valid URL");

        let (_, state) = send(&app, get("/api/process")).await;
        assert_eq!(state["error"], "Please enter a valid URL");
        assert_eq!(state["step"], "idle");
    }

    #[tokio::test]
    async fn test_unknown_record_is_404() {
        let app = test_app().await;
        let (status, body) = send(&app, get("/api/summaries/sb_0_missing")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Summary sb_0_missing not found");
    }
}
