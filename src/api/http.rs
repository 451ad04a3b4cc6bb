//! HTTP server setup with Axum

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{categories, entries, search, stats};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // Front ends are served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/stats", get(stats::get_stats))
        .route("/api/categories", get(categories::list_categories))
        .route("/api/categories/:key", get(categories::get_category))
        .route("/api/entries/:id", get(entries::get_entry))
        .route("/api/search", get(search::search_entries))
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve until the task is cancelled
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "HTTP API listening");
    axum::serve(listener, create_router(state)).await
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{load_corpus, CorpusStore};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app(store: CorpusStore) -> Router {
        create_router(Arc::new(AppState::new(Arc::new(store))))
    }

    fn loaded() -> CorpusStore {
        let corpus = load_corpus(&json!({
            "entries": [
                {"id": "anx 1", "title": "Anxiety", "category": "emotions", "tags": ["worry"],
                 "context": "", "reflection": "", "prayer": "", "scripture": ["Phil 4:6"], "additional": []},
                {"id": "2", "title": "Marriage", "category": "relationships", "tags": ["love"],
                 "context": "", "reflection": "", "prayer": "", "scripture": [], "additional": []}
            ],
            "synonyms": {"fear": ["worry", "afraid"]}
        }))
        .unwrap();
        CorpusStore::with_corpus(corpus)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app(CorpusStore::new())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_search_endpoint() {
        let (status, body) = get_json(app(loaded()), "/api/search?q=fear").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["data"]["matches"][0]["id"], "anx 1");
        assert_eq!(body["data"]["scrollable"], true);
    }

    #[tokio::test]
    async fn test_blank_search_is_empty_not_error() {
        let (status, body) = get_json(app(loaded()), "/api/search?q=%20").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["matches"], json!([]));

        let (status, body) = get_json(app(loaded()), "/api/search").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_category_endpoints() {
        let (_, body) = get_json(app(loaded()), "/api/categories").await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["data"][1]["name"], "Relationships");

        let (status, body) = get_json(app(loaded()), "/api/categories/relationships").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["entries"][0]["title"], "Marriage");
        assert_eq!(body["data"]["scrollable"], true);

        let (status, body) = get_json(app(loaded()), "/api/categories/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_entry_endpoint() {
        let (status, body) = get_json(app(loaded()), "/api/entries/anx%201").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["scripture"][0], "Phil 4:6");

        let (status, _) = get_json(app(loaded()), "/api/entries/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_entry_id_with_literal_percent() {
        let corpus = load_corpus(&json!([
            {"id": "a%20b", "title": "Escaped", "category": "life"}
        ]))
        .unwrap();
        let store = CorpusStore::with_corpus(corpus);

        let (status, body) = get_json(app(store), "/api/entries/a%2520b").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], "a%20b");
    }

    #[tokio::test]
    async fn test_stats_before_and_after_load() {
        let (_, body) = get_json(app(CorpusStore::new()), "/api/stats").await;
        assert_eq!(body["data"]["loaded"], false);
        assert_eq!(body["data"]["entry_count"], 0);
        assert!(body["data"].get("loaded_at").is_none());

        let (_, body) = get_json(app(loaded()), "/api/stats").await;
        assert_eq!(body["data"]["loaded"], true);
        assert_eq!(body["data"]["entry_count"], 2);
        assert_eq!(body["data"]["synonym_group_count"], 1);
    }
}
