//! HTTP boundary — one search endpoint over the pipeline.
//!
//! Thin by design: parameter extraction, the JSON envelope, and status
//! mapping. Retrieval failures surface as a generic service-unavailable
//! message with no internal detail leaked; everything else is handled
//! inside the pipeline.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::pipeline::SearchService;
use crate::records::PropertyRecord;

/// Canned message returned when the retrieval path is down.
pub const SERVICE_DEGRADED_MESSAGE: &str =
    "Sorry, I'm having trouble finding properties right now.";

/// Query-string parameters for `/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text user query.
    pub query: String,
}

/// JSON envelope returned by `/search`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchEnvelope {
    /// Whether the request succeeded.
    pub success: bool,
    /// Final response text.
    pub llm_response: String,
    /// Retrieved records.
    pub results: Vec<PropertyRecord>,
    /// Error detail on failure, `null` on success.
    pub error: Option<String>,
}

/// Build the application router.
pub fn router(service: Arc<SearchService>) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(service)
}

async fn handle_search(
    State(service): State<Arc<SearchService>>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<SearchEnvelope>) {
    info!(query = %params.query, "processing search query");

    match service.search(&params.query).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(SearchEnvelope {
                success: true,
                llm_response: outcome.llm_response,
                results: outcome.results,
                error: None,
            }),
        ),
        Err(e) => {
            error!(error = %e, "search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SearchEnvelope {
                    success: false,
                    llm_response: SERVICE_DEGRADED_MESSAGE.to_owned(),
                    results: Vec::new(),
                    error: Some("service unavailable".to_owned()),
                }),
            )
        }
    }
}
