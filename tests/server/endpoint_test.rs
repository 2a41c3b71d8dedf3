//! Search endpoint tests — envelope shape and status mapping.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use gharkhoj::generation::{GenerationError, GenerationParams, TextGenerator};
use gharkhoj::pipeline::{Pipeline, SearchService, GREETING_RESPONSES};
use gharkhoj::retrieval::{RetrievalError, RetrievedHit, Retriever};
use gharkhoj::server::{router, SearchEnvelope, SERVICE_DEGRADED_MESSAGE};
use serde_json::json;
use tower::ServiceExt;

struct StubRetriever {
    fail: bool,
}

#[async_trait]
impl Retriever for StubRetriever {
    async fn search(&self, _query: &str) -> Result<Vec<RetrievedHit>, RetrievalError> {
        if self.fail {
            return Err(RetrievalError::Embedding("stub outage".to_owned()));
        }
        Ok(vec![RetrievedHit {
            id: "p1".to_owned(),
            score: 0.9,
            payload: json!({
                "title": "Bright 2BHK",
                "location": "Indiranagar, Bangalore",
                "price": 95.0,
                "bedrooms": 2,
                "area_sqft": 1100,
                "amenities": ["gym"]
            }),
        }])
    }
}

struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::Parse("stub outage".to_owned()))
    }
}

fn app(fail_retrieval: bool) -> axum::Router {
    let pipeline = Pipeline::new(Arc::new(FailingGenerator), GenerationParams::default());
    let service = SearchService::new(
        Arc::new(StubRetriever {
            fail: fail_retrieval,
        }),
        pipeline,
    );
    router(Arc::new(service))
}

async fn envelope_for(app: axum::Router, uri: &str) -> (StatusCode, SearchEnvelope) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let envelope = serde_json::from_slice(&bytes).expect("envelope parses");
    (status, envelope)
}

#[tokio::test]
async fn search_returns_success_envelope() {
    let (status, envelope) =
        envelope_for(app(false), "/search?query=2%20bhk%20in%20bangalore").await;
    assert_eq!(status, StatusCode::OK);
    assert!(envelope.success);
    assert!(envelope.error.is_none());
    assert_eq!(envelope.results.len(), 1);
    assert!(envelope.llm_response.contains("Indiranagar"));
}

#[tokio::test]
async fn greeting_query_flows_through_the_envelope() {
    let (status, envelope) = envelope_for(app(false), "/search?query=hello").await;
    assert_eq!(status, StatusCode::OK);
    assert!(envelope.success);
    assert!(GREETING_RESPONSES.contains(&envelope.llm_response.as_str()));
}

#[tokio::test]
async fn retrieval_failure_maps_to_500_without_internal_detail() {
    let (status, envelope) = envelope_for(app(true), "/search?query=2%20bhk").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!envelope.success);
    assert_eq!(envelope.llm_response, SERVICE_DEGRADED_MESSAGE);
    assert!(envelope.results.is_empty());
    assert_eq!(envelope.error.as_deref(), Some("service unavailable"));
    // The stub's internal failure text never leaks.
    assert!(!envelope.llm_response.contains("stub outage"));
}

#[tokio::test]
async fn missing_query_parameter_is_rejected() {
    let response = app(false)
        .oneshot(
            Request::builder()
                .uri("/search")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("infallible");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
