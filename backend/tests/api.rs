use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use backend::server::{AppState, router};
use research_core::{CompletionClient, ResearchError, ResearchService};
use tower::ServiceExt as _;

enum FakeBehavior {
    Echo,
    Reply(&'static str),
    Transport(&'static str),
}

struct FakeClient {
    calls: Arc<AtomicUsize>,
    behavior: FakeBehavior,
}

#[async_trait::async_trait]
impl CompletionClient for FakeClient {
    async fn complete(&self, prompt: &str) -> Result<String, ResearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            FakeBehavior::Echo => Ok(prompt.to_string()),
            FakeBehavior::Reply(text) => Ok((*text).to_string()),
            FakeBehavior::Transport(msg) => Err(ResearchError::transport(*msg)),
        }
    }
}

fn app(behavior: FakeBehavior) -> (axum::Router, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let client = FakeClient {
        calls: calls.clone(),
        behavior,
    };
    let state = AppState::new(ResearchService::new(Arc::new(client)));
    (router(state), calls)
}

fn process_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/research/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

#[tokio::test]
async fn summarize_returns_completion_text_as_plain_text() {
    let (app, calls) = app(FakeBehavior::Echo);

    let response = app
        .oneshot(process_request(serde_json::json!({
            "operation": "Summarize",
            "content": "Ferris is a crab."
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"), "got {content_type}");
    assert_eq!(
        body_text(response).await,
        "Provide a clear and concise summary of the following text in a few sentences:\n\nFerris is a crab."
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn sentinel_text_is_still_a_success() {
    let (app, _) = app(FakeBehavior::Reply("No valid content found in the response."));

    let response = app
        .oneshot(process_request(serde_json::json!({
            "operation": "Suggest",
            "content": ""
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        "No valid content found in the response."
    );
}

#[tokio::test]
async fn unknown_operation_is_bad_request_without_upstream_call() {
    let (app, calls) = app(FakeBehavior::Echo);

    let response = app
        .oneshot(process_request(serde_json::json!({
            "operation": "Translate",
            "content": "hola"
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Unknown operation: Translate");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn transport_failure_is_bad_gateway() {
    let (app, calls) = app(FakeBehavior::Transport("connection refused"));

    let response = app
        .oneshot(process_request(serde_json::json!({
            "operation": "Summarize",
            "content": "text"
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(body_text(response).await.contains("connection refused"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn malformed_json_is_rejected_before_processing() {
    let (app, calls) = app(FakeBehavior::Echo);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/research/process")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .expect("request"),
        )
        .await
        .expect("response");

    assert!(response.status().is_client_error());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (app, _) = app(FakeBehavior::Reply("ok"));

    let mut request = process_request(serde_json::json!({
        "operation": "Suggest",
        "content": "x"
    }));
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://reader.example".parse().expect("origin"));

    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn health_check_responds_ok() {
    let (app, calls) = app(FakeBehavior::Echo);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
