pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::MAX_FILE_SIZE;
use crate::generation::handlers;
use crate::state::AppState;

/// Largest accepted request body: one maximum-size file plus multipart framing.
const UPLOAD_BODY_LIMIT: usize = MAX_FILE_SIZE + 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/generate-constellation",
            post(handlers::handle_generate).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/api/quota", get(handlers::handle_quota))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::extraction::build_docx;
    use crate::generation::testing::{orchestrator, MemoryStore, SolidBackground};
    use crate::quota::QuotaTracker;

    const BOUNDARY: &str = "constellation-test-boundary";

    fn app(daily_quota: u32) -> (Router, Arc<QuotaTracker>) {
        let quota = Arc::new(QuotaTracker::new(daily_quota));
        let orchestrator = orchestrator(
            Arc::new(SolidBackground::default()),
            Arc::new(MemoryStore::default()),
            quota.clone(),
        );
        let state = AppState {
            orchestrator: Arc::new(orchestrator),
            quota: quota.clone(),
        };
        (build_router(state), quota)
    }

    fn upload(field: &str, filename: &str, content: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/generate-constellation")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn resume_docx() -> Vec<u8> {
        build_docx(&["Backend developer: Rust, Axum, Actix, PostgreSQL, Docker."])
    }

    #[tokio::test]
    async fn test_health_and_root() {
        let (app, _) = app(5);
        let response = app.clone().oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");

        let response = app.oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["endpoints"]["quota"], "GET /api/quota");
    }

    #[tokio::test]
    async fn test_quota_endpoint() {
        let (app, quota) = app(5);
        quota.try_consume().unwrap();
        let response = app.oneshot(get_request("/api/quota")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["current_count"], 1);
        assert_eq!(body["max_quota"], 5);
        assert_eq!(body["remaining"], 4);
    }

    #[tokio::test]
    async fn test_generate_constellation() {
        let (app, quota) = app(5);
        let response = app
            .oneshot(upload("file", "resume.docx", &resume_docx()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert!(body["image_url"]
            .as_str()
            .unwrap()
            .starts_with("memory://"));
        assert!(!body["title"].as_str().unwrap().is_empty());
        assert_eq!(body["stats"]["dominant_category"], "Backend");
        assert_eq!(body["stars_mapped"], 5);
        assert!(body["edge_crossings"].as_u64().unwrap() <= 5);
        assert_eq!(quota.status().current_count, 1);
    }

    #[tokio::test]
    async fn test_missing_file_field_is_rejected() {
        let (app, _) = app(5);
        let response = app
            .oneshot(upload("document", "resume.docx", &resume_docx()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["code"],
            "VALIDATION_ERROR"
        );
    }

    #[tokio::test]
    async fn test_unsupported_format_is_a_parse_error() {
        let (app, quota) = app(5);
        let response = app
            .oneshot(upload("file", "resume.txt", b"Rust and Docker"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "PARSE_ERROR");
        assert_eq!(quota.status().current_count, 0);
    }

    #[tokio::test]
    async fn test_exhausted_quota_returns_429() {
        let (app, quota) = app(1);
        quota.try_consume().unwrap();
        let response = app
            .oneshot(upload("file", "resume.docx", &resume_docx()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            json_body(response).await["error"]["code"],
            "QUOTA_EXCEEDED"
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (app, _) = app(5);
        let response = app.oneshot(get_request("/api/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
