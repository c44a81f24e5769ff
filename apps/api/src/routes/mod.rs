pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::analyze::handlers as analyze;
use crate::resumes::handlers as resumes;
use crate::state::AppState;
use crate::upload::handlers as upload;

/// Resume PDFs routinely exceed Axum's 2 MB default.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/analyze",
            post(analyze::handle_analyze).fallback(analyze::handle_analyze_method_not_allowed),
        )
        .route("/api/upload", post(upload::handle_upload))
        .route(
            "/api/resumes",
            get(resumes::handle_list).delete(resumes::handle_wipe),
        )
        .route(
            "/api/resumes/:id",
            get(resumes::handle_get).delete(resumes::handle_remove),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analyze::analyzer::testing::StubAnalyzer;
    use crate::models::feedback::Feedback;
    use crate::store::{MemoryStore, RecordStore};

    fn test_state(store: Arc<dyn RecordStore>) -> AppState {
        AppState {
            store,
            analyzer: Arc::new(StubAnalyzer(Feedback {
                overall_score: 87,
                ..Default::default()
            })),
        }
    }

    fn test_router() -> Router {
        build_router(test_state(Arc::new(MemoryStore::new())))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "rescore-api");
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_post_with_405() {
        let response = test_router()
            .oneshot(Request::get("/api/analyze").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = body_json(response).await;
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "Use POST");
    }

    #[tokio::test]
    async fn test_analyze_names_first_invalid_field() {
        let response = test_router()
            .oneshot(json_request(
                Method::POST,
                "/api/analyze",
                json!({"resumeText": "", "jobTitle": "SWE", "jobDescription": "x"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "Missing or invalid resumeText");
    }

    #[tokio::test]
    async fn test_analyze_returns_stubbed_scorecard() {
        let response = test_router()
            .oneshot(json_request(
                Method::POST,
                "/api/analyze",
                json!({
                    "resumeText": "Ten years of backend work.",
                    "jobTitle": "Backend Engineer",
                    "jobDescription": "Own the billing service"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["ok"], true);
        assert_eq!(body["feedback"]["overallScore"], 87);
    }

    #[tokio::test]
    async fn test_resume_collection_roundtrip() {
        use crate::models::record::ResumeRecord;
        use chrono::Utc;
        use uuid::Uuid;

        let store: Arc<dyn RecordStore> = Arc::new(MemoryStore::new());
        let record = ResumeRecord {
            id: Uuid::new_v4(),
            company_name: String::new(),
            job_title: "SWE".to_string(),
            job_description: String::new(),
            file_name: "cv.pdf".to_string(),
            created_at: Utc::now(),
            resume_text: "text".to_string(),
            preview_image: None,
            feedback: None,
        };
        store.upsert(record.clone()).await.unwrap();
        let router = build_router(test_state(store));

        let response = router
            .clone()
            .oneshot(Request::get("/api/resumes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let list = body_json(response).await;
        assert_eq!(list.as_array().unwrap().len(), 1);

        let uri = format!("/api/resumes/{}", record.id);
        let response = router
            .clone()
            .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["jobTitle"], "SWE");

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(uri.as_str())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router
            .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wipe_empties_collection() {
        use crate::models::record::ResumeRecord;
        use chrono::Utc;
        use uuid::Uuid;

        let store: Arc<dyn RecordStore> = Arc::new(MemoryStore::new());
        for title in ["one", "two"] {
            store
                .upsert(ResumeRecord {
                    id: Uuid::new_v4(),
                    company_name: String::new(),
                    job_title: title.to_string(),
                    job_description: String::new(),
                    file_name: "cv.pdf".to_string(),
                    created_at: Utc::now(),
                    resume_text: "text".to_string(),
                    preview_image: None,
                    feedback: None,
                })
                .await
                .unwrap();
        }
        let router = build_router(test_state(store.clone()));

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/api/resumes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(store.list().await.unwrap().is_empty());
    }
}
