pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers::handle_upload_resume;
use crate::scan::handlers::{handle_scan, handle_unlock};
use crate::state::AppState;
use crate::usage::handlers::{handle_current_usage, handle_get_usage};

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Scan API
        .route("/api/v1/scan", post(handle_scan))
        .route("/api/v1/scan/unlock", post(handle_unlock))
        // Extraction API
        .route(
            "/api/v1/upload_resume",
            post(handle_upload_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Usage API
        .route("/api/v1/usage", get(handle_current_usage))
        .route("/api/v1/usage/:month", get(handle_get_usage))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use chrono::Utc;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::usage::{InMemoryUsageStore, MonthKey, UsageStore};

    const RESUME: &str = "Jane Doe\nContact\nAustin, TX\nSummary\nSenior data analyst. US citizen.\n\
        Experience\n- Built SQL dashboards\nEducation\nBS\nSkills\nSQL\nCertifications\nTableau";
    const JOB: &str = "Job Title: Data Analyst\nLocation: Austin, TX\nSQL dashboards";

    fn test_config() -> Config {
        Config {
            usage_warning_threshold: 1,
            ..Config::default()
        }
    }

    fn app_with(config: Config) -> (Router, Arc<InMemoryUsageStore>) {
        let store = Arc::new(InMemoryUsageStore::new());
        let state = AppState {
            config,
            usage: store.clone(),
        };
        (build_router(state), store)
    }

    fn app() -> (Router, Arc<InMemoryUsageStore>) {
        app_with(test_config())
    }

    fn this_month() -> MonthKey {
        MonthKey::from_date(Utc::now().date_naive())
    }

    /// Detailed scans counted in either month a request could have been bucketed into.
    async fn scans_between(store: &InMemoryUsageStore, before: MonthKey, after: MonthKey) -> u64 {
        let mut count = store.read(&before).await.unwrap();
        if after != before {
            count += store.read(&after).await.unwrap();
        }
        count
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart(field: &str, file_name: &str, content: impl AsRef<[u8]>) -> Request<Body> {
        let boundary = "rexa-test-boundary";
        let mut body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content.as_ref());
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        Request::builder()
            .method("POST")
            .uri("/api/v1/upload_resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _) = app();
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_free_scan_is_locked() {
        let (router, store) = app();
        let (status, body) = send(
            router,
            post_json("/api/v1/scan", json!({ "resume_text": RESUME, "job_text": JOB })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["verdict"], "PASS");
        assert_eq!(body["locked"], true);
        assert!(body.get("details").is_none());
        assert!(body["match_label"].as_str().unwrap().ends_with("% Match"));
        // free scans are not counted
        assert_eq!(store.read(&this_month()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_blank_scan_is_bad_request() {
        let (router, _) = app();
        let (status, body) = send(
            router,
            post_json("/api/v1/scan", json!({ "resume_text": " ", "job_text": JOB })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unlock_returns_details_and_counts_usage() {
        let (router, store) = app();
        let request = || post_json("/api/v1/scan/unlock", json!({ "resume_text": RESUME, "job_text": JOB }));

        let before = this_month();
        let (status, first) = send(router.clone(), request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["locked"], false);
        assert_eq!(first["details"]["fragments"].as_array().unwrap().len(), 5);
        assert!(first["details"]["feedback_html"]
            .as_str()
            .unwrap()
            .contains("5. Formatting / Readability"));
        assert!(first["details"].get("usage_warning").is_none());

        assert_eq!(scans_between(&store, before, this_month()).await, 1);

        // threshold is 1: the second unlock reads 1 (not above), the third reads 2
        let (_, second) = send(router.clone(), request()).await;
        let (_, third) = send(router, request()).await;
        let after = this_month();
        assert_eq!(scans_between(&store, before, after).await, 3);

        // a month rollover mid-test restarts the count, so the notice only lines up within one month
        if before == after {
            assert!(second["details"].get("usage_warning").is_none());
            assert!(third["details"]["usage_warning"]
                .as_str()
                .unwrap()
                .contains("performed 2 detailed scans"));
        }
    }

    #[tokio::test]
    async fn test_usage_endpoints() {
        let (router, store) = app();
        let month = MonthKey::new(2026, 2).unwrap();
        store.increment(&month).await.unwrap();

        let request = Request::builder()
            .uri("/api/v1/usage/2026-02")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["month"], "2026-02");
        assert_eq!(body["count"], 1);

        let request = Request::builder()
            .uri("/api/v1/usage/2026-13")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_plain_text() {
        let (router, _) = app();
        let (status, body) = send(router, multipart("resumeFile", "cv.txt", "Experience\n- Rust")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text_content"], "Experience\n- Rust");
    }

    #[tokio::test]
    async fn test_upload_unsupported_type() {
        let (router, _) = app();
        let (status, body) = send(router, multipart("resumeFile", "cv.rtf", "whatever")).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_upload_without_resume_field() {
        let (router, _) = app();
        let (status, _) = send(router, multipart("otherField", "cv.txt", "text")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_docx_expanding_past_limit_is_rejected() {
        use std::io::{Cursor, Write};

        let (router, _) = app_with(Config {
            max_extracted_bytes: 4096,
            ..test_config()
        });

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", zip::write::FileOptions::default())
            .unwrap();
        let run = "a".repeat(256 * 1024);
        write!(writer, "<w:p><w:r><w:t>{run}</w:t></w:r></w:p>").unwrap();
        let docx = writer.finish().unwrap().into_inner();

        let (status, body) = send(router, multipart("resumeFile", "cv.docx", docx)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "EXTRACTION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_unreadable_pdf() {
        let (router, _) = app();
        let (status, body) = send(router, multipart("resumeFile", "cv.pdf", "not a pdf")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "EXTRACTION_ERROR");
    }
}
