//! Integration tests using wiremock to exercise the reqwest transport end to end.

use renamed::{Backoff, Client, Error, PdfSplitOptions, RenameOptions, SplitMode};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .api_key("rt_test123")
        .base_url(format!("{}/api/v1", server.uri()))
        .unwrap()
        .backoff(Backoff {
            initial_delay: Duration::from_millis(10),
            max_delay: Duration::from_millis(50),
            jitter: false,
        })
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/user"))
        .and(header("authorization", "Bearer rt_test123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user123",
            "email": "test@example.com",
            "name": "Test User",
            "credits": 100
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let user = client_for(&mock_server).get_user().await.unwrap();

    assert_eq!(user.id, "user123");
    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.name.as_deref(), Some("Test User"));
    assert_eq!(user.credits, Some(100));
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid API key"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).get_user().await.unwrap_err();

    match err {
        Error::Authentication { message } => assert_eq!(message, "Invalid API key"),
        other => panic!("Expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rate_limit_body_hint_is_exposed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/user"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"error": "Rate limit exceeded", "retryAfter": 60})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key("rt_test123")
        .base_url(format!("{}/api/v1", mock_server.uri()))
        .unwrap()
        .max_retries(1)
        .build()
        .unwrap();

    let err = client.get_user().await.unwrap_err();
    assert_eq!(err.retry_after(), Some(Duration::from_secs(60)));
}

#[tokio::test]
async fn test_retry_on_5xx() {
    let mock_server = MockServer::start().await;
    let attempt_count = Arc::new(AtomicUsize::new(0));
    let attempt_count_clone = attempt_count.clone();

    // First two requests fail with 500, third succeeds
    Mock::given(method("GET"))
        .and(path("/api/v1/user"))
        .respond_with(move |_req: &wiremock::Request| {
            let count = attempt_count_clone.fetch_add(1, Ordering::SeqCst);
            if count < 2 {
                ResponseTemplate::new(500).set_body_string("Server error")
            } else {
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "user123", "email": "test@example.com"}))
            }
        })
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key("rt_test123")
        .base_url(format!("{}/api/v1", mock_server.uri()))
        .unwrap()
        .max_retries(3)
        .backoff(Backoff::none())
        .build()
        .unwrap();

    let response = client.get::<renamed::User>("/user").await.unwrap();

    assert_eq!(response.data.id, "user123");
    assert_eq!(response.attempts, 3);
    assert!(response.was_retried());
    assert_eq!(attempt_count.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Nothing listens on port 1.
    let client = Client::builder()
        .api_key("rt_test123")
        .base_url("http://127.0.0.1:1/api/v1")
        .unwrap()
        .max_retries(2)
        .backoff(Backoff::none())
        .build()
        .unwrap();

    let err = client.get_user().await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/user"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "user123", "email": "test@example.com"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key("rt_test123")
        .base_url(format!("{}/api/v1", mock_server.uri()))
        .unwrap()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.get_user().await.unwrap_err();
    assert!(matches!(err, Error::Timeout { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_rename_uploads_multipart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/rename"))
        .and(header("authorization", "Bearer rt_test123"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("filename=\"doc.pdf\""))
        .and(body_string_contains("fake pdf content"))
        .and(body_string_contains("{date}_{company}"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "originalFilename": "doc.pdf",
            "suggestedFilename": "2025-01-15_Invoice.pdf",
            "folderPath": "2025/Invoices",
            "confidence": 0.95
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = RenameOptions {
        template: Some("{date}_{company}".to_string()),
    };
    let result = client_for(&mock_server)
        .rename(b"fake pdf content".to_vec(), "doc.pdf", Some(options))
        .await
        .unwrap();

    assert_eq!(result.original_filename, "doc.pdf");
    assert_eq!(result.suggested_filename, "2025-01-15_Invoice.pdf");
    assert_eq!(result.folder_path.as_deref(), Some("2025/Invoices"));
    assert_eq!(result.confidence, Some(0.95));
}

#[tokio::test]
async fn test_rename_file_reads_from_disk() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/rename"))
        .and(body_string_contains("filename=\"renamed-upload-test.png\""))
        .and(body_string_contains("image/png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "originalFilename": "renamed-upload-test.png",
            "suggestedFilename": "2025-02-01_Receipt.png"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let file = std::env::temp_dir().join("renamed-upload-test.png");
    tokio::fs::write(&file, b"not really a png").await.unwrap();

    let result = client_for(&mock_server)
        .rename_file(&file, None)
        .await
        .unwrap();
    let _ = tokio::fs::remove_file(&file).await;

    assert_eq!(result.suggested_filename, "2025-02-01_Receipt.png");
    assert_eq!(result.folder_path, None);
}

#[tokio::test]
async fn test_rename_file_missing_is_io_error() {
    let mock_server = MockServer::start().await;

    let err = client_for(&mock_server)
        .rename_file("/definitely/not/here.pdf", None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}

#[tokio::test]
async fn test_pdf_split_then_wait() {
    let mock_server = MockServer::start().await;
    let status_url = format!("{}/api/v1/status/job123", mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/v1/pdf-split"))
        .and(body_string_contains("name=\"mode\""))
        .and(body_string_contains("pages"))
        .and(body_string_contains("name=\"pagesPerSplit\""))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"statusUrl": status_url, "jobId": "job123"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let poll_count = Arc::new(AtomicUsize::new(0));
    let poll_count_clone = poll_count.clone();

    Mock::given(method("GET"))
        .and(path("/api/v1/status/job123"))
        .and(header("authorization", "Bearer rt_test123"))
        .respond_with(move |_req: &wiremock::Request| {
            let count = poll_count_clone.fetch_add(1, Ordering::SeqCst) + 1;
            if count < 3 {
                ResponseTemplate::new(200).set_body_json(json!({
                    "jobId": "job123",
                    "status": "processing",
                    "progress": count * 33
                }))
            } else {
                ResponseTemplate::new(200).set_body_json(json!({
                    "jobId": "job123",
                    "status": "completed",
                    "progress": 100,
                    "result": {
                        "originalFilename": "multi.pdf",
                        "documents": [{
                            "index": 0,
                            "filename": "doc1.pdf",
                            "pages": "1-5",
                            "downloadUrl": "https://cdn.example.com/doc1.pdf",
                            "size": 1000
                        }],
                        "totalPages": 10
                    }
                }))
            }
        })
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key("rt_test123")
        .base_url(format!("{}/api/v1", mock_server.uri()))
        .unwrap()
        .poll_interval(Duration::from_millis(10))
        .job_timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    let options = PdfSplitOptions {
        mode: Some(SplitMode::Pages),
        pages_per_split: Some(5),
    };
    let mut job = client
        .pdf_split(b"%PDF-1.7 fake".to_vec(), "multi.pdf", Some(options))
        .await
        .unwrap();
    assert_eq!(job.status_url(), status_url);

    let mut progress = Vec::new();
    let result = job
        .wait_with_progress(|status| progress.extend(status.progress))
        .await
        .unwrap();

    assert_eq!(progress, vec![33, 66]);
    assert_eq!(result.original_filename, "multi.pdf");
    assert_eq!(result.documents.len(), 1);
    assert_eq!(result.total_pages, 10);
    assert_eq!(poll_count.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/user"))
        .and(header("x-request-source", "integration-test"))
        .and(header_regex("user-agent", "^renamed-rust/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "user123", "email": "test@example.com"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key("rt_test123")
        .base_url(format!("{}/api/v1", mock_server.uri()))
        .unwrap()
        .default_header("X-Request-Source", "integration-test")
        .unwrap()
        .build()
        .unwrap();

    client.get_user().await.unwrap();
}
