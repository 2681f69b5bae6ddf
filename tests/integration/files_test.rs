//! Integration tests for `GET /files` and `GET /stats`.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_list_files_newest_first() {
    let app = TestApp::new();
    app.add_file(1, "old.txt", "text/plain", 10, 1);
    app.add_file(1, "new.txt", "text/plain", 10, 5);
    app.add_file(2, "theirs.txt", "text/plain", 10, 3);

    let response = app.get("/files", Some(&app.token(1))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.file_ids(), vec![2, 1]);
    assert_eq!(response.body["pagination"]["total_files"], 2);
}

#[tokio::test]
async fn test_list_files_paginates() {
    let app = TestApp::new();
    for day in 0..5 {
        app.add_file(1, "f.txt", "text/plain", 10, day);
    }

    let response = app.get("/files?page=2&pageSize=2", Some(&app.token(1))).await;

    assert_eq!(response.file_ids(), vec![3, 2]);
    assert_eq!(response.body["pagination"]["total_pages"], 3);
}

#[tokio::test]
async fn test_list_ignores_filter_params() {
    let app = TestApp::new();
    app.add_file(1, "a.png", "image/png", 10, 1);
    app.add_file(1, "b.txt", "text/plain", 10, 2);

    let response = app.get("/files?mime_type=image/png", Some(&app.token(1))).await;

    assert_eq!(response.body["pagination"]["total_files"], 2);
}

#[tokio::test]
async fn test_stats_counts_shared_content_once() {
    let app = TestApp::new();
    app.add_shared_file(1, "a.bin", "application/octet-stream", 1024, 1, "same");
    app.add_shared_file(1, "copy-of-a.bin", "application/octet-stream", 1024, 2, "same");
    app.add_file(1, "b.bin", "application/octet-stream", 2048, 3);
    app.add_file(2, "theirs.bin", "application/octet-stream", 4096, 3);

    let response = app.get("/stats", Some(&app.token(1))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_storage_used_bytes"], 3072);
    assert_eq!(response.body["original_storage_used_bytes"], 4096);
    assert_eq!(response.body["storage_savings_bytes"], 1024);
    assert_eq!(response.body["storage_savings_percentage"], 25.0);
    assert_eq!(response.body["storage_quota_mb"], 1);
}

#[tokio::test]
async fn test_stats_for_empty_account() {
    let app = TestApp::new();

    let response = app.get("/stats", Some(&app.token(5))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_storage_used_bytes"], 0);
    assert_eq!(response.body["storage_savings_percentage"], 0.0);
    assert_eq!(response.body["quota_used_percentage"], 0.0);
}
