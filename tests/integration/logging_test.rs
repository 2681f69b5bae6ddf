//! Integration tests for request logging.

use std::io;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use tracing_subscriber::fmt::MakeWriter;

use crate::helpers::TestApp;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn test_query_token_never_logged() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = TestApp::new();
    app.add_file(3, "notes.txt", "text/plain", 10, 1);
    let token = app.token(3);

    let response = app
        .get_with_headers(&format!("/search?filename=notes&auth={token}"), &[])
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let rejected = app.get_with_headers("/files?auth=not-a-token", &[]).await;
    assert_eq!(rejected.status, StatusCode::UNAUTHORIZED);

    let output = logs.contents();
    assert!(output.contains("/search"), "request path missing from logs: {output}");
    assert!(!output.contains(&token), "token leaked into logs: {output}");
    assert!(!output.contains("not-a-token"), "token leaked into logs: {output}");
    assert!(!output.contains("auth="), "query string leaked into logs: {output}");
}
