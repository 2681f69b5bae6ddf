//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use tower::ServiceExt;

use filevault_api::AppState;
use filevault_auth::Claims;
use filevault_core::config::AppConfig;
use filevault_core::error::AppError;
use filevault_core::result::AppResult;
use filevault_core::types::{PageRequest, UserId};
use filevault_database::query::SearchQuery;
use filevault_database::repositories::FileStore;
use filevault_entity::file::FileSummary;

/// One ownership record plus the content it points at.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub owner: i64,
    pub content_hash: String,
    pub summary: FileSummary,
}

/// [`FileStore`] over a vector, applying the same filters as the SQL
/// predicates.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<Vec<StoredFile>>,
    calls: AtomicUsize,
}

impl MemoryStore {
    /// Number of store calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn matching(&self, query: &SearchQuery, err: &str) -> AppResult<Vec<FileSummary>> {
        let f = query.filters();
        let min = f.min_size_bytes.as_deref().map(|v| parse_int(v, err)).transpose()?;
        let max = f.max_size_bytes.as_deref().map(|v| parse_int(v, err)).transpose()?;
        let start = f.start_date.as_deref().map(|v| parse_time(v, err)).transpose()?;
        let end = f.end_date.as_deref().map(|v| parse_time(v, err)).transpose()?;
        let needle = f.filename.as_ref().map(|n| n.to_lowercase());

        let mut rows: Vec<FileSummary> = self
            .files
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.owner == query.owner().get())
            .map(|s| s.summary.clone())
            .filter(|s| needle.as_ref().is_none_or(|n| s.filename.to_lowercase().contains(n)))
            .filter(|s| f.mime_type.as_ref().is_none_or(|m| &s.mime_type == m))
            .filter(|s| min.is_none_or(|v| s.size_bytes >= v))
            .filter(|s| max.is_none_or(|v| s.size_bytes <= v))
            .filter(|s| start.is_none_or(|v| s.created_at >= v))
            .filter(|s| end.is_none_or(|v| s.created_at <= v))
            .collect();

        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}

fn parse_int(value: &str, err: &str) -> AppResult<i64> {
    value.trim().parse().map_err(|_| AppError::database(err))
}

fn parse_time(value: &str, err: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(value) {
        return Ok(t.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| t.and_utc())
        .ok_or_else(|| AppError::database(err))
}

#[async_trait]
impl FileStore for MemoryStore {
    async fn count_files(&self, query: &SearchQuery) -> AppResult<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.matching(query, "Failed to count filtered files")?.len() as u64)
    }

    async fn fetch_page(&self, query: &SearchQuery, page: &PageRequest) -> AppResult<Vec<FileSummary>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .matching(query, "Failed to retrieve filtered files")?
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn storage_totals(&self, owner: UserId) -> AppResult<(i64, i64)> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let files = self.files.lock().unwrap();
        let owned: Vec<&StoredFile> = files.iter().filter(|s| s.owner == owner.get()).collect();

        let original: i64 = owned.iter().map(|s| s.summary.size_bytes).sum();
        let mut seen = std::collections::HashSet::new();
        let total: i64 = owned
            .iter()
            .filter(|s| seen.insert(s.content_hash.clone()))
            .map(|s| s.summary.size_bytes)
            .sum();
        Ok((total, original))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// Backing store, for seeding and call counting
    pub store: Arc<MemoryStore>,
    /// Application config
    pub config: AppConfig,
    next_id: AtomicUsize,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let config = AppConfig::load_from("tests/fixtures", "test").expect("Failed to load test config");
        let store = Arc::new(MemoryStore::default());
        let state = AppState::new(config.clone(), store.clone());

        Self {
            router: filevault_api::build_app(state),
            store,
            config,
            next_id: AtomicUsize::new(1),
        }
    }

    /// Insert a file owned by `owner` with its own content record,
    /// created `day` days into 2024.
    pub fn add_file(&self, owner: i64, filename: &str, mime_type: &str, size_bytes: i64, day: u32) -> i64 {
        let hash = format!("content-{}", self.next_id.load(Ordering::SeqCst));
        self.add_shared_file(owner, filename, mime_type, size_bytes, day, &hash)
    }

    /// Insert a file pointing at the content record `content_hash`.
    pub fn add_shared_file(
        &self,
        owner: i64,
        filename: &str,
        mime_type: &str,
        size_bytes: i64,
        day: u32,
        content_hash: &str,
    ) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64;
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::days(i64::from(day));
        self.store.files.lock().unwrap().push(StoredFile {
            owner,
            content_hash: content_hash.to_string(),
            summary: FileSummary {
                id,
                filename: filename.to_string(),
                size_bytes,
                mime_type: mime_type.to_string(),
                created_at,
            },
        });
        id
    }

    /// Mint a token for `user_id` expiring `exp_offset` seconds from now.
    pub fn token_with_expiry(&self, user_id: i64, exp_offset: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            user_id,
            exp: now + exp_offset,
            iat: Some(now),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.auth.jwt_secret.as_bytes()),
        )
        .expect("Failed to mint token")
    }

    /// Mint a token valid for an hour.
    pub fn token(&self, user_id: i64) -> String {
        self.token_with_expiry(user_id, 3600)
    }

    /// GET `path` with an optional bearer token.
    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        let headers: Vec<(&str, String)> = token
            .map(|t| vec![("Authorization", format!("Bearer {t}"))])
            .unwrap_or_default();
        self.get_with_headers(path, &headers).await
    }

    /// GET `path` with explicit headers.
    pub async fn get_with_headers(&self, path: &str, headers: &[(&str, String)]) -> TestResponse {
        let mut req = Request::builder().method("GET").uri(path);
        for (name, value) in headers {
            req = req.header(*name, value.as_str());
        }

        let req = req.body(Body::empty()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Ids of the returned files, in order.
    pub fn file_ids(&self) -> Vec<i64> {
        self.body["files"]
            .as_array()
            .map(|files| files.iter().filter_map(|f| f["id"].as_i64()).collect())
            .unwrap_or_default()
    }
}
