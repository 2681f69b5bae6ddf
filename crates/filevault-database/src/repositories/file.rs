//! File repository implementation.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use filevault_core::error::{AppError, ErrorKind};
use filevault_core::result::AppResult;
use filevault_core::types::{PageRequest, UserId};
use filevault_entity::file::FileSummary;

use crate::query::{SearchQuery, SqlArg, Statement};

/// Read access to a user's files.
///
/// Both search calls receive the same [`SearchQuery`], so the count and
/// the page are filtered by one predicate list.
#[async_trait]
pub trait FileStore: Send + Sync + 'static {
    /// Count records matching the query.
    async fn count_files(&self, query: &SearchQuery) -> AppResult<u64>;

    /// Fetch one page of matching records, newest first. A row that cannot
    /// be decoded fails the whole page.
    async fn fetch_page(&self, query: &SearchQuery, page: &PageRequest)
    -> AppResult<Vec<FileSummary>>;

    /// Deduplicated and original byte totals for a user's files.
    async fn storage_totals(&self, owner: UserId) -> AppResult<(i64, i64)>;

    /// Check store connectivity.
    async fn ping(&self) -> AppResult<()>;
}

/// PostgreSQL-backed [`FileStore`].
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for FileRepository {
    async fn count_files(&self, query: &SearchQuery) -> AppResult<u64> {
        let Statement { sql, args } = query.count_statement();

        let mut count = sqlx::query_scalar::<_, i64>(&sql);
        for arg in &args {
            count = match arg {
                SqlArg::Int(v) => count.bind(*v),
                SqlArg::Text(v) => count.bind(v.as_str()),
            };
        }

        let total = count.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count filtered files", e)
        })?;

        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: &PageRequest,
    ) -> AppResult<Vec<FileSummary>> {
        let Statement { sql, args } = query.page_statement(page);

        let mut select = sqlx::query(&sql);
        for arg in &args {
            select = match arg {
                SqlArg::Int(v) => select.bind(*v),
                SqlArg::Text(v) => select.bind(v.as_str()),
            };
        }

        let rows: Vec<PgRow> = select.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to retrieve filtered files", e)
        })?;

        rows.iter()
            .map(|row| {
                FileSummary::from_row(row).map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        "Failed to process filtered file data",
                        e,
                    )
                })
            })
            .collect()
    }

    async fn storage_totals(&self, owner: UserId) -> AppResult<(i64, i64)> {
        sqlx::query_as::<_, (i64, i64)>(
            "SELECT \
               (SELECT COALESCE(SUM(pf.size_bytes), 0)::BIGINT FROM physical_files pf \
                 WHERE pf.hash IN (SELECT physical_file_hash FROM user_files WHERE user_id = $1)), \
               (SELECT COALESCE(SUM(pf.size_bytes), 0)::BIGINT FROM user_files uf \
                 JOIN physical_files pf ON uf.physical_file_hash = pf.hash WHERE uf.user_id = $1)",
        )
        .bind(owner.get())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to calculate storage usage", e)
        })
    }

    async fn ping(&self) -> AppResult<()> {
        crate::connection::health_check(&self.pool).await.map(|_| ())
    }
}
