//! Search query builder over the ownership/content join.
//!
//! A [`SearchQuery`] is an ordered list of predicates, each a fragment
//! template with exactly one argument. Placeholder numbers are assigned from
//! list position when the query is rendered, so the fragment text and the
//! argument list cannot drift apart. The count and page statements are both
//! rendered from the same list.

use filevault_core::types::{PageRequest, SearchFilters, UserId};

/// Marker replaced by `$N` when a predicate is rendered.
const SLOT: &str = "{}";

/// Tables every search statement reads from.
const FROM_CLAUSE: &str =
    "FROM user_files uf JOIN physical_files pf ON uf.physical_file_hash = pf.hash";

/// Columns projected into a `FileSummary`.
const SUMMARY_COLUMNS: &str = "uf.id, uf.filename, pf.size_bytes, uf.mime_type, uf.created_at";

const OWNER_PREDICATE: &str = "uf.user_id = {}";
const FILENAME_PREDICATE: &str = "uf.filename ILIKE {}";
const MIME_TYPE_PREDICATE: &str = "uf.mime_type = {}";
const MIN_SIZE_PREDICATE: &str = "pf.size_bytes >= CAST({} AS BIGINT)";
const MAX_SIZE_PREDICATE: &str = "pf.size_bytes <= CAST({} AS BIGINT)";
const START_DATE_PREDICATE: &str = "uf.created_at >= CAST({} AS TIMESTAMPTZ)";
const END_DATE_PREDICATE: &str = "uf.created_at <= CAST({} AS TIMESTAMPTZ)";

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlArg {
    /// A `BIGINT` value.
    Int(i64),
    /// A `TEXT` value.
    Text(String),
}

/// A rendered statement and the arguments for its placeholders, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// SQL text with `$1..$N` placeholders.
    pub sql: String,
    /// Arguments; `args[i]` binds to `$(i + 1)`.
    pub args: Vec<SqlArg>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Predicate {
    template: &'static str,
    arg: SqlArg,
}

/// Ordered predicate list for one user's file search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    owner: UserId,
    filters: SearchFilters,
    predicates: Vec<Predicate>,
}

impl SearchQuery {
    /// Build the predicate list for `owner` with every present filter, in
    /// the fixed order filename, MIME type, min size, max size, start date,
    /// end date. The owner predicate is always first.
    pub fn new(owner: UserId, filters: SearchFilters) -> Self {
        let filters = filters.normalized();
        let mut query = Self {
            owner,
            filters: SearchFilters::default(),
            predicates: Vec::new(),
        };
        query.push(OWNER_PREDICATE, SqlArg::Int(owner.get()));

        if let Some(filename) = &filters.filename {
            query.push(FILENAME_PREDICATE, SqlArg::Text(contains_pattern(filename)));
        }
        if let Some(mime_type) = &filters.mime_type {
            query.push(MIME_TYPE_PREDICATE, SqlArg::Text(mime_type.clone()));
        }
        if let Some(min_size) = &filters.min_size_bytes {
            query.push(MIN_SIZE_PREDICATE, SqlArg::Text(min_size.clone()));
        }
        if let Some(max_size) = &filters.max_size_bytes {
            query.push(MAX_SIZE_PREDICATE, SqlArg::Text(max_size.clone()));
        }
        if let Some(start) = &filters.start_date {
            query.push(START_DATE_PREDICATE, SqlArg::Text(start.clone()));
        }
        if let Some(end) = &filters.end_date {
            query.push(END_DATE_PREDICATE, SqlArg::Text(end.clone()));
        }

        query.filters = filters;
        query
    }

    /// A query with only the owner predicate.
    pub fn for_owner(owner: UserId) -> Self {
        Self::new(owner, SearchFilters::default())
    }

    fn push(&mut self, template: &'static str, arg: SqlArg) {
        debug_assert_eq!(template.matches(SLOT).count(), 1);
        self.predicates.push(Predicate { template, arg });
    }

    /// The user every result belongs to.
    pub fn owner(&self) -> UserId {
        self.owner
    }

    /// The normalized filters this query was built from.
    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Number of predicates, including the owner predicate.
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    /// The composed predicate, `AND`-joined, with `$1..$N` placeholders.
    pub fn where_clause(&self) -> String {
        self.predicates
            .iter()
            .enumerate()
            .map(|(i, p)| p.template.replacen(SLOT, &placeholder(i + 1), 1))
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    /// Arguments in placeholder order.
    pub fn args(&self) -> Vec<SqlArg> {
        self.predicates.iter().map(|p| p.arg.clone()).collect()
    }

    /// `SELECT COUNT(*)` over the matching records.
    pub fn count_statement(&self) -> Statement {
        Statement {
            sql: format!("SELECT COUNT(*) {FROM_CLAUSE} WHERE {}", self.where_clause()),
            args: self.args(),
        }
    }

    /// One page of summaries, newest first. Limit and offset are bound
    /// after every predicate argument.
    pub fn page_statement(&self, page: &PageRequest) -> Statement {
        let limit_slot = self.predicates.len() + 1;
        let sql = format!(
            "SELECT {SUMMARY_COLUMNS} {FROM_CLAUSE} WHERE {} \
             ORDER BY uf.created_at DESC LIMIT {} OFFSET {}",
            self.where_clause(),
            placeholder(limit_slot),
            placeholder(limit_slot + 1),
        );

        let mut args = self.args();
        args.push(SqlArg::Int(to_i64(page.limit())));
        args.push(SqlArg::Int(to_i64(page.offset())));

        Statement { sql, args }
    }
}

fn placeholder(position: usize) -> String {
    format!("${position}")
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// `%value%` with `ILIKE` wildcards in `value` escaped, so the filter is a
/// literal substring match.
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
