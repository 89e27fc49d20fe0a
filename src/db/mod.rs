// src/db/mod.rs

//! Queries shared by the page handlers, the JSON endpoints and the admin API.

pub mod event;
pub mod quiz;
pub mod submission;

/// Builds a `LIKE` pattern from an optional search keyword.
pub(crate) fn search_pattern(q: Option<&str>) -> Option<String> {
    q.map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| format!("%{}%", k))
}

/// SQLite reads a negative `LIMIT` as "no limit".
pub(crate) fn sql_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(-1)
}
