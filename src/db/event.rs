// src/db/event.rs

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::{db::sql_limit, models::event::Event};

/// Events dated `today` or later, soonest first.
pub async fn upcoming_events(
    pool: &SqlitePool,
    today: NaiveDate,
    limit: Option<i64>,
) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        SELECT id, title, description, date, location
        FROM events
        WHERE date >= ?
        ORDER BY date ASC, id ASC
        LIMIT ?
        "#,
    )
    .bind(today)
    .bind(sql_limit(limit))
    .fetch_all(pool)
    .await
}
