// src/handlers/pages.rs

use axum::extract::State;
use chrono::Utc;
use maud::Markup;
use sqlx::SqlitePool;

use crate::{db, error::PageError, utils::extract::PageIdPath, views};

/// How many quizzes and events the home page shows.
const HOME_PREVIEW_LIMIT: i64 = 3;

pub async fn home(State(pool): State<SqlitePool>) -> Result<Markup, PageError> {
    let latest_quizzes = db::quiz::latest_quizzes(&pool, Some(HOME_PREVIEW_LIMIT)).await?;
    let upcoming_events =
        db::event::upcoming_events(&pool, Utc::now().date_naive(), Some(HOME_PREVIEW_LIMIT))
            .await?;

    Ok(views::quiz::home(&latest_quizzes, &upcoming_events))
}

pub async fn quiz_list(State(pool): State<SqlitePool>) -> Result<Markup, PageError> {
    let quizzes = db::quiz::latest_quizzes(&pool, None).await?;
    Ok(views::quiz::quiz_list(&quizzes))
}

pub async fn quiz_attempt(
    State(pool): State<SqlitePool>,
    PageIdPath(id): PageIdPath,
) -> Result<Markup, PageError> {
    let quiz = db::quiz::get_quiz(&pool, id).await?;
    Ok(views::quiz::quiz_attempt(&quiz))
}

pub async fn quiz_result(
    State(pool): State<SqlitePool>,
    PageIdPath(submission_id): PageIdPath,
) -> Result<Markup, PageError> {
    let result = db::submission::submission_result(&pool, submission_id).await?;
    Ok(views::submission::quiz_result(&result))
}

/// Upcoming events only; anything dated before today (UTC) is hidden.
pub async fn event_list(State(pool): State<SqlitePool>) -> Result<Markup, PageError> {
    let events = db::event::upcoming_events(&pool, Utc::now().date_naive(), None).await?;
    Ok(views::event::event_list(&events))
}

pub async fn history(State(pool): State<SqlitePool>) -> Result<Markup, PageError> {
    let submissions = db::submission::list_submissions(&pool, None, None).await?;
    Ok(views::submission::history(&submissions))
}

pub async fn profile() -> Markup {
    views::profile()
}
