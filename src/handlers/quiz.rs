// src/handlers/quiz.rs

use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    db,
    error::AppError,
    models::submission::{MAX_USER_NAME_LEN, SubmitQuizRequest, SubmitQuizResponse},
    utils::extract::IdPath,
};

/// Returns the quiz structure for the quiz-taking page.
///
/// Answer options carry only `id` and `text`, never their correctness.
pub async fn quiz_data(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let data = db::quiz::quiz_data(&pool, id).await?;
    Ok(Json(data))
}

/// Grades and stores a quiz attempt.
///
/// * Unknown quiz: 404.
/// * Body that is not a JSON object of the expected shape: 400.
/// * Blank `user_name`: 400.
/// * Selections that do not resolve to an option of their question are skipped.
///
/// The body is read raw so that malformed JSON gets the same `{error}` shape
/// as every other validation failure.
pub async fn submit_quiz(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let quiz = db::quiz::get_quiz(&pool, id).await?;

    let req: SubmitQuizRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Rejected submission payload for quiz {}: {}", quiz.id, e);
        AppError::BadRequest("Invalid JSON payload.".to_string())
    })?;

    let user_name = req.user_name.as_deref().unwrap_or("").trim();
    if user_name.is_empty() {
        return Err(AppError::BadRequest("Name is required.".to_string()));
    }
    if user_name.chars().count() > MAX_USER_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "Name must be at most {} characters.",
            MAX_USER_NAME_LEN
        )));
    }

    let selections = req.answers.unwrap_or_default();

    let (submission_id, score) =
        db::submission::record_submission(&pool, quiz.id, user_name, &selections).await?;

    Ok(Json(SubmitQuizResponse {
        redirect_url: format!("/results/{}/", submission_id),
        score,
    }))
}
