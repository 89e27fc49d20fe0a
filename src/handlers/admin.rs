// src/handlers/admin.rs

//! Record management for every entity. Mounted behind `admin_middleware`.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use validator::Validate;

use crate::{
    db::{self, search_pattern},
    error::AppError,
    models::{
        answer::{Answer, AnswerListParams, CreateAnswerRequest, UpdateAnswerRequest},
        event::{CreateEventRequest, Event, EventListParams, UpdateEventRequest},
        question::{CreateQuestionRequest, Question, QuestionListParams, UpdateQuestionRequest},
        quiz::{CreateQuizRequest, Quiz, QuizListParams, UpdateQuizRequest},
        submission::SubmissionListParams,
    },
    utils::{
        extract::{AppJson, IdPath},
        html::clean_html,
    },
};

fn validate<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|validation_errors| AppError::BadRequest(validation_errors.to_string()))
}

/// Maps "no row touched" to a 404 for the given record kind.
fn ensure_affected(rows_affected: u64, what: &str) -> Result<(), AppError> {
    if rows_affected == 0 {
        return Err(AppError::NotFound(format!("{} not found", what)));
    }
    Ok(())
}

/// Checks that a row exists. `table` is always a literal from this module.
async fn ensure_exists(pool: &SqlitePool, table: &str, id: i64, what: &str) -> Result<(), AppError> {
    let found: Option<i64> = sqlx::query_scalar(&format!("SELECT id FROM {} WHERE id = ?", table))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    found
        .map(|_| ())
        .ok_or(AppError::NotFound(format!("{} not found", what)))
}

// ---------------------------------------------------------------------------
// Quizzes
// ---------------------------------------------------------------------------

/// Lists quizzes, newest first, optionally searching title and description.
pub async fn list_quizzes(
    State(pool): State<SqlitePool>,
    Query(params): Query<QuizListParams>,
) -> Result<impl IntoResponse, AppError> {
    let quizzes = sqlx::query_as::<_, Quiz>(
        r#"
        SELECT id, title, description, created_at, updated_at
        FROM quizzes
        WHERE (?1 IS NULL OR title LIKE ?1 OR description LIKE ?1)
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(search_pattern(params.q.as_deref()))
    .fetch_all(&pool)
    .await?;

    Ok(Json(quizzes))
}

/// Retrieves a quiz with its questions.
pub async fn get_quiz(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let quiz = db::quiz::get_quiz(&pool, id).await?;

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, quiz_id, text, question_type, created_at
        FROM questions
        WHERE quiz_id = ?
        ORDER BY id
        "#,
    )
    .bind(id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(serde_json::json!({
        "quiz": quiz,
        "questions": questions,
    })))
}

pub async fn create_quiz(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<CreateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate(&payload)?;

    let now = Utc::now();
    let description = clean_html(payload.description.as_deref().unwrap_or_default());

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO quizzes (title, description, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&payload.title)
    .bind(description)
    .bind(now)
    .bind(now)
    .fetch_one(&pool)
    .await?;

    tracing::info!("Created quiz {} ({})", id, payload.title);

    Ok((StatusCode::CREATED, Json(serde_json::json!({"id": id}))))
}

/// Updates a quiz. `updated_at` is refreshed on every call.
pub async fn update_quiz(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
    AppJson(payload): AppJson<UpdateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate(&payload)?;

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE quizzes SET ");
    let mut separated = builder.separated(", ");

    separated.push("updated_at = ");
    separated.push_bind_unseparated(Utc::now());

    if let Some(title) = payload.title {
        separated.push("title = ");
        separated.push_bind_unseparated(title);
    }

    if let Some(description) = payload.description {
        separated.push("description = ");
        separated.push_bind_unseparated(clean_html(&description));
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);

    let result = builder.build().execute(&pool).await?;
    ensure_affected(result.rows_affected(), "Quiz")?;

    Ok(StatusCode::OK)
}

/// Deletes a quiz together with its questions, answers and submissions.
pub async fn delete_quiz(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM quizzes WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;
    ensure_affected(result.rows_affected(), "Quiz")?;

    tracing::info!("Deleted quiz {}", id);

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

pub async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(params): Query<QuestionListParams>,
) -> Result<impl IntoResponse, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, quiz_id, text, question_type, created_at
        FROM questions
        WHERE (?1 IS NULL OR quiz_id = ?1)
          AND (?2 IS NULL OR question_type = ?2)
          AND (?3 IS NULL OR text LIKE ?3)
        ORDER BY quiz_id, id
        "#,
    )
    .bind(params.quiz_id)
    .bind(params.question_type)
    .bind(search_pattern(params.q.as_deref()))
    .fetch_all(&pool)
    .await?;

    Ok(Json(questions))
}

/// Retrieves a question with all of its answer options, including correctness.
pub async fn get_question(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let question = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, quiz_id, text, question_type, created_at
        FROM questions
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Question not found".to_string()))?;

    let answers = sqlx::query_as::<_, Answer>(
        "SELECT id, question_id, text, is_correct FROM answers WHERE question_id = ? ORDER BY id",
    )
    .bind(id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(serde_json::json!({
        "question": question,
        "answers": answers,
    })))
}

pub async fn create_question(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate(&payload)?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO questions (quiz_id, text, question_type, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(payload.quiz_id)
    .bind(&payload.text)
    .bind(payload.question_type)
    .bind(Utc::now())
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({"id": id}))))
}

pub async fn update_question(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
    AppJson(payload): AppJson<UpdateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate(&payload)?;

    if payload.quiz_id.is_none() && payload.text.is_none() && payload.question_type.is_none() {
        ensure_exists(&pool, "questions", id, "Question").await?;
        return Ok(StatusCode::OK);
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE questions SET ");
    let mut separated = builder.separated(", ");

    if let Some(quiz_id) = payload.quiz_id {
        separated.push("quiz_id = ");
        separated.push_bind_unseparated(quiz_id);
    }

    if let Some(text) = payload.text {
        separated.push("text = ");
        separated.push_bind_unseparated(text);
    }

    if let Some(question_type) = payload.question_type {
        separated.push("question_type = ");
        separated.push_bind_unseparated(question_type);
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);

    let result = builder.build().execute(&pool).await?;
    ensure_affected(result.rows_affected(), "Question")?;

    Ok(StatusCode::OK)
}

/// Deletes a question, its answer options and the user answers that chose them.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;
    ensure_affected(result.rows_affected(), "Question")?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

pub async fn list_answers(
    State(pool): State<SqlitePool>,
    Query(params): Query<AnswerListParams>,
) -> Result<impl IntoResponse, AppError> {
    let answers = sqlx::query_as::<_, Answer>(
        r#"
        SELECT id, question_id, text, is_correct
        FROM answers
        WHERE (?1 IS NULL OR question_id = ?1)
          AND (?2 IS NULL OR is_correct = ?2)
          AND (?3 IS NULL OR text LIKE ?3)
        ORDER BY question_id, id
        "#,
    )
    .bind(params.question_id)
    .bind(params.is_correct)
    .bind(search_pattern(params.q.as_deref()))
    .fetch_all(&pool)
    .await?;

    Ok(Json(answers))
}

pub async fn create_answer(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<CreateAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate(&payload)?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO answers (question_id, text, is_correct)
        VALUES (?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(payload.question_id)
    .bind(&payload.text)
    .bind(payload.is_correct)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({"id": id}))))
}

pub async fn update_answer(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
    AppJson(payload): AppJson<UpdateAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate(&payload)?;

    if payload.question_id.is_none() && payload.text.is_none() && payload.is_correct.is_none() {
        ensure_exists(&pool, "answers", id, "Answer").await?;
        return Ok(StatusCode::OK);
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE answers SET ");
    let mut separated = builder.separated(", ");

    if let Some(question_id) = payload.question_id {
        separated.push("question_id = ");
        separated.push_bind_unseparated(question_id);
    }

    if let Some(text) = payload.text {
        separated.push("text = ");
        separated.push_bind_unseparated(text);
    }

    // Past submissions keep their cached correctness.
    if let Some(is_correct) = payload.is_correct {
        separated.push("is_correct = ");
        separated.push_bind_unseparated(is_correct);
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);

    let result = builder.build().execute(&pool).await?;
    ensure_affected(result.rows_affected(), "Answer")?;

    Ok(StatusCode::OK)
}

pub async fn delete_answer(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM answers WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;
    ensure_affected(result.rows_affected(), "Answer")?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Lists every event, past ones included, soonest first.
pub async fn list_events(
    State(pool): State<SqlitePool>,
    Query(params): Query<EventListParams>,
) -> Result<impl IntoResponse, AppError> {
    let events = sqlx::query_as::<_, Event>(
        r#"
        SELECT id, title, description, date, location
        FROM events
        WHERE (?1 IS NULL OR title LIKE ?1 OR location LIKE ?1)
        ORDER BY date, id
        "#,
    )
    .bind(search_pattern(params.q.as_deref()))
    .fetch_all(&pool)
    .await?;

    Ok(Json(events))
}

pub async fn get_event(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let event = sqlx::query_as::<_, Event>(
        "SELECT id, title, description, date, location FROM events WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Event not found".to_string()))?;

    Ok(Json(event))
}

pub async fn create_event(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate(&payload)?;

    let description = clean_html(payload.description.as_deref().unwrap_or_default());

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO events (title, description, date, location)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&payload.title)
    .bind(description)
    .bind(payload.date)
    .bind(&payload.location)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({"id": id}))))
}

pub async fn update_event(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
    AppJson(payload): AppJson<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate(&payload)?;

    if payload.title.is_none()
        && payload.description.is_none()
        && payload.date.is_none()
        && payload.location.is_none()
    {
        ensure_exists(&pool, "events", id, "Event").await?;
        return Ok(StatusCode::OK);
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE events SET ");
    let mut separated = builder.separated(", ");

    if let Some(title) = payload.title {
        separated.push("title = ");
        separated.push_bind_unseparated(title);
    }

    if let Some(description) = payload.description {
        separated.push("description = ");
        separated.push_bind_unseparated(clean_html(&description));
    }

    if let Some(date) = payload.date {
        separated.push("date = ");
        separated.push_bind_unseparated(date);
    }

    if let Some(location) = payload.location {
        separated.push("location = ");
        separated.push_bind_unseparated(location);
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);

    let result = builder.build().execute(&pool).await?;
    ensure_affected(result.rows_affected(), "Event")?;

    Ok(StatusCode::OK)
}

pub async fn delete_event(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM events WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;
    ensure_affected(result.rows_affected(), "Event")?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Submissions (read and delete only)
// ---------------------------------------------------------------------------

pub async fn list_submissions(
    State(pool): State<SqlitePool>,
    Query(params): Query<SubmissionListParams>,
) -> Result<impl IntoResponse, AppError> {
    let submissions =
        db::submission::list_submissions(&pool, params.quiz_id, params.q.as_deref()).await?;
    Ok(Json(submissions))
}

pub async fn get_submission(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let result = db::submission::submission_result(&pool, id).await?;
    Ok(Json(result))
}

pub async fn delete_submission(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM user_submissions WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;
    ensure_affected(result.rows_affected(), "Submission")?;

    Ok(StatusCode::NO_CONTENT)
}
