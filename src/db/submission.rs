// src/db/submission.rs

use std::collections::HashMap;

use chrono::Utc;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::{
    db::{quiz, search_pattern},
    error::AppError,
    grading::{self, Grade},
    models::submission::{SubmissionResult, SubmissionSummary, UserAnswerDetail, UserSubmission},
};

/// Grades and stores one attempt at a quiz.
///
/// The submission row, its answers and the final score are written in a
/// single transaction, so a half-graded submission is never visible.
/// The transaction takes the write lock up front: a deferred one that reads
/// first fails with `SQLITE_BUSY` instead of waiting when submits overlap.
/// Returns the new submission id and its score.
pub async fn record_submission(
    pool: &SqlitePool,
    quiz_id: i64,
    user_name: &str,
    selections: &HashMap<String, Value>,
) -> Result<(i64, i64), AppError> {
    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

    // The quiz may have been deleted since the caller looked it up.
    quiz::get_quiz(&mut *tx, quiz_id).await?;

    let question_ids = quiz::question_ids(&mut *tx, quiz_id).await?;
    let keys = quiz::answer_keys(&mut *tx, quiz_id).await?;
    let questions = grading::gradable_questions(&question_ids, keys);

    let submission_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO user_submissions (quiz_id, user_name, score, submitted_at)
        VALUES (?, ?, 0, ?)
        RETURNING id
        "#,
    )
    .bind(quiz_id)
    .bind(user_name)
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create submission: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    let Grade { answers, score } = grading::grade(&questions, selections);

    for answer in &answers {
        sqlx::query(
            r#"
            INSERT INTO user_answers (submission_id, question_id, answer_id, is_correct)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(submission_id)
        .bind(answer.question_id)
        .bind(answer.answer_id)
        .bind(answer.is_correct)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to record user answer: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;
    }

    sqlx::query("UPDATE user_submissions SET score = ? WHERE id = ?")
        .bind(score)
        .bind(submission_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(
        submission_id,
        quiz_id,
        score,
        answered = answers.len(),
        "Recorded quiz submission"
    );

    Ok((submission_id, score))
}

pub async fn find_submission(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<UserSubmission>, sqlx::Error> {
    sqlx::query_as::<_, UserSubmission>(
        r#"
        SELECT id, quiz_id, user_name, score, submitted_at
        FROM user_submissions
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Loads a submission with its quiz, recorded answers and the quiz's question count.
pub async fn submission_result(pool: &SqlitePool, id: i64) -> Result<SubmissionResult, AppError> {
    let submission = find_submission(pool, id)
        .await?
        .ok_or(AppError::NotFound("Submission not found".to_string()))?;

    let quiz = quiz::get_quiz(pool, submission.quiz_id).await?;

    let answers = sqlx::query_as::<_, UserAnswerDetail>(
        r#"
        SELECT
            ua.question_id,
            q.text AS question_text,
            ua.answer_id,
            a.text AS answer_text,
            ua.is_correct
        FROM user_answers ua
        JOIN questions q ON ua.question_id = q.id
        JOIN answers a ON ua.answer_id = a.id
        WHERE ua.submission_id = ?
        ORDER BY ua.question_id
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let total_questions = quiz::count_questions(pool, quiz.id).await?;

    Ok(SubmissionResult {
        submission,
        quiz,
        answers,
        total_questions,
    })
}

/// Submissions with their quiz titles, most recent first.
pub async fn list_submissions(
    pool: &SqlitePool,
    quiz_id: Option<i64>,
    q: Option<&str>,
) -> Result<Vec<SubmissionSummary>, sqlx::Error> {
    sqlx::query_as::<_, SubmissionSummary>(
        r#"
        SELECT
            s.id,
            s.quiz_id,
            z.title AS quiz_title,
            s.user_name,
            s.score,
            s.submitted_at
        FROM user_submissions s
        JOIN quizzes z ON s.quiz_id = z.id
        WHERE (?1 IS NULL OR s.quiz_id = ?1)
          AND (?2 IS NULL OR s.user_name LIKE ?2)
        ORDER BY s.submitted_at DESC, s.id DESC
        "#,
    )
    .bind(quiz_id)
    .bind(search_pattern(q))
    .fetch_all(pool)
    .await
}
