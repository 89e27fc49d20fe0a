// src/db/quiz.rs

use std::collections::HashMap;

use sqlx::{FromRow, SqliteExecutor, SqlitePool};

use crate::{
    db::sql_limit,
    error::AppError,
    grading::AnswerKey,
    models::{
        question::QuestionType,
        quiz::{PublicAnswer, PublicQuestion, Quiz, QuizData},
    },
};

pub async fn find_quiz<'e, E>(executor: E, id: i64) -> Result<Option<Quiz>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Quiz>(
        r#"
        SELECT id, title, description, created_at, updated_at
        FROM quizzes
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Like `find_quiz`, but a missing quiz is an error.
pub async fn get_quiz<'e, E>(executor: E, id: i64) -> Result<Quiz, AppError>
where
    E: SqliteExecutor<'e>,
{
    find_quiz(executor, id)
        .await?
        .ok_or(AppError::NotFound("Quiz not found".to_string()))
}

/// Quizzes, newest first.
pub async fn latest_quizzes(pool: &SqlitePool, limit: Option<i64>) -> Result<Vec<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(
        r#"
        SELECT id, title, description, created_at, updated_at
        FROM quizzes
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(sql_limit(limit))
    .fetch_all(pool)
    .await
}

#[derive(FromRow)]
struct QuestionRow {
    id: i64,
    text: String,
    question_type: QuestionType,
}

#[derive(FromRow)]
struct AnswerRow {
    id: i64,
    question_id: i64,
    text: String,
}

/// Builds the public projection of a quiz: questions and their options,
/// both in id order, without correctness flags.
pub async fn quiz_data(pool: &SqlitePool, id: i64) -> Result<QuizData, AppError> {
    let quiz = get_quiz(pool, id).await?;

    let questions = sqlx::query_as::<_, QuestionRow>(
        r#"
        SELECT id, text, question_type
        FROM questions
        WHERE quiz_id = ?
        ORDER BY id
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let answers = sqlx::query_as::<_, AnswerRow>(
        r#"
        SELECT a.id, a.question_id, a.text
        FROM answers a
        JOIN questions q ON a.question_id = q.id
        WHERE q.quiz_id = ?
        ORDER BY a.id
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let mut by_question: HashMap<i64, Vec<PublicAnswer>> = HashMap::new();
    for answer in answers {
        by_question
            .entry(answer.question_id)
            .or_default()
            .push(PublicAnswer {
                id: answer.id,
                text: answer.text,
            });
    }

    let questions = questions
        .into_iter()
        .map(|q| PublicQuestion {
            answers: by_question.remove(&q.id).unwrap_or_default(),
            id: q.id,
            text: q.text,
            question_type: q.question_type,
        })
        .collect();

    Ok(QuizData {
        id: quiz.id,
        title: quiz.title,
        description: quiz.description,
        questions,
    })
}

/// Ids of the quiz's questions, in id order.
pub async fn question_ids<'e, E>(executor: E, quiz_id: i64) -> Result<Vec<i64>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>("SELECT id FROM questions WHERE quiz_id = ? ORDER BY id")
        .bind(quiz_id)
        .fetch_all(executor)
        .await
}

/// Every answer option of the quiz, with its correctness flag.
pub async fn answer_keys<'e, E>(executor: E, quiz_id: i64) -> Result<Vec<AnswerKey>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, AnswerKey>(
        r#"
        SELECT a.id, a.question_id, a.is_correct
        FROM answers a
        JOIN questions q ON a.question_id = q.id
        WHERE q.quiz_id = ?
        ORDER BY a.id
        "#,
    )
    .bind(quiz_id)
    .fetch_all(executor)
    .await
}

pub async fn count_questions<'e, E>(executor: E, quiz_id: i64) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions WHERE quiz_id = ?")
        .bind(quiz_id)
        .fetch_one(executor)
        .await
}
