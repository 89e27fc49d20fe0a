// src/models/question.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// How a question is meant to be answered.
/// Stored for display only; grading never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    SingleChoice,
    Text,
}

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: i64,

    pub quiz_id: i64,

    /// The prompt shown to the user.
    pub text: String,

    pub question_type: QuestionType,

    pub created_at: DateTime<Utc>,
}

/// Query parameters for the admin question list.
#[derive(Debug, Deserialize)]
pub struct QuestionListParams {
    pub quiz_id: Option<i64>,
    pub question_type: Option<QuestionType>,
    pub q: Option<String>,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    pub quiz_id: i64,
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
    pub question_type: QuestionType,
}

/// DTO for updating a question. Fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQuestionRequest {
    pub quiz_id: Option<i64>,
    #[validate(length(min = 1, max = 2000))]
    pub text: Option<String>,
    pub question_type: Option<QuestionType>,
}
