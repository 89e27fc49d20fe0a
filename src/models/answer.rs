// src/models/answer.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'answers' table in the database.
/// Any number of answers of a question may be flagged correct.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Deserialize)]
pub struct AnswerListParams {
    pub question_id: Option<i64>,
    pub is_correct: Option<bool>,
    pub q: Option<String>,
}

/// DTO for creating a new answer option.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAnswerRequest {
    pub question_id: i64,
    #[validate(length(min = 1, max = 1000))]
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// DTO for updating an answer option. Fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAnswerRequest {
    pub question_id: Option<i64>,
    #[validate(length(min = 1, max = 1000))]
    pub text: Option<String>,
    pub is_correct: Option<bool>,
}
