// src/models/submission.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::quiz::Quiz;

/// Longest accepted display name.
pub const MAX_USER_NAME_LEN: usize = 150;

/// Represents the 'user_submissions' table in the database.
/// One graded attempt at a quiz.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSubmission {
    pub id: i64,
    pub quiz_id: i64,
    pub user_name: String,
    pub score: i64,
    pub submitted_at: DateTime<Utc>,
}

/// A recorded answer joined with the question and option texts.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserAnswerDetail {
    pub question_id: i64,
    pub question_text: String,
    pub answer_id: i64,
    pub answer_text: String,
    pub is_correct: bool,
}

/// A submission row joined with its quiz title, for history listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubmissionSummary {
    pub id: i64,
    pub quiz_id: i64,
    pub quiz_title: String,
    pub user_name: String,
    pub score: i64,
    pub submitted_at: DateTime<Utc>,
}

/// Everything the result page shows for one submission.
#[derive(Debug, Serialize)]
pub struct SubmissionResult {
    pub submission: UserSubmission,
    pub quiz: Quiz,
    pub answers: Vec<UserAnswerDetail>,
    /// Question count of the quiz, not of the recorded answers.
    pub total_questions: i64,
}

/// Body of `POST /quizzes/{id}/submit/`.
///
/// Both fields are lenient: a missing name is reported as a validation error
/// by the handler, and `answers` values may be numbers or numeric strings.
#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub user_name: Option<String>,

    /// Key: question id as a string. Value: chosen answer id.
    #[serde(default)]
    pub answers: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitQuizResponse {
    pub redirect_url: String,
    pub score: i64,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionListParams {
    pub quiz_id: Option<i64>,
    /// Matches the user name.
    pub q: Option<String>,
}
