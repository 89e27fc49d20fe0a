// src/models/event.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'events' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    /// Sanitized HTML, may be empty.
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct EventListParams {
    /// Matches title or location.
    pub q: Option<String>,
}

/// DTO for creating a new event.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(max = 20000))]
    pub description: Option<String>,
    pub date: NaiveDate,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
}

/// DTO for updating an event. Fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(max = 20000))]
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,
}
