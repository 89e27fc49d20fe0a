// tests/common/mod.rs

#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, Utc};
use quiz_events::{config::Config, routes, state::AppState};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use tempfile::TempDir;

pub const ADMIN_TOKEN: &str = "test_admin_token";

pub struct TestApp {
    /// Base URL, e.g. "http://127.0.0.1:12345".
    pub address: String,
    pub pool: SqlitePool,
    pub client: reqwest::Client,
    /// Holds the database file of apps spawned with `spawn_app_on_disk`.
    _db_dir: Option<TempDir>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub fn admin_get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path)).bearer_auth(ADMIN_TOKEN)
    }

    pub fn admin_post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path)).bearer_auth(ADMIN_TOKEN)
    }

    pub fn admin_put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path)).bearer_auth(ADMIN_TOKEN)
    }

    pub fn admin_delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path)).bearer_auth(ADMIN_TOKEN)
    }

    pub async fn submission_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM user_submissions")
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn user_answer_count(&self, submission_id: i64) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM user_answers WHERE submission_id = ?")
            .bind(submission_id)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

/// Spawns the app on a random port against a fresh in-memory database.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_admin_token(Some(ADMIN_TOKEN.to_string())).await
}

pub async fn spawn_app_with_admin_token(admin_token: Option<String>) -> TestApp {
    // A single connection that never expires keeps the in-memory database alive.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    serve(pool, "sqlite::memory:".to_string(), admin_token, None).await
}

/// Spawns the app against a database file with a multi-connection pool, so
/// requests really run side by side the way they do in production.
pub async fn spawn_app_on_disk() -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("quiz.db").display());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to open SQLite database file");

    serve(pool, database_url, Some(ADMIN_TOKEN.to_string()), Some(dir)).await
}

async fn serve(
    pool: SqlitePool,
    database_url: String,
    admin_token: Option<String>,
    db_dir: Option<TempDir>,
) -> TestApp {
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    let config = Config {
        database_url,
        rust_log: "error".to_string(),
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        admin_token,
        log_dir: "logs".to_string(),
        static_dir: "static".to_string(),
    };

    let state = AppState {
        pool: pool.clone(),
        config,
    };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        pool,
        client: reqwest::Client::new(),
        _db_dir: db_dir,
    }
}

pub async fn insert_quiz(pool: &SqlitePool, title: &str, created_at: DateTime<Utc>) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO quizzes (title, description, created_at, updated_at) VALUES (?, '', ?, ?) RETURNING id",
    )
    .bind(title)
    .bind(created_at)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_question(pool: &SqlitePool, quiz_id: i64, text: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO questions (quiz_id, text, question_type, created_at) VALUES (?, ?, 'single_choice', ?) RETURNING id",
    )
    .bind(quiz_id)
    .bind(text)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_answer(pool: &SqlitePool, question_id: i64, text: &str, is_correct: bool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO answers (question_id, text, is_correct) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(question_id)
    .bind(text)
    .bind(is_correct)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_event(pool: &SqlitePool, title: &str, date: NaiveDate) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO events (title, description, date, location) VALUES (?, '', ?, 'Main Hall') RETURNING id",
    )
    .bind(title)
    .bind(date)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Question ids with their (correct, wrong) answer ids.
pub struct SeededQuiz {
    pub quiz_id: i64,
    pub questions: Vec<(i64, i64, i64)>,
}

/// A quiz with `n` questions, each with one correct and one wrong answer.
pub async fn seed_quiz(pool: &SqlitePool, title: &str, n: usize) -> SeededQuiz {
    let quiz_id = insert_quiz(pool, title, Utc::now() - Duration::minutes(1)).await;
    let mut questions = Vec::new();
    for i in 0..n {
        let question_id = insert_question(pool, quiz_id, &format!("Question {}", i + 1)).await;
        let correct = insert_answer(pool, question_id, "Right", true).await;
        let wrong = insert_answer(pool, question_id, "Wrong", false).await;
        questions.push((question_id, correct, wrong));
    }
    SeededQuiz { quiz_id, questions }
}
