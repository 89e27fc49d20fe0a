// tests/admin_tests.rs

mod common;

use common::{ADMIN_TOKEN, seed_quiz, spawn_app, spawn_app_with_admin_token};
use serde_json::{Value, json};

#[tokio::test]
async fn admin_api_requires_the_token() {
    let app = spawn_app().await;

    let missing = app
        .client
        .get(app.url("/api/admin/quizzes"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 401);

    let wrong = app
        .client
        .get(app.url("/api/admin/quizzes"))
        .bearer_auth("not-the-token")
        .send()
        .await
        .unwrap();
    assert_eq!(wrong.status().as_u16(), 401);

    let ok = app.admin_get("/api/admin/quizzes").send().await.unwrap();
    assert_eq!(ok.status().as_u16(), 200);
}

#[tokio::test]
async fn admin_api_is_closed_without_a_configured_token() {
    let app = spawn_app_with_admin_token(None).await;

    let response = app
        .client
        .get(app.url("/api/admin/events"))
        .bearer_auth(ADMIN_TOKEN)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn authoring_flow_feeds_the_public_quiz() {
    let app = spawn_app().await;

    // 1. Quiz
    let created: Value = app
        .admin_post("/api/admin/quizzes")
        .json(&json!({
            "title": "Rust Basics",
            "description": "<p>Warm-up <b>questions</b></p><script>alert(1)</script>"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let quiz_id = created["id"].as_i64().unwrap();

    // 2. Question
    let response = app
        .admin_post("/api/admin/questions")
        .json(&json!({
            "quiz_id": quiz_id,
            "text": "Which keyword declares an immutable binding?",
            "question_type": "single_choice"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let question_id = response.json::<Value>().await.unwrap()["id"].as_i64().unwrap();

    // 3. Answers
    let mut answer_ids = Vec::new();
    for (text, is_correct) in [("let", true), ("var", false)] {
        let response = app
            .admin_post("/api/admin/answers")
            .json(&json!({
                "question_id": question_id,
                "text": text,
                "is_correct": is_correct
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 201);
        answer_ids.push(response.json::<Value>().await.unwrap()["id"].as_i64().unwrap());
    }

    // 4. Public projection sees the content, sanitized and without flags
    let data: Value = app
        .client
        .get(app.url(&format!("/quizzes/{}/data/", quiz_id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(data["description"], "<p>Warm-up <b>questions</b></p>");
    assert_eq!(data["questions"][0]["answers"][0]["text"], "let");
    assert!(data["questions"][0]["answers"][0].get("is_correct").is_none());

    // 5. Admin view of the question includes correctness
    let question: Value = app
        .admin_get(&format!("/api/admin/questions/{}", question_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(question["answers"][0]["is_correct"], true);
    assert_eq!(question["answers"][1]["is_correct"], false);

    // 6. Flip correctness and grade against the new key
    let response = app
        .admin_put(&format!("/api/admin/answers/{}", answer_ids[1]))
        .json(&json!({ "is_correct": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let result: Value = app
        .client
        .post(app.url(&format!("/quizzes/{}/submit/", quiz_id)))
        .json(&json!({
            "user_name": "Ferris",
            "answers": { question_id.to_string(): answer_ids[1] }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(result["score"], 1);
}

#[tokio::test]
async fn create_validates_input_and_foreign_keys() {
    let app = spawn_app().await;

    let blank_title = app
        .admin_post("/api/admin/quizzes")
        .json(&json!({ "title": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(blank_title.status().as_u16(), 400);

    let orphan = app
        .admin_post("/api/admin/questions")
        .json(&json!({
            "quiz_id": 12345,
            "text": "Lost question",
            "question_type": "text"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(orphan.status().as_u16(), 400);

    let bad_type = app
        .admin_post("/api/admin/questions")
        .json(&json!({
            "quiz_id": 1,
            "text": "Typed question",
            "question_type": "essay"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_type.status().as_u16(), 400);
    let body: Value = bad_type.json().await.unwrap();
    assert!(body["error"].is_string());

    let missing_title = app
        .admin_post("/api/admin/quizzes")
        .json(&json!({ "description": "No title" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_title.status().as_u16(), 400);
    let body: Value = missing_title.json().await.unwrap();
    assert!(body["error"].is_string());

    let not_json = app
        .admin_post("/api/admin/events")
        .header("Content-Type", "application/json")
        .body("{\"title\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(not_json.status().as_u16(), 400);
    let body: Value = not_json.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn non_numeric_ids_are_404() {
    let app = spawn_app().await;

    for path in ["/api/admin/quizzes/abc", "/api/admin/events/1.5", "/api/admin/submissions/x"] {
        let response = app.admin_get(path).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 404, "{}", path);
        let body: Value = response.json().await.unwrap();
        assert!(body["error"].is_string());
    }

    let update = app
        .admin_put("/api/admin/answers/abc")
        .json(&json!({ "text": "Renamed" }))
        .send()
        .await
        .unwrap();
    assert_eq!(update.status().as_u16(), 404);
}

#[tokio::test]
async fn update_and_delete_unknown_records_are_404() {
    let app = spawn_app().await;

    let update = app
        .admin_put("/api/admin/quizzes/999")
        .json(&json!({ "title": "Renamed" }))
        .send()
        .await
        .unwrap();
    assert_eq!(update.status().as_u16(), 404);

    let empty_update = app
        .admin_put("/api/admin/events/999")
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(empty_update.status().as_u16(), 404);

    for path in [
        "/api/admin/quizzes/999",
        "/api/admin/questions/999",
        "/api/admin/answers/999",
        "/api/admin/events/999",
        "/api/admin/submissions/999",
    ] {
        let response = app.admin_delete(path).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 404, "{}", path);
    }
}

#[tokio::test]
async fn deleting_a_quiz_cascades() {
    let app = spawn_app().await;
    let quiz = seed_quiz(&app.pool, "Doomed", 2).await;
    let (q1, c1, _) = quiz.questions[0];

    let submit = app
        .client
        .post(app.url(&format!("/quizzes/{}/submit/", quiz.quiz_id)))
        .json(&json!({ "user_name": "Ada", "answers": { q1.to_string(): c1 } }))
        .send()
        .await
        .unwrap();
    assert_eq!(submit.status().as_u16(), 200);

    let response = app
        .admin_delete(&format!("/api/admin/quizzes/{}", quiz.quiz_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    for table in ["questions", "answers", "user_submissions", "user_answers"] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&app.pool)
            .await
            .unwrap();
        assert_eq!(count, 0, "{} should be empty", table);
    }
}

#[tokio::test]
async fn deleting_an_answer_removes_user_answers_that_chose_it() {
    let app = spawn_app().await;
    let quiz = seed_quiz(&app.pool, "Shrinking", 1).await;
    let (q1, c1, _) = quiz.questions[0];

    app.client
        .post(app.url(&format!("/quizzes/{}/submit/", quiz.quiz_id)))
        .json(&json!({ "user_name": "Ada", "answers": { q1.to_string(): c1 } }))
        .send()
        .await
        .unwrap();

    let response = app
        .admin_delete(&format!("/api/admin/answers/{}", c1))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_answers")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
    assert_eq!(app.submission_count().await, 1);
}

#[tokio::test]
async fn event_crud_and_listing_includes_past_events() {
    let app = spawn_app().await;

    let response = app
        .admin_post("/api/admin/events")
        .json(&json!({
            "title": "Retro Night",
            "date": "2001-01-01",
            "location": "Old Hall"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let id = response.json::<Value>().await.unwrap()["id"].as_i64().unwrap();

    let response = app
        .admin_put(&format!("/api/admin/events/{}", id))
        .json(&json!({ "location": "New Hall" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let events: Vec<Value> = app
        .admin_get("/api/admin/events?q=Hall")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["location"], "New Hall");
    assert_eq!(events[0]["date"], "2001-01-01");

    let public = app
        .client
        .get(app.url("/events/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(!public.contains("Retro Night"));
}

#[tokio::test]
async fn submissions_can_be_filtered_by_name() {
    let app = spawn_app().await;
    let quiz = seed_quiz(&app.pool, "Filters", 1).await;

    for name in ["Alice", "Bob"] {
        app.client
            .post(app.url(&format!("/quizzes/{}/submit/", quiz.quiz_id)))
            .json(&json!({ "user_name": name }))
            .send()
            .await
            .unwrap();
    }

    let listed: Vec<Value> = app
        .admin_get(&format!("/api/admin/submissions?quiz_id={}&q=ali", quiz.quiz_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["user_name"], "Alice");
    assert_eq!(listed[0]["quiz_title"], "Filters");
}
