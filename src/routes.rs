// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{admin, pages, quiz},
    state::AppState,
    utils::auth::admin_middleware,
};

/// Assembles the main application router.
///
/// * Public pages and the quiz JSON endpoints at the root.
/// * Admin record management under `/api/admin`, behind the admin token.
/// * Static assets under `/static`.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let public_routes = Router::new()
        .route("/", get(pages::home))
        .route("/quizzes/", get(pages::quiz_list))
        .route("/quizzes/{id}/", get(pages::quiz_attempt))
        .route("/quizzes/{id}/data/", get(quiz::quiz_data))
        .route("/quizzes/{id}/submit/", post(quiz::submit_quiz))
        .route("/results/{submission_id}/", get(pages::quiz_result))
        .route("/events/", get(pages::event_list))
        .route("/history/", get(pages::history))
        .route("/profile/", get(pages::profile));

    let admin_routes = Router::new()
        .route("/quizzes", get(admin::list_quizzes).post(admin::create_quiz))
        .route(
            "/quizzes/{id}",
            get(admin::get_quiz)
                .put(admin::update_quiz)
                .delete(admin::delete_quiz),
        )
        .route(
            "/questions",
            get(admin::list_questions).post(admin::create_question),
        )
        .route(
            "/questions/{id}",
            get(admin::get_question)
                .put(admin::update_question)
                .delete(admin::delete_question),
        )
        .route("/answers", get(admin::list_answers).post(admin::create_answer))
        .route(
            "/answers/{id}",
            put(admin::update_answer).delete(admin::delete_answer),
        )
        .route("/events", get(admin::list_events).post(admin::create_event))
        .route(
            "/events/{id}",
            get(admin::get_event)
                .put(admin::update_event)
                .delete(admin::delete_event),
        )
        .route("/submissions", get(admin::list_submissions))
        .route(
            "/submissions/{id}",
            get(admin::get_submission).delete(admin::delete_submission),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api/admin", admin_routes)
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
