// src/utils/auth.rs

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};

use crate::{config::Config, error::AppError};

/// Axum Middleware: Admin access.
///
/// Expects `Authorization: Bearer <ADMIN_TOKEN>`.
/// Returns 403 when no admin token is configured and 401 when the header is
/// missing or carries a different token.
pub async fn admin_middleware(
    State(config): State<Config>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = config.admin_token.as_deref() else {
        return Err(AppError::Forbidden("Admin API is disabled".to_string()));
    };

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) if token == expected => Ok(next.run(req).await),
        _ => Err(AppError::AuthError("Invalid admin token".to_string())),
    }
}
