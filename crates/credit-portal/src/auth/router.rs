use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::credentials::LoginForm;
use super::service::{AuthService, LoginError};

/// Login, logout and session lookup for partner accounts.
pub fn auth_router(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/v1/auth/login", post(login_handler))
        .route("/api/v1/auth/logout", post(logout_handler))
        .route("/api/v1/auth/session", get(session_handler))
        .with_state(service)
}

pub(crate) async fn login_handler(
    State(service): State<Arc<AuthService>>,
    Json(form): Json<LoginForm>,
) -> Response {
    match service.login(form).await {
        Ok(session) => {
            let payload = json!({ "redirect": "/admin-dashboard", "session": session });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn logout_handler(
    State(service): State<Arc<AuthService>>,
    headers: HeaderMap,
) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return missing_token();
    };
    match service.logout(token) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn session_handler(
    State(service): State<Arc<AuthService>>,
    headers: HeaderMap,
) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return missing_token();
    };
    match service.session(token) {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(error) => error_response(error),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn missing_token() -> Response {
    let payload = json!({ "error": "missing bearer token" });
    (StatusCode::UNAUTHORIZED, Json(payload)).into_response()
}

fn error_response(error: LoginError) -> Response {
    match error {
        LoginError::Invalid(ref errors) => {
            let payload = json!({ "error": error.to_string(), "errors": errors });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        LoginError::InvalidCredentials | LoginError::UnknownSession => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNAUTHORIZED, Json(payload)).into_response()
        }
    }
}
