use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::AppState;

const PASSWORD_HEADER: &str = "x-admin-password";

/// Admin gate for mutation handlers. Extract this to require the shared
/// `x-admin-password` header; a missing or wrong password yields 401.
pub struct AdminGate;

impl FromRequestParts<Arc<AppState>> for AdminGate {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let supplied = parts
            .headers
            .get(PASSWORD_HEADER)
            .and_then(|v| v.to_str().ok());

        if password_ok(supplied, &state.admin_password) {
            Ok(AdminGate)
        } else {
            Err((
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({"error": "Unauthorized"})),
            )
                .into_response())
        }
    }
}

pub fn password_ok(supplied: Option<&str>, expected: &str) -> bool {
    match supplied {
        Some(supplied) => constant_time_eq(supplied.as_bytes(), expected.as_bytes()),
        None => false,
    }
}

/// Constant-time comparison to prevent timing attacks.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
