//! Authentication handlers (signup, login, me)

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: String,
    pub email: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /signup
///
/// Register a new user. The response carries the generated id and the
/// email — never anything derived from the password.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = state.auth.signup(&req.email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            id: user.id.to_string(),
            email: user.email,
        }),
    ))
}

/// POST /login
///
/// Exchange credentials for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let token = state.auth.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse { token }))
}

/// GET /me
///
/// Resolve the caller's identity from the bearer token. The gate does not
/// attach identity to the request, so the token is re-read and resolved
/// here.
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Json<MeResponse>> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .ok_or(ApiError::InvalidToken)?;

    let user = state.auth.resolve(token).await?;

    Ok(Json(MeResponse {
        id: user.id.to_string(),
        email: user.email,
    }))
}
