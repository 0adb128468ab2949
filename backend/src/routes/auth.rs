//! Authentication routes
//!
//! Signup and login; both issue a bearer token bound to the user.
//! Password hashing runs on the blocking thread pool so it never stalls
//! the async runtime.

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use blogcraft_shared::{AuthResponse, LoginRequest, SignupRequest};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// Register a new user
///
/// POST /auth/signup
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let response = UserService::signup(&state.db, state.tokens(), &req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
///
/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let response = UserService::login(&state.db, state.tokens(), &req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
