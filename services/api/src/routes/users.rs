//! User account routes

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::{LoginRequest, LoginResponse, NewUser, SignupRequest, UserResponse},
    password,
    state::AppState,
};

/// Register a new user account
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> ApiResult<impl IntoResponse> {
    info!("Signup attempt for user: {}", payload.username);

    let existing = state
        .user_repository
        .find_by_username_or_email(&payload.username, &payload.email)
        .await?;
    if existing.is_some() {
        return Err(ApiError::BadRequest(
            "Username or email already exists".to_string(),
        ));
    }

    let password_hash = password::hash_password(&payload.password)?;

    let user = state
        .user_repository
        .create(&NewUser {
            username: payload.username,
            email: payload.email,
            password_hash,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Log a user in and issue a session token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    info!("Login attempt for user: {}", payload.username);

    let user = state
        .user_repository
        .find_by_username(&payload.username)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    if !password::verify_password(&user.password_hash, &payload.password)? {
        return Err(ApiError::Unauthorized("Invalid password".to_string()));
    }

    let token = state.jwt_service.generate_session_token(user.id)?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
    }))
}
