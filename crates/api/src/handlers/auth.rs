//! Handlers for registration, login, and logout.

use axum::extract::State;
use axum::http::StatusCode;
use bookshelf_core::error::CoreError;
use bookshelf_db::models::user::NewUser;
use bookshelf_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::auth::password::{hash_password, verify_password, DUMMY_HASH};
use crate::auth::token;
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::response::MsgResponse;
use crate::state::AppState;

/// Unknown username and wrong password produce this same body, so the
/// two cases are indistinguishable to the caller.
const NO_SUCH_USER_MSG: &str = "No such user found!";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName must not be empty"))]
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub thumbnail: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /logout`.
#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub token: String,
}

/// Successful login response: the bearer token and the username it was
/// issued to.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// Create a user with a fresh server-generated identity. Registration
/// does not authenticate the caller; login is a separate step.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MsgResponse>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let new_user = NewUser {
        user_id: Uuid::new_v4(),
        username: input.username,
        first_name: input.first_name,
        last_name: input.last_name,
        thumbnail: input.thumbnail,
        password_hash,
    };

    // A duplicate username maps to 409 in the error classifier.
    let user = UserRepo::create(&state.pool, &new_user).await?;
    tracing::info!(user_id = %user.user_id, username = %user.username, "User registered");

    Ok((StatusCode::CREATED, Json(MsgResponse::new("Created!"))))
}

/// POST /login
///
/// Verify credentials, issue a token, and persist the session record.
/// Issuance and persistence are one logical step: if the record cannot
/// be stored the login fails and no token reaches the caller.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<(StatusCode, Json<LoginResponse>)> {
    let Some(user) = UserRepo::find_by_username(&state.pool, &input.username).await? else {
        // Burn the same Argon2 cost as a real verification so an
        // unknown username cannot be told from a wrong password by
        // response time.
        let _ = verify_password(&input.password, DUMMY_HASH);
        return Err(CoreError::NotFound(NO_SUCH_USER_MSG.into()).into());
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(CoreError::NotFound(NO_SUCH_USER_MSG.into()).into());
    }

    let token = token::issue(user.user_id, &user.username, &state.config.token)
        .map_err(|e| AppError::Internal(format!("Token issue error: {e}")))?;

    // The single INSERT is the transactional unit; a failure here fails
    // the whole login.
    SessionRepo::create(&state.pool, &token, user.user_id).await?;
    tracing::info!(user_id = %user.user_id, "Login succeeded, session persisted");

    Ok((
        StatusCode::CREATED,
        Json(LoginResponse {
            username: user.username,
            token,
        }),
    ))
}

/// POST /logout
///
/// Delete the session record for the exact token string. Idempotent at
/// the HTTP contract: already-logged-out reports the same outcome, but
/// which case occurred is recorded for observability.
pub async fn logout(
    State(state): State<AppState>,
    Json(input): Json<LogoutRequest>,
) -> AppResult<Json<MsgResponse>> {
    let existed = SessionRepo::delete(&state.pool, &input.token).await?;

    if existed {
        tracing::info!("Session revoked");
    } else {
        tracing::info!("Logout for a token not in the logged-in set");
    }

    Ok(Json(MsgResponse::new("Logged out!")))
}
