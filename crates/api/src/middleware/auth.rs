//! Bearer-token authentication extractor for Axum handlers.
//!
//! A token is accepted only when BOTH checks pass: its exact string is
//! present in the session store (so logout revokes it) AND its signature
//! and expiry verify (so a revoked-but-copied or expired string is
//! rejected). The two checks are deliberately kept separate; neither
//! alone is sufficient.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use bookshelf_core::error::CoreError;
use bookshelf_core::types::UserId;
use bookshelf_db::repositories::SessionRepo;

use crate::auth::token;
use crate::error::AppError;
use crate::state::AppState;

/// Every 401 uses the same body so a caller cannot tell which check failed.
const UNAUTHORIZED_MSG: &str = "Unauthorized access! Please login first!";

/// Authenticated user extracted from a `Bearer` token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's identity (from `claims.sub`).
    pub user_id: UserId,
    /// The username embedded in the token.
    pub username: String,
}

fn unauthorized() -> AppError {
    AppError::Core(CoreError::Unauthorized(UNAUTHORIZED_MSG.into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Header must be present and of the form `Bearer <token>`.
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .filter(|t| !t.is_empty())
            .ok_or_else(unauthorized)?;

        // 2. The exact token string must be in the logged-in set. A store
        //    fault here is a 500, not a 401; only a clean miss is a
        //    rejection.
        let owner = SessionRepo::find_owner(&state.pool, token)
            .await?
            .ok_or_else(unauthorized)?;

        // 3. Signature and expiry must verify, even though the store
        //    lookup succeeded. Expiry is enforced independently of
        //    revocation.
        let claims = token::verify(token, &state.config.token).map_err(|_| unauthorized())?;

        // The persisted owner and the signed subject must agree.
        if owner != claims.sub {
            return Err(unauthorized());
        }

        Ok(AuthUser {
            user_id: claims.sub,
            username: claims.username,
        })
    }
}
