//! Caller identity extractor for Axum handlers.
//!
//! Authentication is owned by an upstream provider; the gateway in front
//! of this service verifies the caller and forwards their stable user id
//! in the `x-user-id` header. The core trusts that id as given.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use translab_core::error::CoreError;
use translab_core::types::DbId;

use crate::error::AppError;
use crate::router::USER_ID_HEADER;
use crate::state::AppState;

/// Authenticated user extracted from the `x-user-id` header.
///
/// Use this as an extractor parameter in any handler that requires a
/// caller identity:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's stable user id, as issued by the auth provider.
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(format!(
                    "Missing {USER_ID_HEADER} header"
                )))
            })?;

        let user_id: DbId = header.parse().map_err(|_| {
            AppError::Core(CoreError::Unauthorized(format!(
                "{USER_ID_HEADER} must be a numeric user id"
            )))
        })?;

        if user_id <= 0 {
            return Err(AppError::Core(CoreError::Unauthorized(format!(
                "{USER_ID_HEADER} must be a positive user id"
            ))));
        }

        Ok(AuthUser { user_id })
    }
}
