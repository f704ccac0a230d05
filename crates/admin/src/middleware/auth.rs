//! Authentication middleware and extractors for the back office.
//!
//! Every administrative route takes [`RequireAdminAuth`]; a request
//! without a signed-in operator is redirected to the login page before
//! any administrative content is produced. The session only proves we
//! issued a cookie - whether the token is still good is the auth
//! service's call, so the extractor re-checks it there on every
//! request, exactly as the views re-check on mount.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentAdmin, session_keys};
use crate::state::AppState;

/// Extractor that requires an authenticated operator.
///
/// If nobody is logged in, or the auth service no longer accepts the
/// session's token, returns a redirect to the login page for HTML
/// requests, or 401 Unauthorized for API requests.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdminAuth(admin): RequireAdminAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.email)
/// }
/// ```
pub struct RequireAdminAuth(pub CurrentAdmin);

/// Error returned when authentication is required but nobody is logged in.
pub enum AdminAuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

fn rejection_for(parts: &Parts) -> AdminAuthRejection {
    if parts.uri.path().starts_with("/api/") {
        AdminAuthRejection::Unauthorized
    } else {
        AdminAuthRejection::RedirectToLogin
    }
}

impl FromRequestParts<AppState> for RequireAdminAuth {
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminAuthRejection::Unauthorized)?
            .clone();

        // Get the current operator from the session
        let admin: CurrentAdmin = session
            .get(session_keys::CURRENT_ADMIN)
            .await
            .ok()
            .flatten()
            .ok_or_else(|| rejection_for(parts))?;

        // Confirm the token is still accepted by the auth service; a
        // stale session goes back through login rather than failing on
        // the first write.
        if let Err(error) = state.store().get_user(&admin.access_token).await {
            tracing::warn!(error = %error, "session token no longer accepted");
            let _ = clear_current_admin(&session).await;
            return Err(rejection_for(parts));
        }

        Ok(Self(admin))
    }
}

/// Helper to set the current operator in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Helper to clear the current operator from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}
