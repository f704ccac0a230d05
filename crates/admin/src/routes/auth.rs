//! Authentication route handlers.
//!
//! Verification is delegated entirely to the remote auth service; this
//! module exchanges the form's credentials for an access token and
//! keeps it in the session. The service's generic invalid-credentials
//! response gets a friendly message; every other refusal is shown
//! verbatim.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use arcline_store::AuthError;

use crate::filters;
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::{CurrentAdmin, session_keys};
use crate::state::AppState;

/// Message shown for the auth service's generic bad-login response.
const BAD_LOGIN_MESSAGE: &str = "Incorrect email or password";

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub email: String,
}

/// Render the login page.
///
/// GET /auth/login
pub async fn login_page() -> LoginTemplate {
    LoginTemplate {
        error: None,
        email: String::new(),
    }
}

/// Handle a login attempt.
///
/// POST /auth/login
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    match state
        .store()
        .sign_in_with_password(&form.email, &form.password)
        .await
    {
        Ok(auth) => {
            let admin = CurrentAdmin {
                user_id: auth.user.id,
                email: auth.user.email.unwrap_or_else(|| form.email.clone()),
                access_token: auth.access_token,
            };

            if let Err(error) = set_current_admin(&session, &admin).await {
                tracing::error!(error = %error, "failed to store session");
                return LoginTemplate {
                    error: Some("Could not start a session. Try again.".to_string()),
                    email: form.email,
                }
                .into_response();
            }

            tracing::info!(user_id = %admin.user_id, "operator signed in");
            Redirect::to("/dashboard").into_response()
        }
        Err(AuthError::InvalidCredentials) => LoginTemplate {
            error: Some(BAD_LOGIN_MESSAGE.to_string()),
            email: form.email,
        }
        .into_response(),
        Err(error) => LoginTemplate {
            error: Some(error.to_string()),
            email: form.email,
        }
        .into_response(),
    }
}

/// Logout: revoke the remote session (best-effort) and clear the local
/// one.
///
/// POST /auth/logout
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Redirect {
    if let Ok(Some(admin)) = session
        .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await
        && let Err(error) = state.store().sign_out(&admin.access_token).await
    {
        tracing::warn!(error = %error, "remote sign-out failed; clearing session anyway");
    }

    let _ = clear_current_admin(&session).await;
    Redirect::to("/auth/login")
}
