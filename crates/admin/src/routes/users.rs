//! Operator management route handlers.
//!
//! Accounts are created through the auth service's sign-up side channel
//! (the backend trigger writes the matching profile row). Deleting an
//! account is explicitly refused here and directed to the hosted
//! console - profiles are read-only from this application.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use arcline_core::AdminProfile;
use arcline_store::StoreClient;

use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Users page template.
#[derive(Template, WebTemplate)]
#[template(path = "users/index.html")]
pub struct UsersTemplate {
    pub profiles: Vec<AdminProfile>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// New-operator form data.
#[derive(Debug, Deserialize)]
pub struct CreateUserForm {
    pub email: String,
    pub password: String,
}

/// Delete form carries the email so the refusal can name the account.
#[derive(Debug, Deserialize)]
pub struct DeleteUserForm {
    pub email: String,
}

async fn profile_listing(store: &StoreClient) -> (Vec<AdminProfile>, Option<String>) {
    match store.list_profiles().await {
        Ok(profiles) => (profiles, None),
        Err(error) => {
            tracing::error!(error = %error, "failed to list profiles");
            (Vec::new(), Some("Could not load operators.".to_string()))
        }
    }
}

/// Render the operator list.
///
/// GET /users
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> UsersTemplate {
    let store = state.store().authenticated(&admin.access_token);
    let (profiles, error) = profile_listing(&store).await;

    UsersTemplate {
        profiles,
        notice: None,
        error,
    }
}

/// Create an operator account via sign-up.
///
/// POST /users/create
#[instrument(skip(admin, state, form), fields(email = %form.email))]
pub async fn create(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<CreateUserForm>,
) -> UsersTemplate {
    let store = state.store().authenticated(&admin.access_token);

    let (notice, error) = match state.store().sign_up(&form.email, &form.password).await {
        Ok(_) => (
            Some("Account created. The operator can sign in now.".to_string()),
            None,
        ),
        Err(auth_error) => {
            tracing::error!(error = %auth_error, "sign-up failed");
            (None, Some(format!("Could not create account: {auth_error}")))
        }
    };

    let (profiles, list_error) = profile_listing(&store).await;

    UsersTemplate {
        profiles,
        notice,
        error: error.or(list_error),
    }
}

/// Refuse to delete: account removal is out of band, in the hosted
/// console. No remote call is made.
///
/// POST /users/{id}/delete
#[instrument(skip(admin, state, form))]
pub async fn delete(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(_id): Path<Uuid>,
    Form(form): Form<DeleteUserForm>,
) -> UsersTemplate {
    let store = state.store().authenticated(&admin.access_token);
    let (profiles, error) = profile_listing(&store).await;

    UsersTemplate {
        profiles,
        notice: Some(format!(
            "To remove {}, open the backend console's authentication panel. \
             Accounts cannot be deleted from here.",
            form.email
        )),
        error,
    }
}
