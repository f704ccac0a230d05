//! Password auth API.
//!
//! Credential verification is delegated wholesale to the hosted auth
//! service; this module only exchanges email+password for an access
//! token and manages that token's lifecycle. The one message we
//! interpret is the service's generic invalid-credentials response,
//! which the login form translates; everything else passes through
//! verbatim.

use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use crate::client::StoreClient;
use crate::error::StoreError;

/// The auth service's exact response message for a bad email/password
/// pair. Matched exactly so other failures (rate limits, disabled
/// accounts) keep their original text.
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid login credentials";

/// Errors from auth operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email or password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Any other auth-service refusal, message passed through verbatim.
    #[error("{0}")]
    Service(String),

    /// Transport or decoding failure underneath the auth call.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A user as reported by the auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// The result of a successful password sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}

/// Classify a sign-in refusal: the generic invalid-credentials message
/// becomes its own variant, anything else passes through.
fn classify_sign_in_failure(error: StoreError) -> AuthError {
    match error {
        StoreError::Api { message, .. } if message == INVALID_CREDENTIALS_MESSAGE => {
            AuthError::InvalidCredentials
        }
        StoreError::Api { message, .. } => AuthError::Service(message),
        other => AuthError::Store(other),
    }
}

impl StoreClient {
    /// Exchange email+password for an access token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for the generic bad-login
    /// response, `AuthError::Service` with the verbatim message for any
    /// other refusal, and `AuthError::Store` for transport failures.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let response = self
            .http()
            .post(self.endpoint(&["auth", "v1", "token"]))
            .query(&[("grant_type", "password")])
            .header("apikey", self.api_key())
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(StoreError::from)?;

        let body = Self::read_body(response)
            .await
            .map_err(classify_sign_in_failure)?;
        let session: AuthSession = serde_json::from_str(&body).map_err(StoreError::from)?;
        Ok(session)
    }

    /// Revoke an access token. Best-effort: local logout proceeds even
    /// if revocation fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, access_token))]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), StoreError> {
        let response = self
            .http()
            .post(self.endpoint(&["auth", "v1", "logout"]))
            .header("apikey", self.api_key())
            .bearer_auth(access_token)
            .send()
            .await?;

        Self::read_body(response).await?;
        Ok(())
    }

    /// Fetch the user behind an access token (session validity check).
    ///
    /// # Errors
    ///
    /// Returns an error if the token is no longer accepted or the
    /// request fails.
    #[instrument(skip(self, access_token))]
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, StoreError> {
        let response = self
            .http()
            .get(self.endpoint(&["auth", "v1", "user"]))
            .header("apikey", self.api_key())
            .bearer_auth(access_token)
            .send()
            .await?;

        let body = Self::read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Create an operator account through the sign-up side channel. The
    /// backend's trigger creates the matching profile row.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Service` with the service's message if the
    /// account cannot be created.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let response = self
            .http()
            .post(self.endpoint(&["auth", "v1", "signup"]))
            .header("apikey", self.api_key())
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(StoreError::from)?;

        let body = Self::read_body(response).await.map_err(|error| match error {
            StoreError::Api { message, .. } => AuthError::Service(message),
            other => AuthError::Store(other),
        })?;
        let user: AuthUser = serde_json::from_str(&body).map_err(StoreError::from)?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_bad_login_is_translated() {
        let error = classify_sign_in_failure(StoreError::Api {
            status: 400,
            message: INVALID_CREDENTIALS_MESSAGE.to_string(),
        });
        assert!(matches!(error, AuthError::InvalidCredentials));
    }

    #[test]
    fn other_refusals_pass_through_verbatim() {
        let error = classify_sign_in_failure(StoreError::Api {
            status: 429,
            message: "For security purposes, you can only request this once every 60 seconds"
                .to_string(),
        });
        match error {
            AuthError::Service(message) => {
                assert!(message.contains("security purposes"));
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn transport_failures_keep_their_type() {
        let error = classify_sign_in_failure(StoreError::Timeout);
        assert!(matches!(error, AuthError::Store(StoreError::Timeout)));
    }
}
