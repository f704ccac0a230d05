//! Session-stored operator identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session keys used by the back office.
pub mod session_keys {
    /// Key holding the [`super::CurrentAdmin`].
    pub const CURRENT_ADMIN: &str = "current_admin";
}

/// The signed-in operator, as stored in the session.
///
/// The access token is whatever the remote auth service issued at
/// login; no refresh or expiry handling happens here - when the service
/// stops accepting the token, requests fail and the operator signs in
/// again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// The auth service's user id.
    pub user_id: Uuid,
    pub email: String,
    /// Bearer token for row and storage calls made on this operator's
    /// behalf.
    pub access_token: String,
}
