//! Back-office operator profiles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An operator profile, as stored in the `profiles` table.
///
/// Profiles are read-only from this application's perspective: rows are
/// created by the auth service's sign-up trigger, and removal happens in
/// the hosted console, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    /// The auth service's user id.
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub role: String,
}
