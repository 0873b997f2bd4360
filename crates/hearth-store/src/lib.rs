pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use hearth_types::models::{AuthUser, NewInvitation, Role};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected store response: {0}")]
    Decode(String),
}

/// Everything the invite flow needs from the hosted store. Implemented by
/// [`http::HttpStore`] in production; tests substitute in-memory doubles.
#[async_trait]
pub trait Store: Send + Sync {
    /// Resolve a caller's bearer token to a user identity. `None` means the
    /// token is missing, expired, or otherwise unusable.
    async fn resolve_bearer(&self, token: &str) -> Result<Option<AuthUser>, StoreError>;

    /// Membership role of `user_id` in `household_id`, if any.
    async fn membership_role(
        &self,
        household_id: &str,
        user_id: &str,
    ) -> Result<Option<Role>, StoreError>;

    /// Mark every pending invitation for (`household_id`, `contact`) as
    /// revoked. Returns the number of rows touched.
    async fn revoke_pending(&self, household_id: &str, contact: &str) -> Result<u64, StoreError>;

    /// Insert a new invitation row and return the store-generated id.
    async fn insert_invitation(&self, invitation: &NewInvitation) -> Result<String, StoreError>;
}
