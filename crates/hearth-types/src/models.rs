use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Membership role within a household. Only bosses may issue invites;
/// helpers receive them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Boss,
    #[default]
    Helper,
}

/// Channel a one-time code is delivered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
}

/// Invitation lifecycle. `consumed` is set by the code-redemption flow,
/// which lives outside this service; rows are never deleted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Revoked,
    Consumed,
}

/// Caller identity as resolved by the store's auth subsystem.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
}

/// A new invitation row. The store generates the id; only the code's
/// digest is ever written, never the plaintext.
#[derive(Debug, Clone, Serialize)]
pub struct NewInvitation {
    pub household_id: String,
    pub inviter_id: String,
    pub role: Role,
    pub contact: String,
    pub contact_kind: ContactKind,
    pub otp_code_hash: String,
    pub otp_expires_at: DateTime<Utc>,
    pub status: InvitationStatus,
}
