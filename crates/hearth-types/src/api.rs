use serde::{Deserialize, Serialize};

use crate::models::{ContactKind, Role};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SendInviteRequest {
    pub household_id: String,
    /// Role granted when the invite is accepted. Defaults to `helper`.
    #[serde(default)]
    pub role: Role,
    /// Email address or E.164 phone number, depending on `contact_kind`.
    pub contact: String,
    pub contact_kind: ContactKind,
    /// Minutes until the code expires. Defaults to 15, clamped to [1, 60].
    pub ttl_minutes: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SendInviteResponse {
    pub ok: bool,
    pub invitation_id: String,
}
