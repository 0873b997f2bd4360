use std::sync::LazyLock;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
};
use chrono::{Duration, Utc};
use regex::Regex;
use tracing::{debug, info};

use hearth_types::api::{SendInviteRequest, SendInviteResponse};
use hearth_types::models::{ContactKind, InvitationStatus, NewInvitation, Role};

use crate::AppState;
use crate::error::ApiError;

const DEFAULT_TTL_MINUTES: i64 = 15;
const MIN_TTL_MINUTES: i64 = 1;
const MAX_TTL_MINUTES: i64 = 60;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// E.164-ish: optional +, first digit 1-9, 7 to 16 digits total.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{6,15}$").unwrap());

/// POST /invites — mint a one-time code for a household invite and deliver
/// it over the requested channel. Validation and authorization run before
/// any side effect; a dispatch failure after the insert leaves the row
/// pending and is reported to the caller.
pub async fn send_invite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SendInviteRequest>,
) -> Result<Json<SendInviteResponse>, ApiError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| ApiError::Unauthorized("missing bearer credential".into()))?;

    let user = state
        .store
        .resolve_bearer(token)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("credential did not resolve to a user".into()))?;

    validate(&req)?;
    let ttl = req
        .ttl_minutes
        .unwrap_or(DEFAULT_TTL_MINUTES)
        .clamp(MIN_TTL_MINUTES, MAX_TTL_MINUTES);

    let membership = state
        .store
        .membership_role(&req.household_id, &user.id)
        .await?;
    if membership != Some(Role::Boss) {
        return Err(ApiError::Forbidden(
            "only bosses can send invites for this household".into(),
        ));
    }

    let code = hearth_otp::generate_code();
    let code_hash = hearth_otp::hash_code(&code);
    let expires_at = Utc::now() + Duration::minutes(ttl);

    // One pending invite per (household, contact): revoke before inserting.
    let revoked = state
        .store
        .revoke_pending(&req.household_id, &req.contact)
        .await?;
    if revoked > 0 {
        debug!(revoked, household_id = %req.household_id, "revoked prior pending invites");
    }

    let invitation_id = state
        .store
        .insert_invitation(&NewInvitation {
            household_id: req.household_id.clone(),
            inviter_id: user.id,
            role: req.role,
            contact: req.contact.clone(),
            contact_kind: req.contact_kind,
            otp_code_hash: code_hash,
            otp_expires_at: expires_at,
            status: InvitationStatus::Pending,
        })
        .await?;

    let message = compose_message(&code, ttl);
    match req.contact_kind {
        ContactKind::Email => {
            state
                .mailer
                .send(&req.contact, "Your Hearth code", &message)
                .await?;
        }
        ContactKind::Phone => state.sms.send(&req.contact, &message).await?,
    }

    info!(%invitation_id, household_id = %req.household_id, "invite dispatched");

    Ok(Json(SendInviteResponse {
        ok: true,
        invitation_id,
    }))
}

fn validate(req: &SendInviteRequest) -> Result<(), ApiError> {
    if req.household_id.trim().is_empty() {
        return Err(ApiError::Validation("household_id is required".into()));
    }
    if req.contact.trim().is_empty() {
        return Err(ApiError::Validation("contact is required".into()));
    }
    match req.contact_kind {
        ContactKind::Email if !is_email(&req.contact) => {
            Err(ApiError::Validation("invalid email address".into()))
        }
        ContactKind::Phone if !is_phone(&req.contact) => Err(ApiError::Validation(
            "invalid phone number (expected E.164)".into(),
        )),
        _ => Ok(()),
    }
}

fn is_email(x: &str) -> bool {
    EMAIL_RE.is_match(x.trim())
}

fn is_phone(x: &str) -> bool {
    PHONE_RE.is_match(x.trim())
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
}

fn compose_message(code: &str, ttl_minutes: i64) -> String {
    format!(
        "Your Hearth code is {code}. It expires in {ttl_minutes} minutes.\n\
         Enter this code in the app to join the household. Do not share this code."
    )
}
