use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

use hearth_types::models::{AuthUser, NewInvitation, Role};

use crate::{Store, StoreError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for a PostgREST/GoTrue-style hosted backend. Table access is
/// authenticated with the service credential; bearer resolution forwards
/// the caller's own token.
pub struct HttpStore {
    client: Client,
    base_url: String,
    service_key: String,
}

#[derive(Debug, Deserialize)]
struct MembershipRow {
    role: Role,
}

#[derive(Debug, Deserialize)]
struct InsertedRow {
    id: String,
}

impl HttpStore {
    pub fn new(base_url: &str, service_key: &str) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        })
    }

    async fn check(resp: Response) -> Result<Response, StoreError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Err(StoreError::Status { status, body })
    }
}

#[async_trait]
impl Store for HttpStore {
    async fn resolve_bearer(&self, token: &str) -> Result<Option<AuthUser>, StoreError> {
        let resp = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.service_key)
            .bearer_auth(token)
            .send()
            .await?;

        match resp.status() {
            s if s.is_success() => Ok(Some(resp.json::<AuthUser>().await?)),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            s => Err(StoreError::Status {
                status: s.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            }),
        }
    }

    async fn membership_role(
        &self,
        household_id: &str,
        user_id: &str,
    ) -> Result<Option<Role>, StoreError> {
        let resp = self
            .client
            .get(format!("{}/rest/v1/memberships", self.base_url))
            .query(&[
                ("household_id", format!("eq.{household_id}")),
                ("user_id", format!("eq.{user_id}")),
                ("select", "role".to_string()),
            ])
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        let resp = Self::check(resp).await?;
        let rows: Vec<MembershipRow> = resp.json().await?;
        Ok(rows.into_iter().next().map(|r| r.role))
    }

    async fn revoke_pending(&self, household_id: &str, contact: &str) -> Result<u64, StoreError> {
        let resp = self
            .client
            .patch(format!("{}/rest/v1/invitations", self.base_url))
            .query(&[
                ("household_id", format!("eq.{household_id}")),
                ("contact", format!("eq.{contact}")),
                ("status", "eq.pending".to_string()),
            ])
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            // return=representation so the touched rows come back countable
            .header("Prefer", "return=representation")
            .json(&json!({ "status": "revoked" }))
            .send()
            .await?;

        let resp = Self::check(resp).await?;
        let rows: Vec<serde_json::Value> = resp.json().await?;
        Ok(rows.len() as u64)
    }

    async fn insert_invitation(&self, invitation: &NewInvitation) -> Result<String, StoreError> {
        let resp = self
            .client
            .post(format!("{}/rest/v1/invitations", self.base_url))
            .query(&[("select", "id")])
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=representation")
            .json(invitation)
            .send()
            .await?;

        let resp = Self::check(resp).await?;
        let rows: Vec<InsertedRow> = resp.json().await?;
        rows.into_iter()
            .next()
            .map(|r| r.id)
            .ok_or_else(|| StoreError::Decode("insert returned no rows".into()))
    }
}
