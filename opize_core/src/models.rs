//! Wire models for the API's business objects.
//!
//! Field sets track the latest revision of the server schema; timestamps are
//! RFC 3339.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserObject {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub image_url: String,
    pub role: Vec<String>,
    pub last_login: DateTime<Utc>,
    /// Marketing opt-in moment; absent when the user never accepted.
    pub marketing_accept: Option<DateTime<Utc>>,
    pub currency: String,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectObject {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub url: String,
    pub icon_url: String,
    pub banner_url: String,
    pub rule_url: String,
    pub desc: String,
    pub status: ProjectStatus,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Show,
    Hidden,
}

/// Currency values the PATCH surface accepts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "KRW")]
    Krw,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProjectList {
    pub projects: Vec<ProjectObject>,
}

/// One OAuth connection a user granted to a project.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OauthGrant {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub project: ProjectObject,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OauthGrantList {
    pub oauths: Vec<OauthGrant>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Cached Notion render payloads are opaque to the SDK.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotionRecordMapList {
    pub record_maps: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotionRecordMap {
    pub record_map: serde_json::Value,
}

/// Deserializes from `{}`; write operations answer with an empty object.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct Empty {}
