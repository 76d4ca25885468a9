use crate::endpoint::Endpoint;
use crate::models::{Currency, Empty, OauthGrantList, UserObject};
use crate::types::UrlPath;
use chrono::{DateTime, Utc};
use http::Method;
use serde::Serialize;
use std::fmt;

/// Path selector for user-scoped operations: a numeric id or the literal `me`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UserId {
    Me,
    Id(u64),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Me => f.write_str("me"),
            UserId::Id(id) => write!(f, "{id}"),
        }
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId::Id(id)
    }
}

// GET /user/{userId}
#[derive(Clone, Debug)]
pub struct GetUser {
    pub user_id: UserId,
}

impl Endpoint for GetUser {
    const METHOD: Method = Method::GET;
    type Body = ();
    type Response = UserObject;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("user");
        path.push_segment_encoded(&self.user_id.to_string());
    }
}

// GET /user/{userId}/oauth
#[derive(Clone, Debug)]
pub struct GetUserOauths {
    pub user_id: UserId,
}

impl Endpoint for GetUserOauths {
    const METHOD: Method = Method::GET;
    type Body = ();
    type Response = OauthGrantList;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("user");
        path.push_segment_encoded(&self.user_id.to_string());
        path.push_raw("oauth");
    }
}

/// Partial update; unset fields are left untouched server-side.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// `Some(None)` writes an explicit `null`, revoking the opt-in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_accept: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

// PATCH /user/{userId}
#[derive(Clone, Debug)]
pub struct PatchUser {
    pub user_id: UserId,
    pub body: UserPatch,
}

impl Endpoint for PatchUser {
    const METHOD: Method = Method::PATCH;
    type Body = UserPatch;
    type Response = Empty;

    fn path(&self, path: &mut UrlPath) {
        path.push_raw("user");
        path.push_segment_encoded(&self.user_id.to_string());
    }

    fn body(&self) -> Option<&UserPatch> {
        Some(&self.body)
    }
}
